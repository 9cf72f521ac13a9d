use super::*;
use crate::geometry::Point2;

fn standing_pose() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 10.0),  // nose
        Point2::new(0.0, 8.0),   // neck
        Point2::new(-2.0, 8.0),  // right shoulder
        Point2::new(-2.0, 5.0),  // right elbow
        Point2::new(-2.0, 2.0),  // right wrist
        Point2::new(2.0, 8.0),   // left shoulder
        Point2::new(4.0, 8.0),   // left elbow
        Point2::new(6.0, 8.0),   // left wrist
        Point2::new(-1.0, 0.0),  // right hip
        Point2::new(-1.0, -4.0), // right knee
        Point2::new(-1.0, -8.0), // right ankle
        Point2::new(1.0, 0.0),   // left hip
        Point2::new(1.0, -4.0),  // left knee
        Point2::new(3.0, -4.0),  // left ankle
        Point2::new(0.0, 2.0),   // navel
    ]
}

#[test]
fn test_native_angles_standing_pose() {
    let angles = extract_angles(&standing_pose()).unwrap();
    assert_eq!(angles.len(), 10);
    // Arm hanging down from the right shoulder, elbow straight.
    assert!((angles[0] - 90.0).abs() < 1e-4);
    assert!((angles[1] - 180.0).abs() < 1e-4);
    // Left arm raised sideways.
    assert!((angles[2] - 180.0).abs() < 1e-4);
    assert!((angles[3] - 180.0).abs() < 1e-4);
    // Straight right leg, left shin bent sideways.
    assert!((angles[4] - 180.0).abs() < 1e-4);
    assert!((angles[5] - 90.0).abs() < 1e-4);
    for a in &angles {
        assert!((0.0..=180.0).contains(a));
    }
}

#[test]
fn test_wrong_length_is_rejected() {
    let mut short = standing_pose();
    short.pop();
    let err = extract_angles(&short).unwrap_err();
    assert!(err.is_invalid_length());

    let mut long = standing_pose();
    long.push(Point2::new(0.0, 0.0));
    assert!(extract_angles(&long).unwrap_err().is_invalid_length());
}

#[test]
fn test_identical_points_collapse_to_zero() {
    let same = vec![Point2::new(3.5, -1.25); 15];
    let angles = extract_angles(&same).unwrap();
    assert_eq!(angles, vec![0.0; 10]);
}

#[test]
fn test_xy_matches_point_form() {
    let pose = standing_pose();
    let x = pose.iter().map(|p| p.x).collect::<Vec<_>>();
    let y = pose.iter().map(|p| p.y).collect::<Vec<_>>();
    let mut out = [0.0f32; 10];
    extract_angles_xy(&x, &y, &mut out).unwrap();
    let expected = extract_angles(&pose).unwrap();
    for (a, b) in out.iter().zip(expected.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_xy_bad_length_leaves_output_untouched() {
    let sentinel = [-7.0f32; 10];
    for n in [14usize, 16] {
        let x = vec![1.0f32; n];
        let y = vec![2.0f32; 15];
        let mut out = sentinel;
        let err = extract_angles_xy(&x, &y, &mut out).unwrap_err();
        assert!(err.is_invalid_length());
        assert_eq!(out, sentinel);

        let mut out = sentinel;
        assert!(extract_angles_xy(&y, &x, &mut out).is_err());
        assert_eq!(out, sentinel);
    }
}

#[test]
fn test_xy_short_output_rejected() {
    let x = vec![0.0f32; 15];
    let y = vec![0.0f32; 15];
    let mut out = [9.0f32; 9];
    assert!(extract_angles_xy(&x, &y, &mut out).is_err());
    assert_eq!(out, [9.0f32; 9]);
}

#[test]
fn test_extended_layout_uses_navel() {
    let angles = extract_angles_with(&AngleLayout::extended_v1(), &standing_pose()).unwrap();
    assert_eq!(angles.len(), 14);
    // Nose straight above the navel, right ankle below-left of it.
    let expected = crate::geometry::joint_angle(
        Point2::new(0.0, 10.0),
        Point2::new(0.0, 2.0),
        Point2::new(-1.0, -8.0),
    );
    assert_eq!(angles[13].to_bits(), expected.to_bits());
}

#[test]
fn test_extraction_deterministic_bits() {
    let a = extract_angles(&standing_pose()).unwrap();
    let b = extract_angles(&standing_pose()).unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}
