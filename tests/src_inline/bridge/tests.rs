use super::*;

#[test]
fn test_sum() {
    assert_eq!(sum(2, 3), 5);
    assert_eq!(sum(-7, 7), 0);
    assert_eq!(sum(i32::MAX, 1), i32::MIN);
}

#[test]
fn test_greeting_is_stable() {
    assert_eq!(greeting(), GREETING);
    assert!(!greeting().is_empty());
}

#[test]
fn test_get_score_end_to_end() {
    let ramp = [0.0f32, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 170.0, 180.0];
    assert_eq!(get_score(&ramp, &ramp), 100.0);
    assert_eq!(get_score(&[0.0; 10], &[180.0; 10]), 0.0);
}

#[test]
fn test_get_score_bad_length_defaults() {
    assert_eq!(get_score(&[90.0; 9], &[90.0; 10]), 0.0);
    assert_eq!(get_score(&[90.0; 11], &[90.0; 11]), 0.0);
    assert_eq!(get_score(&[], &[]), 0.0);
}

#[test]
fn test_extract_compat_leaves_output_on_bad_length() {
    let mut out = [42.0f32; 10];
    let result = extract_angles_compat(&[0.0; 16], &[0.0; 16], &mut out);
    assert!(result.is_err());
    assert_eq!(out, [42.0f32; 10]);
}

#[test]
fn test_extract_compat_writes_on_valid_input() {
    let mut out = [42.0f32; 10];
    extract_angles_compat(&[1.0; 15], &[1.0; 15], &mut out).unwrap();
    assert_eq!(out, [0.0f32; 10]);
}
