use tracing::debug;

use crate::error::{PoseError, check_len};
use crate::geometry::{Point2, joint_angle};
use crate::skeleton::{AngleLayout, AngleVector, KEYPOINT_COUNT};

pub fn extract_angles(keypoints: &[Point2]) -> Result<AngleVector, PoseError> {
    extract_angles_with(&AngleLayout::native_v1(), keypoints)
}

pub fn extract_angles_with(
    layout: &AngleLayout,
    keypoints: &[Point2],
) -> Result<AngleVector, PoseError> {
    check_len("keypoint set", KEYPOINT_COUNT, keypoints.len())?;

    let angles = layout
        .angles
        .iter()
        .map(|d| {
            joint_angle(
                keypoints[d.first.index()],
                keypoints[d.mid.index()],
                keypoints[d.last.index()],
            )
        })
        .collect::<Vec<_>>();

    debug!(layout = layout.id, ?angles, "extracted joint angles");
    Ok(angles)
}

/// Split-buffer form used by host bridges: `x` and `y` hold the 15 keypoint
/// coordinates, `out` receives the native angles.
///
/// Nothing is written to `out` unless every length check passes.
pub fn extract_angles_xy(x: &[f32], y: &[f32], out: &mut [f32]) -> Result<(), PoseError> {
    extract_angles_xy_with(&AngleLayout::native_v1(), x, y, out)
}

pub fn extract_angles_xy_with(
    layout: &AngleLayout,
    x: &[f32],
    y: &[f32],
    out: &mut [f32],
) -> Result<(), PoseError> {
    check_len("x coordinate", KEYPOINT_COUNT, x.len())?;
    check_len("y coordinate", KEYPOINT_COUNT, y.len())?;
    if out.len() < layout.len() {
        return Err(PoseError::invalid_length(
            "angle output",
            layout.len(),
            out.len(),
        ));
    }

    let point = |i: usize| Point2::new(x[i], y[i]);
    for (slot, d) in out.iter_mut().zip(layout.angles) {
        *slot = joint_angle(point(d.first.index()), point(d.mid.index()), point(d.last.index()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/skeleton/extract.rs"]
mod tests;
