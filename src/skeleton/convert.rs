use crate::error::PoseError;
use crate::geometry::{Point2, line_intersection, midpoint};
use crate::skeleton::{KEYPOINT_COUNT, KeypointIndex, KeypointSet};

pub const BLAZEPOSE_LANDMARKS: usize = 33;

const BP_NOSE: usize = 0;
const BP_LEFT_SHOULDER: usize = 11;
const BP_RIGHT_SHOULDER: usize = 12;
const BP_LEFT_HIP: usize = 23;
const BP_RIGHT_HIP: usize = 24;

// Direct copies into the 15-point skeleton; neck and navel are derived.
const DIRECT: &[(KeypointIndex, usize)] = &[
    (KeypointIndex::Nose, BP_NOSE),
    (KeypointIndex::RightShoulder, BP_RIGHT_SHOULDER),
    (KeypointIndex::RightElbow, 14),
    (KeypointIndex::RightWrist, 16),
    (KeypointIndex::LeftShoulder, BP_LEFT_SHOULDER),
    (KeypointIndex::LeftElbow, 13),
    (KeypointIndex::LeftWrist, 15),
    (KeypointIndex::RightHip, BP_RIGHT_HIP),
    (KeypointIndex::RightKnee, 26),
    (KeypointIndex::RightAnkle, 28),
    (KeypointIndex::LeftHip, BP_LEFT_HIP),
    (KeypointIndex::LeftKnee, 25),
    (KeypointIndex::LeftAnkle, 27),
];

/// Folds a 33-landmark BlazePose detection into the 15-point skeleton.
///
/// The neck sits halfway between the shoulders at the left shoulder's height.
/// The navel is where the shoulder-to-opposite-hip diagonals cross, or
/// [`Point2::FAR`] when they are parallel.
pub fn from_blazepose(landmarks: &[Point2]) -> Result<KeypointSet, PoseError> {
    if landmarks.len() < BLAZEPOSE_LANDMARKS {
        return Err(PoseError::invalid_length(
            "landmark set",
            BLAZEPOSE_LANDMARKS,
            landmarks.len(),
        ));
    }

    let mut out = [Point2::default(); KEYPOINT_COUNT];
    for &(slot, src) in DIRECT {
        out[slot.index()] = landmarks[src];
    }

    let left_shoulder = landmarks[BP_LEFT_SHOULDER];
    let right_shoulder = landmarks[BP_RIGHT_SHOULDER];
    out[KeypointIndex::Neck.index()] = Point2::new(
        midpoint(left_shoulder, right_shoulder).x,
        left_shoulder.y,
    );
    out[KeypointIndex::Navel.index()] = line_intersection(
        right_shoulder,
        landmarks[BP_LEFT_HIP],
        left_shoulder,
        landmarks[BP_RIGHT_HIP],
    )
    .unwrap_or(Point2::FAR);

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/skeleton/convert.rs"]
mod tests;
