//! Similarity scoring between a reference pose and a candidate pose.
//!
//! Per angle, `100 - |(| |reference| - candidate | / 180) * 100|`; the pose
//! score is the mean over the angle vector. The reference is taken by
//! magnitude and the candidate is not, so swapping the arguments can change
//! the result when signed angles are passed in. Angles from
//! [`crate::geometry::joint_angle`] are never negative and keep every
//! per-angle score in [0, 100].

pub mod profile;

pub use profile::{ScoreProfile, ScoringMode};

use serde::Serialize;
use tracing::debug;

use crate::error::{PoseError, check_len};
use crate::geometry::Point2;
use crate::simd;
use crate::skeleton::AngleLayout;
use crate::skeleton::extract::extract_angles_with;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseScore {
    pub mean: f32,
    pub per_angle: Vec<f32>,
}

/// Native-rule mean score over two 10-angle vectors.
pub fn score_angles(reference: &[f32], candidate: &[f32]) -> Result<f32, PoseError> {
    score_angles_with(&ScoreProfile::native_v1(), reference, candidate)
}

pub fn score_angles_with(
    profile: &ScoreProfile,
    reference: &[f32],
    candidate: &[f32],
) -> Result<f32, PoseError> {
    check_lengths(profile, reference, candidate)?;
    let mean = match profile.mode {
        ScoringMode::Native => native_mean(reference, candidate),
        ScoringMode::Gated { min_angle_score } => {
            mean_of(&gated_scores(reference, candidate, min_angle_score))
        }
    };
    debug!(profile = profile.id, mean, "scored pose");
    Ok(mean)
}

pub fn score_breakdown(
    profile: &ScoreProfile,
    reference: &[f32],
    candidate: &[f32],
) -> Result<PoseScore, PoseError> {
    check_lengths(profile, reference, candidate)?;
    let (per_angle, mean) = match profile.mode {
        ScoringMode::Native => {
            let per_angle = reference
                .iter()
                .zip(candidate)
                .map(|(&r, &c)| simd::angle_similarity(r, c))
                .collect::<Vec<_>>();
            (per_angle, native_mean(reference, candidate))
        }
        ScoringMode::Gated { min_angle_score } => {
            let per_angle = gated_scores(reference, candidate, min_angle_score);
            let mean = mean_of(&per_angle);
            (per_angle, mean)
        }
    };
    debug!(profile = profile.id, mean, "scored pose with breakdown");
    Ok(PoseScore { mean, per_angle })
}

/// Extracts both keypoint sets with `layout` and scores the angle vectors.
pub fn score_poses(
    profile: &ScoreProfile,
    layout: &AngleLayout,
    reference: &[Point2],
    candidate: &[Point2],
) -> Result<PoseScore, PoseError> {
    let reference = extract_angles_with(layout, reference)?;
    let candidate = extract_angles_with(layout, candidate)?;
    score_breakdown(profile, &reference, &candidate)
}

fn check_lengths(
    profile: &ScoreProfile,
    reference: &[f32],
    candidate: &[f32],
) -> Result<(), PoseError> {
    check_len("reference angle vector", profile.expected_len, reference.len())?;
    check_len("candidate angle vector", profile.expected_len, candidate.len())
}

fn gated_scores(reference: &[f32], candidate: &[f32], min_angle_score: f32) -> Vec<f32> {
    reference
        .iter()
        .zip(candidate)
        .map(|(&r, &c)| gated_angle_score(r, c, min_angle_score))
        .collect()
}

fn gated_angle_score(reference: f32, candidate: f32, min_angle_score: f32) -> f32 {
    let same_sign = candidate * reference > 0.0;
    if !same_sign {
        return 0.0;
    }
    let deviation = (candidate.abs() - reference.abs()).abs();
    if deviation > 180.0 {
        return 0.0;
    }
    let score = 100.0 - ((deviation / 180.0) * 100.0).abs();
    if score >= min_angle_score { score } else { 0.0 }
}

fn native_mean(reference: &[f32], candidate: &[f32]) -> f32 {
    if reference.is_empty() {
        return 0.0;
    }
    (simd::similarity_sum(reference, candidate) / reference.len() as f64) as f32
}

fn mean_of(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    (simd::sum_f32_f64(values) / values.len() as f64) as f32
}

#[cfg(test)]
#[path = "../../tests/src_inline/score/tests.rs"]
mod tests;
