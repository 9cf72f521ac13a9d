//! Call shapes of the original host bridge.
//!
//! These keep the silent behaviour hosts already depend on: a malformed
//! angle request leaves the output buffer as it was and a malformed score
//! request yields 0.0. The underlying `Result` is still returned or logged
//! so a caller can tell "poor match" from "bad input".

use tracing::warn;

use crate::error::PoseError;
use crate::score::score_angles;
use crate::skeleton::extract::extract_angles_xy;

pub const GREETING: &str = "Hello from Rust";

/// Connectivity probe. Wraps on overflow like a JVM `int`.
pub fn sum(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn greeting() -> &'static str {
    GREETING
}

pub fn extract_angles_compat(x: &[f32], y: &[f32], out: &mut [f32]) -> Result<(), PoseError> {
    let result = extract_angles_xy(x, y, out);
    if let Err(err) = &result {
        warn!(%err, "angle extraction skipped; output left untouched");
    }
    result
}

pub fn get_score(reference: &[f32], candidate: &[f32]) -> f32 {
    match score_angles(reference, candidate) {
        Ok(score) => score,
        Err(err) => {
            warn!(%err, "pose score defaulted to 0.0");
            0.0
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/bridge/tests.rs"]
mod tests;
