//! Joint angles and pose similarity over 2-D skeletal keypoints.
//!
//! [`geometry::joint_angle`] measures one angle, [`skeleton::extract`]
//! applies an [`skeleton::AngleLayout`] to a 15-point keypoint set, and
//! [`score`] compares two angle vectors. [`bridge`] and [`ffi`] expose the
//! call shapes host applications already use.

pub mod bridge;
pub mod error;
pub mod ffi;
pub mod geometry;
pub mod input;
pub mod report;
pub mod score;
pub mod simd;
pub mod skeleton;
pub mod telemetry;

pub use error::PoseError;
pub use geometry::{Point2, joint_angle};
pub use score::{PoseScore, ScoreProfile, ScoringMode, score_angles, score_angles_with};
pub use skeleton::extract::{extract_angles, extract_angles_with, extract_angles_xy};
pub use skeleton::{AngleLayout, AngleVector, KEYPOINT_COUNT, KeypointIndex, KeypointSet};
