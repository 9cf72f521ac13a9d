pub mod convert;
pub mod defs;
pub mod extract;

pub use defs::{AngleLayout, JointAngleDef};

use crate::geometry::Point2;

pub const KEYPOINT_COUNT: usize = 15;

pub type KeypointSet = [Point2; KEYPOINT_COUNT];

/// Joint angles in layout order, degrees.
pub type AngleVector = Vec<f32>;

/// Slots of the 15-point host skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeypointIndex {
    Nose = 0,
    Neck = 1,
    RightShoulder = 2,
    RightElbow = 3,
    RightWrist = 4,
    LeftShoulder = 5,
    LeftElbow = 6,
    LeftWrist = 7,
    RightHip = 8,
    RightKnee = 9,
    RightAnkle = 10,
    LeftHip = 11,
    LeftKnee = 12,
    LeftAnkle = 13,
    Navel = 14,
}

impl KeypointIndex {
    pub const COUNT: usize = KEYPOINT_COUNT;

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Nose),
            1 => Some(Self::Neck),
            2 => Some(Self::RightShoulder),
            3 => Some(Self::RightElbow),
            4 => Some(Self::RightWrist),
            5 => Some(Self::LeftShoulder),
            6 => Some(Self::LeftElbow),
            7 => Some(Self::LeftWrist),
            8 => Some(Self::RightHip),
            9 => Some(Self::RightKnee),
            10 => Some(Self::RightAnkle),
            11 => Some(Self::LeftHip),
            12 => Some(Self::LeftKnee),
            13 => Some(Self::LeftAnkle),
            14 => Some(Self::Navel),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/skeleton/tests.rs"]
mod tests;
