use crate::skeleton::KeypointIndex;
use crate::skeleton::KeypointIndex::*;

/// One joint angle: the angle at `mid` between `first` and `last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointAngleDef {
    pub id: &'static str,
    pub first: KeypointIndex,
    pub mid: KeypointIndex,
    pub last: KeypointIndex,
}

const fn def(
    id: &'static str,
    first: KeypointIndex,
    mid: KeypointIndex,
    last: KeypointIndex,
) -> JointAngleDef {
    JointAngleDef {
        id,
        first,
        mid,
        last,
    }
}

// Output order is part of the host contract.
const NATIVE_ANGLES: &[JointAngleDef] = &[
    def("right_shoulder", LeftShoulder, RightShoulder, RightElbow),
    def("right_elbow", RightShoulder, RightElbow, RightWrist),
    def("left_shoulder", RightShoulder, LeftShoulder, LeftElbow),
    def("left_elbow", LeftShoulder, LeftElbow, LeftWrist),
    def("right_knee", RightHip, RightKnee, RightAnkle),
    def("left_knee", LeftHip, LeftKnee, LeftAnkle),
    def("left_flank", RightShoulder, LeftShoulder, LeftHip),
    def("right_hip", RightShoulder, RightHip, RightKnee),
    def("left_hip", LeftShoulder, LeftHip, LeftKnee),
    def("right_flank", LeftShoulder, RightShoulder, RightHip),
];

const EXTENDED_ANGLES: &[JointAngleDef] = &[
    def("right_arm", LeftShoulder, RightShoulder, RightWrist),
    def("right_elbow", RightShoulder, RightElbow, RightWrist),
    def("left_arm", RightShoulder, LeftShoulder, LeftWrist),
    def("left_elbow", LeftShoulder, LeftElbow, LeftWrist),
    def("right_hip", Navel, RightHip, RightKnee),
    def("right_knee", RightHip, RightKnee, RightAnkle),
    def("left_hip", Navel, LeftHip, LeftKnee),
    def("left_knee", LeftHip, LeftKnee, LeftAnkle),
    def("left_flank", RightShoulder, LeftShoulder, LeftHip),
    def("right_flank", LeftShoulder, RightShoulder, RightHip),
    def("right_body_line", RightShoulder, RightHip, RightAnkle),
    def("left_body_line", LeftShoulder, LeftHip, LeftAnkle),
    def("left_stance", Nose, Navel, LeftAnkle),
    def("right_stance", Nose, Navel, RightAnkle),
];

/// A named, ordered set of joint angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleLayout {
    pub id: &'static str,
    pub angles: &'static [JointAngleDef],
}

impl AngleLayout {
    /// The ten angles computed by the native bridge.
    pub fn native_v1() -> Self {
        Self {
            id: "native_v1",
            angles: NATIVE_ANGLES,
        }
    }

    pub fn extended_v1() -> Self {
        Self {
            id: "extended_v1",
            angles: EXTENDED_ANGLES,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "native" | "native_v1" => Some(Self::native_v1()),
            "extended" | "extended_v1" => Some(Self::extended_v1()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.angles.iter().map(|d| d.id)
    }
}

impl Default for AngleLayout {
    fn default() -> Self {
        Self::native_v1()
    }
}
