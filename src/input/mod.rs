use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::Deserialize;
use tracing::debug;

use crate::error::{PoseError, check_len};
use crate::geometry::Point2;
use crate::skeleton::convert::from_blazepose;
use crate::skeleton::extract::extract_angles_with;
use crate::skeleton::{AngleLayout, AngleVector};

/// One pose on disk, in any of the shapes a host pipeline emits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PoseFile {
    Split { x: Vec<f32>, y: Vec<f32> },
    Points { keypoints: Vec<[f32; 2]> },
    Landmarks { landmarks: Vec<[f32; 2]> },
    Angles { angles: Vec<f32> },
}

impl PoseFile {
    pub fn kind(&self) -> &'static str {
        match self {
            PoseFile::Split { .. } => "split",
            PoseFile::Points { .. } => "keypoints",
            PoseFile::Landmarks { .. } => "landmarks",
            PoseFile::Angles { .. } => "angles",
        }
    }

    /// The 15-point keypoint set, when the file carries coordinates.
    pub fn keypoints(&self) -> Option<Result<Vec<Point2>, PoseError>> {
        match self {
            PoseFile::Split { x, y } => Some(
                check_len("y coordinate", x.len(), y.len())
                    .map(|_| x.iter().zip(y).map(|(&x, &y)| Point2::new(x, y)).collect()),
            ),
            PoseFile::Points { keypoints } => {
                Some(Ok(keypoints.iter().copied().map(Point2::from).collect()))
            }
            PoseFile::Landmarks { landmarks } => {
                let landmarks = landmarks
                    .iter()
                    .copied()
                    .map(Point2::from)
                    .collect::<Vec<_>>();
                Some(from_blazepose(&landmarks).map(|kp| kp.to_vec()))
            }
            PoseFile::Angles { .. } => None,
        }
    }

    pub fn resolve_angles(&self, layout: &AngleLayout) -> Result<AngleVector, PoseError> {
        match self {
            PoseFile::Angles { angles } => {
                check_len("angle vector", layout.len(), angles.len())?;
                Ok(angles.clone())
            }
            _ => match self.keypoints() {
                Some(keypoints) => extract_angles_with(layout, &keypoints?),
                None => Err(PoseError::InvalidInput(
                    "pose file carries no keypoints".to_string(),
                )),
            },
        }
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, PoseError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn parse_pose_file<R: BufRead>(reader: R) -> Result<PoseFile, PoseError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_pose_file(path: &Path) -> Result<PoseFile, PoseError> {
    let reader = open_maybe_gz(path)?;
    let pose = parse_pose_file(reader)?;
    debug!(path = %path.display(), kind = pose.kind(), "loaded pose file");
    Ok(pose)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
