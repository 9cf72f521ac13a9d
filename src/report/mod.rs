pub mod json;
pub mod text;
pub mod write;

use serde::Serialize;

use crate::score::{PoseScore, ScoreProfile};
use crate::skeleton::AngleLayout;

pub const WEAKEST_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub layout: &'a AngleLayout,
    pub reference: &'a [f32],
    pub reference_source: String,
    pub comparison: Option<Comparison<'a>>,

    pub tool_name: String,
    pub tool_version: String,
    pub simd_backend: String,
}

#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    pub candidate: &'a [f32],
    pub candidate_source: String,
    pub profile: &'a ScoreProfile,
    pub score: &'a PoseScore,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
    pub simd_backend: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AngleEntry {
    pub index: usize,
    pub name: &'static str,
    pub reference: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub profile: &'static str,
    pub candidate_source: String,
    pub mean: f32,
    pub median: f32,
    pub p10: f32,
    pub min: f32,
    pub weakest: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub layout: &'static str,
    pub n_angles: usize,
    pub reference_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreSummary>,
    pub angles: Vec<AngleEntry>,
}

pub fn build_summary(input: &ReportInput<'_>) -> SummaryData {
    let angles = input
        .layout
        .angles
        .iter()
        .enumerate()
        .map(|(i, d)| AngleEntry {
            index: i,
            name: d.id,
            reference: input.reference.get(i).copied().unwrap_or(0.0),
            candidate: input.comparison.as_ref().and_then(|c| c.candidate.get(i).copied()),
            score: input
                .comparison
                .as_ref()
                .and_then(|c| c.score.per_angle.get(i).copied()),
        })
        .collect::<Vec<_>>();

    let score = input.comparison.as_ref().map(|c| ScoreSummary {
        profile: c.profile.id,
        candidate_source: c.candidate_source.clone(),
        mean: c.score.mean,
        median: median(&c.score.per_angle),
        p10: p10(&c.score.per_angle),
        min: min_f32(&c.score.per_angle),
        weakest: weakest_angles(&angles, WEAKEST_COUNT),
    });

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
            simd_backend: input.simd_backend.clone(),
        },
        layout: input.layout.id,
        n_angles: input.layout.len(),
        reference_source: input.reference_source.clone(),
        score,
        angles,
    }
}

/// Names of the `k` lowest-scoring angles, ties broken by layout order.
pub fn weakest_angles(angles: &[AngleEntry], k: usize) -> Vec<String> {
    let mut scored = angles
        .iter()
        .filter_map(|a| a.score.map(|s| (s, a.index, a.name)))
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });
    scored
        .into_iter()
        .take(k)
        .map(|(_, _, name)| name.to_string())
        .collect()
}

pub fn format_f32_6(v: f32) -> String {
    format!("{:.6}", v)
}

pub fn quantile_indexed(values: &[f32], p: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f32 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f32]) -> f32 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f32]) -> f32 {
    quantile_indexed(values, 0.10)
}

pub fn min_f32(values: &[f32]) -> f32 {
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    if min.is_finite() { min } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
