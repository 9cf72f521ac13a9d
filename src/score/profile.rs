use crate::skeleton::AngleLayout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringMode {
    /// Raw per-angle similarity, no gating.
    Native,
    /// Angles that disagree in sign, or score under `min_angle_score`, count as 0.
    Gated { min_angle_score: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreProfile {
    pub id: &'static str,
    pub mode: ScoringMode,
    pub expected_len: usize,
}

impl ScoreProfile {
    pub fn native_v1() -> Self {
        Self {
            id: "native_v1",
            mode: ScoringMode::Native,
            expected_len: AngleLayout::native_v1().len(),
        }
    }

    pub fn gated_v1() -> Self {
        Self {
            id: "gated_v1",
            mode: ScoringMode::Gated {
                min_angle_score: 50.0,
            },
            expected_len: AngleLayout::native_v1().len(),
        }
    }

    pub fn strict_v1() -> Self {
        let mut base = Self::gated_v1();
        base.id = "strict_v1";
        base.mode = ScoringMode::Gated {
            min_angle_score: 80.0,
        };
        base
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "native" | "native_v1" => Some(Self::native_v1()),
            "gated" | "gated_v1" => Some(Self::gated_v1()),
            "strict" | "strict_v1" => Some(Self::strict_v1()),
            _ => None,
        }
    }

    /// Same rule, sized for another angle layout.
    pub fn for_layout(mut self, layout: &AngleLayout) -> Self {
        self.expected_len = layout.len();
        self
    }
}

impl Default for ScoreProfile {
    fn default() -> Self {
        Self::native_v1()
    }
}
