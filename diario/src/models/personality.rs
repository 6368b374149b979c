use serde::{Deserialize, Serialize};

/// Big-Five trait scores. The prompt asks for 1-5 but the range is not enforced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct PersonalityScores {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl PersonalityScores {
    pub const MIN_SCORE: f64 = 1.0;
    pub const MAX_SCORE: f64 = 5.0;

    /// Traits in the fixed order the analysis prompt requests them.
    pub fn traits(&self) -> [(&'static str, f64); 5] {
        [
            ("openness", self.openness),
            ("conscientiousness", self.conscientiousness),
            ("extraversion", self.extraversion),
            ("agreeableness", self.agreeableness),
            ("neuroticism", self.neuroticism),
        ]
    }

    /// Names of traits scored outside the intended 1-5 scale.
    pub fn out_of_range(&self) -> Vec<&'static str> {
        self.traits()
            .into_iter()
            .filter(|(_, score)| !(Self::MIN_SCORE..=Self::MAX_SCORE).contains(score))
            .map(|(name, _)| name)
            .collect()
    }
}
