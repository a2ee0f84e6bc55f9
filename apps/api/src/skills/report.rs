//! Skill-gap report: the structured answer to "how far am I from this role?".
//!
//! The model is asked for exactly this JSON shape. Whatever it returns is parsed
//! strictly (unknown enum values fail) and then `normalize`d into the documented
//! numeric ranges before it reaches the client.

use serde::{Deserialize, Deserializer, Serialize};

pub const MATCH_PERCENTAGE_MAX: u32 = 100;
pub const LEVEL_RANGE: (u32, u32) = (50, 95);
pub const RATING_RANGE: (f64, f64) = (4.5, 4.9);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapReport {
    #[serde(deserialize_with = "rounded")]
    pub match_percentage: u32,
    #[serde(default)]
    pub current_skills: Vec<CurrentSkill>,
    #[serde(default)]
    pub missing_skills: Vec<MissingSkill>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSkill {
    pub name: String,
    #[serde(deserialize_with = "rounded")]
    pub level: u32,
    pub status: SkillStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingSkill {
    pub name: String,
    pub importance: Importance,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time_to_learn: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default)]
    pub price: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SkillStatus {
    Strong,
    Good,
    Developing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Importance {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RecommendationKind {
    Course,
    Certification,
    Project,
}

impl TryFrom<String> for SkillStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strong" => Ok(SkillStatus::Strong),
            "good" => Ok(SkillStatus::Good),
            "developing" => Ok(SkillStatus::Developing),
            _ => Err(format!("unknown skill status '{value}'")),
        }
    }
}

impl TryFrom<String> for Importance {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Importance::High),
            "medium" => Ok(Importance::Medium),
            _ => Err(format!("unknown importance '{value}'")),
        }
    }
}

impl TryFrom<String> for RecommendationKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "course" => Ok(RecommendationKind::Course),
            "certification" => Ok(RecommendationKind::Certification),
            "project" => Ok(RecommendationKind::Project),
            _ => Err(format!("unknown recommendation type '{value}'")),
        }
    }
}

fn default_rating() -> f64 {
    RATING_RANGE.0
}

/// Accepts any JSON number and rounds it; negatives become 0.
fn rounded<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(0.0, u32::MAX as f64) as u32)
}

impl SkillGapReport {
    /// Clamps every number into its documented range.
    pub fn normalize(mut self) -> Self {
        self.match_percentage = self.match_percentage.min(MATCH_PERCENTAGE_MAX);
        for skill in &mut self.current_skills {
            skill.level = skill.level.clamp(LEVEL_RANGE.0, LEVEL_RANGE.1);
        }
        for rec in &mut self.recommendations {
            let rating = rec.rating.clamp(RATING_RANGE.0, RATING_RANGE.1);
            rec.rating = (rating * 10.0).round() / 10.0;
        }
        self
    }
}
