//! Skills

use serde::{Deserialize, Serialize};

/// Proficiency level shown as a badge next to each skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Relative rank used for sorting skill grids (expert first).
    pub fn rank(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Advanced => 2,
            SkillLevel::Expert => 3,
        }
    }
}

/// A skill entry. Name uniqueness within the list is by convention only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serialization_is_lowercase() {
        let json = serde_json::to_string(&SkillLevel::Advanced).unwrap();
        assert_eq!(json, r#""advanced""#);

        let parsed: SkillLevel = serde_json::from_str(r#""expert""#).unwrap();
        assert_eq!(parsed, SkillLevel::Expert);
    }

    #[test]
    fn test_level_ranking() {
        assert!(SkillLevel::Expert.rank() > SkillLevel::Advanced.rank());
        assert!(SkillLevel::Intermediate.rank() > SkillLevel::Beginner.rank());
    }
}
