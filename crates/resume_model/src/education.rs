//! Education entries

use serde::{Deserialize, Serialize};

/// A single education entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub honors: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Education {
    /// Whether the entry carries the fields the validator requires.
    pub fn is_structurally_complete(&self) -> bool {
        !self.degree.trim().is_empty() && !self.institution.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_completeness() {
        let edu = Education {
            degree: "BSc Computer Science".to_string(),
            institution: "Cairo University".to_string(),
            ..Default::default()
        };
        assert!(edu.is_structurally_complete());

        let missing = Education {
            degree: "".to_string(),
            institution: "Cairo University".to_string(),
            ..Default::default()
        };
        assert!(!missing.is_structurally_complete());
    }
}
