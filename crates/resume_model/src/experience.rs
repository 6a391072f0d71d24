//! Work experience entries

use serde::{Deserialize, Serialize};

/// A single work experience entry.
///
/// `current` and `end_date` are mutually exclusive by convention: when
/// `current` is true, renderers ignore `end_date` and substitute the
/// localized "Present" label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Experience {
    /// The end date renderers should use: `None` while the position is
    /// current, regardless of any stale `end_date` left behind by the editor.
    pub fn effective_end_date(&self) -> Option<&str> {
        if self.current {
            None
        } else {
            self.end_date.as_deref()
        }
    }

    /// Whether the entry carries the fields the validator requires.
    pub fn is_structurally_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.company.trim().is_empty()
            && !self.start_date.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_position_ignores_end_date() {
        let exp = Experience {
            title: "Dev".to_string(),
            company: "X".to_string(),
            start_date: "2020-01".to_string(),
            end_date: Some("2021-06".to_string()),
            current: true,
            ..Default::default()
        };
        assert_eq!(exp.effective_end_date(), None);
    }

    #[test]
    fn test_ended_position_keeps_end_date() {
        let exp = Experience {
            title: "Dev".to_string(),
            company: "X".to_string(),
            start_date: "2020-01".to_string(),
            end_date: Some("2021-06".to_string()),
            ..Default::default()
        };
        assert_eq!(exp.effective_end_date(), Some("2021-06"));
    }

    #[test]
    fn test_structural_completeness() {
        let mut exp = Experience {
            title: "Dev".to_string(),
            company: "X".to_string(),
            start_date: "2020-01".to_string(),
            ..Default::default()
        };
        assert!(exp.is_structurally_complete());

        exp.company = "  ".to_string();
        assert!(!exp.is_structurally_complete());
    }
}
