//! Completeness scoring
//!
//! Heuristic 0-100 measure of how many recommended resume fields are filled.
//! The weights are advisory; no other component depends on the exact values.

use crate::ResumeData;

const WEIGHT_NAME: u32 = 20;
const WEIGHT_CONTACT: u32 = 15;
const WEIGHT_SUMMARY: u32 = 15;
const WEIGHT_EXPERIENCE: u32 = 25;
const WEIGHT_EDUCATION: u32 = 15;
const WEIGHT_SKILLS: u32 = 10;

/// Compute the weighted completeness score, clamped to 0..=100.
///
/// Adding an optional field never decreases the score: each weight is
/// granted by presence alone.
pub fn completeness_score(resume: &ResumeData) -> u8 {
    let info = &resume.personal_info;
    let mut score = 0u32;

    if !info.name.trim().is_empty() {
        score += WEIGHT_NAME;
    }
    if info.has_contact() {
        score += WEIGHT_CONTACT;
    }
    if info.summary.as_deref().is_some_and(|s| !s.trim().is_empty()) {
        score += WEIGHT_SUMMARY;
    }
    if !resume.experience.is_empty() {
        score += WEIGHT_EXPERIENCE;
    }
    if !resume.education.is_empty() {
        score += WEIGHT_EDUCATION;
    }
    if !resume.skills.is_empty() {
        score += WEIGHT_SKILLS;
    }

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Education, Experience, PersonalInfo, Skill};
    use proptest::prelude::*;

    fn base_resume() -> ResumeData {
        ResumeData::with_name("Ahmed Ali")
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        assert_eq!(completeness_score(&ResumeData::default()), 0);
    }

    #[test]
    fn test_name_only() {
        assert_eq!(completeness_score(&base_resume()), 20);
    }

    #[test]
    fn test_full_resume_caps_at_100() {
        let resume = ResumeData {
            personal_info: PersonalInfo {
                name: "Sara".to_string(),
                email: Some("sara@x.com".to_string()),
                phone: Some("+20 100 555 0101".to_string()),
                summary: Some("Engineer".to_string()),
                ..Default::default()
            },
            experience: vec![Experience::default()],
            education: vec![Education::default()],
            skills: vec![Skill::default()],
            certificates: vec![],
        };
        assert_eq!(completeness_score(&resume), 100);
    }

    #[test]
    fn test_adding_summary_never_decreases_score() {
        let mut resume = base_resume();
        let before = completeness_score(&resume);
        resume.personal_info.summary = Some("Backend engineer, 8 years".to_string());
        assert!(completeness_score(&resume) >= before);
    }

    proptest! {
        /// Filling any optional field is monotonic non-decreasing.
        #[test]
        fn prop_monotonic_in_optional_fields(
            has_email in any::<bool>(),
            has_summary in any::<bool>(),
            n_experience in 0usize..3,
            n_skills in 0usize..3,
        ) {
            let mut resume = base_resume();
            if has_email {
                resume.personal_info.email = Some("a@b.c".to_string());
            }
            if has_summary {
                resume.personal_info.summary = Some("text".to_string());
            }
            resume.experience = vec![Experience::default(); n_experience];
            resume.skills = vec![Skill::default(); n_skills];

            let before = completeness_score(&resume);
            prop_assert!(before <= 100);

            // Fill one more field and verify the score does not drop.
            let mut richer = resume.clone();
            richer.education = vec![Education::default()];
            prop_assert!(completeness_score(&richer) >= before);
        }
    }
}
