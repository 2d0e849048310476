//! Minimal template — terse single-column layout. The default variant.
//!
//! Fixed section order: header, quote, current focus, expertise levels,
//! recent work (at most 2 entries), certifications, one fun fact, compact
//! contact line. Base skill lists are deliberately not rendered here; the
//! only skills surface is the enhanced expertise-with-levels list.

use crate::errors::ProfileError;
use crate::models::profile::ResumeProfile;
use crate::render::registry::TemplateStrategy;
use crate::render::sections::{self, ContactLayout, ExperienceLayout};
use crate::render::style::{self, StylePicker, GREETINGS};
use crate::render::assemble;

const RECENT_WORK_LIMIT: usize = 2;

pub struct MinimalTemplate;

impl TemplateStrategy for MinimalTemplate {
    fn name(&self) -> &'static str {
        "minimal"
    }

    fn generate(
        &self,
        profile: &ResumeProfile,
        style: &mut dyn StylePicker,
    ) -> Result<String, ProfileError> {
        let enhanced = profile.enhanced.as_ref();
        let greeting = style::choose(style, GREETINGS).copied().unwrap_or("Hi there 👋");

        let mut fragments = Vec::new();
        fragments.push(sections::header(profile, greeting, "# ", "#### ")?);
        fragments.push(sections::summary_quote(profile));

        if let Some(focus) = enhanced.map(|e| &e.current_focus).filter(|f| !f.is_empty()) {
            let line = focus
                .iter()
                .map(|f| format!("*{f}*"))
                .collect::<Vec<_>>()
                .join(" · ");
            fragments.push(format!("### Current Focus\n{line}"));
        }

        if let Some(levels) = enhanced
            .and_then(|e| e.skill_categories.as_ref())
            .map(|c| &c.expertise_levels)
            .filter(|m| !m.is_empty())
        {
            let mut lines = vec!["### Expertise".to_string()];
            for (skill, level) in levels {
                lines.push(format!("- `{skill}` · {level}"));
            }
            fragments.push(lines.join("\n"));
        }

        fragments.push(sections::experience(
            profile,
            "### Recent Work",
            ExperienceLayout::Compact {
                limit: RECENT_WORK_LIMIT,
            },
        ));
        fragments.push(sections::certifications(profile, "### Certifications"));

        if let Some(fact) = enhanced.and_then(|e| style::choose(style, &e.fun_facts)) {
            fragments.push(format!("> {fact}"));
        }

        fragments.push(sections::contact(profile, "### Connect", ContactLayout::Inline));

        Ok(assemble(fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EnhancedFields, PersonalInfo, WorkExperience};
    use crate::render::style::FirstPicker;

    fn base_profile() -> ResumeProfile {
        ResumeProfile {
            personal_info: PersonalInfo {
                name: "Ada".to_string(),
                ..Default::default()
            },
            summary: Some("Builder".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_skeleton_for_sparse_profile() {
        let output = MinimalTemplate
            .generate(&base_profile(), &mut FirstPicker)
            .unwrap();
        assert!(output.starts_with("# Hi there 👋, I'm Ada"));
        assert!(output.contains("> Builder"));
        assert!(output.contains("### Connect"));
        assert!(!output.contains("### Recent Work"));
        assert!(!output.contains("### Expertise"));
        assert!(!output.contains("### Current Focus"));
    }

    #[test]
    fn test_minimal_caps_work_entries_at_two() {
        let mut profile = base_profile();
        profile.work_experience = (0..3)
            .map(|i| WorkExperience {
                company: format!("Company {i}"),
                title: "Engineer".to_string(),
                duration: "n/a".to_string(),
                responsibilities: vec![],
            })
            .collect();
        let output = MinimalTemplate.generate(&profile, &mut FirstPicker).unwrap();
        assert!(output.contains("### Recent Work"));
        assert!(output.contains("Company 1"));
        assert!(!output.contains("Company 2"));
    }

    #[test]
    fn test_minimal_renders_one_fun_fact_as_quote() {
        let mut profile = base_profile();
        profile.merge_enhancement(EnhancedFields {
            fun_facts: vec![
                "Debugs like a detective".to_string(),
                "Second fact".to_string(),
            ],
            ..Default::default()
        });
        let output = MinimalTemplate.generate(&profile, &mut FirstPicker).unwrap();
        assert!(output.contains("> Debugs like a detective"));
        assert!(!output.contains("Second fact"));
    }

    #[test]
    fn test_minimal_expertise_levels_render_in_stable_order() {
        let mut profile = base_profile();
        let mut enhanced = EnhancedFields::default();
        let categories = enhanced.skill_categories.get_or_insert_with(Default::default);
        categories
            .expertise_levels
            .insert("Rust".to_string(), "Expert".to_string());
        categories
            .expertise_levels
            .insert("Go".to_string(), "Growing".to_string());
        profile.merge_enhancement(enhanced);
        let output = MinimalTemplate.generate(&profile, &mut FirstPicker).unwrap();
        let go = output.find("- `Go` · Growing").unwrap();
        let rust = output.find("- `Rust` · Expert").unwrap();
        assert!(go < rust);
    }
}
