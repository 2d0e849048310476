//! Rendering core — turns an extracted (optionally enriched) profile into
//! a markdown document through a named template strategy.
//!
//! Flow: profile → TemplateRegistry::resolve → TemplateStrategy →
//!       Section Renderers → assemble → final markdown string.
//!
//! Pure and synchronous; the only non-determinism is the injected
//! [`style::StylePicker`].

pub mod fields;
pub mod minimal;
pub mod modern;
pub mod registry;
pub mod sections;
pub mod style;

use crate::errors::ProfileError;
use crate::models::profile::ResumeProfile;
use crate::render::registry::TemplateRegistry;
use crate::render::style::StylePicker;

/// Renders `profile` through the named template. Fails with
/// `UnknownTemplate` or `MissingRequiredField`; on failure nothing partial
/// is produced.
pub fn render(
    registry: &TemplateRegistry,
    profile: &ResumeProfile,
    template_name: &str,
    style: &mut dyn StylePicker,
) -> Result<String, ProfileError> {
    let strategy = registry.resolve(template_name)?;
    strategy.generate(profile, style)
}

/// Profile Assembler — drops empty/whitespace-only fragments and joins the
/// rest with exactly one blank line. The whole document comes out trimmed.
/// Shared by every template variant.
pub fn assemble<I>(fragments: I) -> String
where
    I: IntoIterator<Item = String>,
{
    fragments
        .into_iter()
        .map(|fragment| fragment.trim().to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EnhancedFields, PersonalInfo, WorkExperience};
    use crate::render::style::{RngPicker, EXPERIENCE_HEADINGS};

    /// The reference sparse profile from the rendering contract.
    fn ada() -> ResumeProfile {
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
    fn test_assemble_drops_blank_fragments_and_joins_with_one_blank_line() {
        let doc = assemble(vec![
            "# Header".to_string(),
            String::new(),
            "   \n  ".to_string(),
            "body\n".to_string(),
        ]);
        assert_eq!(doc, "# Header\n\nbody");
    }

    #[test]
    fn test_assemble_of_nothing_is_empty() {
        assert_eq!(assemble(vec![String::new(), "  ".to_string()]), "");
    }

    #[test]
    fn test_minimal_renders_name_and_summary_without_section_headings() {
        let registry = TemplateRegistry::with_builtins();
        let doc = render(&registry, &ada(), "minimal", &mut RngPicker::seeded(1)).unwrap();
        assert!(doc.contains("Ada"));
        assert!(doc.contains("Builder"));
        assert!(!doc.contains("### Recent Work"));
        assert!(!doc.contains("### Expertise"));
    }

    #[test]
    fn test_impact_statement_replaces_summary_in_quote() {
        let registry = TemplateRegistry::with_builtins();
        let mut profile = ada();
        profile.merge_enhancement(EnhancedFields {
            impact_statement: Some("Ships things.".to_string()),
            ..Default::default()
        });
        let doc = render(&registry, &profile, "minimal", &mut RngPicker::seeded(1)).unwrap();
        assert!(doc.contains("> Ships things."));
        assert!(!doc.contains("> Builder"));
    }

    #[test]
    fn test_empty_work_history_yields_no_experience_heading_in_either_variant() {
        let registry = TemplateRegistry::with_builtins();
        let minimal = render(&registry, &ada(), "minimal", &mut RngPicker::seeded(2)).unwrap();
        assert!(!minimal.contains("Recent Work"));

        let modern = render(&registry, &ada(), "modern", &mut RngPicker::seeded(2)).unwrap();
        for heading in EXPERIENCE_HEADINGS {
            assert!(!modern.contains(heading));
        }
    }

    #[test]
    fn test_certifications_appear_verbatim_in_both_variants() {
        let registry = TemplateRegistry::with_builtins();
        let mut profile = ada();
        profile.certifications = vec![
            "AWS Certified Solutions Architect".to_string(),
            "PMP".to_string(),
        ];
        for template in ["minimal", "modern"] {
            let doc = render(&registry, &profile, template, &mut RngPicker::seeded(3)).unwrap();
            assert!(doc.contains("- AWS Certified Solutions Architect"), "{template}");
            assert!(doc.contains("- PMP"), "{template}");
        }
    }

    #[test]
    fn test_same_seed_renders_byte_identical_output() {
        let registry = TemplateRegistry::with_builtins();
        let mut profile = ada();
        profile.work_experience = vec![WorkExperience {
            company: "Analytical Engines".to_string(),
            title: "Principal Engineer".to_string(),
            duration: "2020 - Present".to_string(),
            responsibilities: vec!["Designed the mill".to_string()],
        }];
        profile.merge_enhancement(EnhancedFields {
            fun_facts: vec!["Fact A".to_string(), "Fact B".to_string()],
            ..Default::default()
        });
        for template in ["minimal", "modern"] {
            let first = render(&registry, &profile, template, &mut RngPicker::seeded(42)).unwrap();
            let second = render(&registry, &profile, template, &mut RngPicker::seeded(42)).unwrap();
            assert_eq!(first, second, "{template}");
        }
    }

    #[test]
    fn test_unknown_template_fails_listing_registered_names() {
        let registry = TemplateRegistry::with_builtins();
        let err = render(&registry, &ada(), "fancy", &mut RngPicker::seeded(4)).unwrap_err();
        match err {
            ProfileError::UnknownTemplate {
                requested,
                available,
            } => {
                assert_eq!(requested, "fancy");
                assert_eq!(available, vec!["minimal", "modern"]);
            }
            other => panic!("expected UnknownTemplate, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_name_fails_both_variants_with_no_output() {
        let registry = TemplateRegistry::with_builtins();
        let profile = ResumeProfile {
            summary: Some("Builder".to_string()),
            ..Default::default()
        };
        for template in ["minimal", "modern"] {
            let err = render(&registry, &profile, template, &mut RngPicker::seeded(5)).unwrap_err();
            assert!(
                matches!(err, ProfileError::MissingRequiredField { ref path } if path == "personal_info.name"),
                "{template}"
            );
        }
    }
}
