//! Modern template — expansive layout with randomized decoration.
//!
//! Fixed section order: ASCII banner, header, banner embed, quote, current
//! focus, skills, custom sections, experience, education, certifications,
//! fun facts, GitHub highlights, contact, stats footer. Decorated section
//! headings and the badge style are drawn through the style picker.

use crate::errors::ProfileError;
use crate::models::profile::ResumeProfile;
use crate::render::assemble;
use crate::render::registry::TemplateStrategy;
use crate::render::sections::{self, ContactLayout, ExperienceLayout};
use crate::render::style::{
    self, BadgeStyle, StylePicker, BADGE_STYLES, CERTIFICATIONS_HEADINGS, CONTACT_HEADINGS,
    EDUCATION_HEADINGS, EXPERIENCE_HEADINGS, GREETINGS, HEADER_ASCII_ART, PROFILE_BANNERS,
    SKILLS_HEADINGS, STATS_FOOTER,
};

/// Placeholder substituted into the decorative GitHub embeds when no real
/// username was supplied.
const USERNAME_PLACEHOLDER: &str = "your-github-username";

pub struct ModernTemplate {
    github_username: String,
}

impl ModernTemplate {
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            github_username: username.into(),
        }
    }
}

impl Default for ModernTemplate {
    fn default() -> Self {
        Self::with_username(USERNAME_PLACEHOLDER)
    }
}

impl TemplateStrategy for ModernTemplate {
    fn name(&self) -> &'static str {
        "modern"
    }

    fn generate(
        &self,
        profile: &ResumeProfile,
        style: &mut dyn StylePicker,
    ) -> Result<String, ProfileError> {
        let enhanced = profile.enhanced.as_ref();
        let greeting = style::choose(style, GREETINGS).copied().unwrap_or("Hi there 👋");
        let badge = style::choose(style, BADGE_STYLES)
            .copied()
            .unwrap_or(BadgeStyle::Inline);

        let mut fragments = Vec::new();

        if let Some(art) = style::choose(style, HEADER_ASCII_ART) {
            fragments.push(format!("```text\n{art}\n```"));
        }
        fragments.push(sections::header(profile, greeting, "", "### ")?);
        if let Some(banner) = style::choose(style, PROFILE_BANNERS) {
            fragments.push(banner.replace("{github_username}", &self.github_username));
        }
        fragments.push(sections::summary_quote(profile));

        if let Some(focus) = enhanced.map(|e| &e.current_focus).filter(|f| !f.is_empty()) {
            fragments.push(bullet_section("### 🎯 Current Focus", focus));
        }

        fragments.push(sections::skills(
            profile,
            &decorated_heading(style, SKILLS_HEADINGS),
            badge,
        ));

        if let Some(custom) = enhanced.map(|e| &e.custom_sections) {
            for section in custom.iter().filter(|s| !s.content.is_empty()) {
                fragments.push(bullet_section(&format!("### {}", section.title), &section.content));
            }
        }

        fragments.push(sections::experience(
            profile,
            &decorated_heading(style, EXPERIENCE_HEADINGS),
            ExperienceLayout::Detailed,
        ));
        fragments.push(sections::education(
            profile,
            &decorated_heading(style, EDUCATION_HEADINGS),
        ));
        fragments.push(sections::certifications(
            profile,
            &decorated_heading(style, CERTIFICATIONS_HEADINGS),
        ));

        if let Some(facts) = enhanced.map(|e| &e.fun_facts).filter(|f| !f.is_empty()) {
            fragments.push(bullet_section("### ⚡ Fun Facts", facts));
        }
        if let Some(highlights) = enhanced
            .map(|e| &e.github_activity_highlights)
            .filter(|h| !h.is_empty())
        {
            fragments.push(bullet_section("### 📊 GitHub Highlights", highlights));
        }

        fragments.push(sections::contact(
            profile,
            &decorated_heading(style, CONTACT_HEADINGS),
            ContactLayout::Bulleted,
        ));
        fragments.push(STATS_FOOTER.replace("{github_username}", &self.github_username));

        Ok(assemble(fragments))
    }
}

fn decorated_heading(style: &mut dyn StylePicker, candidates: &[&str]) -> String {
    match style::choose(style, candidates) {
        Some(heading) => format!("## {heading}"),
        None => String::new(),
    }
}

fn bullet_section(heading: &str, items: &[String]) -> String {
    let mut lines = vec![heading.to_string(), String::new()];
    for item in items {
        lines.push(format!("- {item}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{CustomSection, EnhancedFields, PersonalInfo};
    use crate::render::style::FirstPicker;

    fn base_profile() -> ResumeProfile {
        ResumeProfile {
            personal_info: PersonalInfo {
                name: "Ada".to_string(),
                email: Some("ada@example.com".to_string()),
                ..Default::default()
            },
            summary: Some("Builder".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_modern_substitutes_github_username_in_footer() {
        let template = ModernTemplate::with_username("adal");
        let output = template.generate(&base_profile(), &mut FirstPicker).unwrap();
        assert!(output.contains("api?username=adal"));
        assert!(!output.contains("{github_username}"));
    }

    #[test]
    fn test_modern_default_uses_placeholder_username() {
        let output = ModernTemplate::default()
            .generate(&base_profile(), &mut FirstPicker)
            .unwrap();
        assert!(output.contains(USERNAME_PLACEHOLDER));
    }

    #[test]
    fn test_modern_renders_custom_sections_and_highlights() {
        let mut profile = base_profile();
        profile.merge_enhancement(EnhancedFields {
            custom_sections: vec![CustomSection {
                title: "🧪 Side Quests".to_string(),
                content: vec!["Built a difference engine emulator".to_string()],
            }],
            github_activity_highlights: vec!["Maintains three parser crates".to_string()],
            ..Default::default()
        });
        let output = ModernTemplate::default()
            .generate(&profile, &mut FirstPicker)
            .unwrap();
        assert!(output.contains("### 🧪 Side Quests"));
        assert!(output.contains("- Built a difference engine emulator"));
        assert!(output.contains("### 📊 GitHub Highlights"));
        assert!(output.contains("- Maintains three parser crates"));
    }

    #[test]
    fn test_modern_omits_experience_heading_for_empty_history() {
        let output = ModernTemplate::default()
            .generate(&base_profile(), &mut FirstPicker)
            .unwrap();
        for heading in EXPERIENCE_HEADINGS {
            assert!(!output.contains(heading));
        }
    }
}
