//! Resume data model — the structured record extracted from a resume,
//! plus the optional enrichment fields a generative model may add.
//!
//! Every optional or list-typed field carries `#[serde(default)]` so partial
//! model output still deserializes; absent lists are empty, never null.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structured resume data produced by the extraction step and consumed
/// immutably by rendering. The only mutation in the pipeline is
/// [`ResumeProfile::merge_enhancement`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeProfile {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<EnhancedFields>,
}

impl ResumeProfile {
    /// Unions enrichment output into the profile before rendering begins.
    /// This is the single documented merge step; renderers read the profile
    /// immutably afterwards.
    pub fn merge_enhancement(&mut self, enhanced: EnhancedFields) {
        self.enhanced = Some(enhanced);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Required. An empty name is a fatal input error at header rendering.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// One job entry. Source order is authoritative — nothing reorders these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub graduation_year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
}

/// Supplementary fields produced by the enrichment model. Wholly optional:
/// every consumer falls back to a non-enhanced equivalent (e.g.
/// `impact_statement` falls back to `summary`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancedFields {
    pub tagline: Option<String>,
    pub impact_statement: Option<String>,
    pub current_focus: Vec<String>,
    pub collaboration_style: Option<String>,
    pub custom_sections: Vec<CustomSection>,
    pub skill_categories: Option<SkillCategories>,
    pub fun_facts: Vec<String>,
    pub github_activity_highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    pub title: String,
    pub content: Vec<String>,
}

/// BTreeMaps keep category and expertise iteration order deterministic,
/// which keeps rendered output reproducible under a fixed style seed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategories {
    pub category_name: BTreeMap<String, Vec<String>>,
    pub expertise_levels: BTreeMap<String, String>,
}
