//! Profile enrichment — best-effort creative fields from the model.
//!
//! Enrichment is never fatal: the caller logs a warning on failure and
//! renders the unenhanced profile. This module therefore surfaces plain
//! [`LlmError`]s and leaves the downgrade decision to the pipeline.

use tracing::debug;

use crate::llm_client::{GeminiClient, LlmError};
use crate::models::profile::{EnhancedFields, ResumeProfile};

pub mod prompts;

/// Asks the model for supplementary profile fields (tagline, fun facts,
/// skill categories, ...). The result is merged into the profile by the
/// caller via [`ResumeProfile::merge_enhancement`].
pub async fn enhance(
    llm: &GeminiClient,
    profile: &ResumeProfile,
) -> Result<EnhancedFields, LlmError> {
    let resume_json = serde_json::to_string_pretty(profile)?;
    let prompt = prompts::ENHANCEMENT_PROMPT_TEMPLATE.replace("{resume_data}", &resume_json);
    let enhanced: EnhancedFields = llm.call_json(&prompt, prompts::ENHANCEMENT_SYSTEM).await?;
    debug!(
        "Enhancement produced {} fun facts, {} custom sections",
        enhanced.fun_facts.len(),
        enhanced.custom_sections.len()
    );
    Ok(enhanced)
}
