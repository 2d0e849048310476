//! Resume extraction — PDF text extraction plus LLM structuring.
//!
//! Flow: extract_text (pdf-extract) → LLM call with the extraction schema
//! prompt → tolerant conversion of the raw JSON into a [`ResumeProfile`]
//! via the field accessor. Extraction failures are fatal to the run; the
//! core never retries them beyond the client's transport-level backoff.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::ProfileError;
use crate::llm_client::{GeminiClient, LlmError};
use crate::models::profile::{
    Education, PersonalInfo, ResumeProfile, Skills, WorkExperience,
};
use crate::render::fields;

pub mod prompts;

/// Extracts raw text from a resume PDF. Fails with `Extraction` for an
/// unreadable file or one with no text content.
pub fn extract_text(path: &Path) -> Result<String, ProfileError> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| ProfileError::Extraction(format!("{}: {e}", path.display())))?;
    if text.trim().is_empty() {
        return Err(ProfileError::Extraction(format!(
            "{}: no text content found",
            path.display()
        )));
    }
    debug!("Extracted {} characters of resume text", text.len());
    Ok(text)
}

/// Asks the model to structure the resume text, then converts the returned
/// JSON into a typed profile. A malformed model response fails with `Parse`.
pub async fn extract_profile(
    llm: &GeminiClient,
    resume_text: &str,
) -> Result<ResumeProfile, ProfileError> {
    let prompt = prompts::EXTRACTION_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let value: Value = llm
        .call_json(&prompt, prompts::EXTRACTION_SYSTEM)
        .await
        .map_err(|e| match e {
            LlmError::Parse(parse) => ProfileError::Parse(parse.to_string()),
            other => ProfileError::Llm(other),
        })?;

    let profile = profile_from_value(&value)?;
    info!(
        "Structured resume for '{}': {} jobs, {} education entries, {} certifications",
        profile.personal_info.name,
        profile.work_experience.len(),
        profile.education.len(),
        profile.certifications.len()
    );
    Ok(profile)
}

/// Converts the model's semi-structured JSON into a [`ResumeProfile`].
/// Only `personal_info.name` is required; every other field defaults when
/// absent, null, or the wrong shape.
pub fn profile_from_value(value: &Value) -> Result<ResumeProfile, ProfileError> {
    let personal_info = PersonalInfo {
        name: fields::require_str(value, "personal_info.name")?,
        email: fields::string_opt(value, "personal_info.email"),
        phone: fields::string_opt(value, "personal_info.phone"),
        location: fields::string_opt(value, "personal_info.location"),
    };

    let work_experience = fields::objects(value, "work_experience")
        .into_iter()
        .map(|job| WorkExperience {
            company: fields::string_or(job, "company", ""),
            title: fields::string_or(job, "title", ""),
            duration: fields::scalar_or(job, "duration", ""),
            responsibilities: fields::string_list(job, "responsibilities"),
        })
        .collect();

    let education = fields::objects(value, "education")
        .into_iter()
        .map(|entry| Education {
            degree: fields::string_or(entry, "degree", ""),
            institution: fields::string_or(entry, "institution", ""),
            graduation_year: fields::scalar_or(entry, "graduation_year", ""),
        })
        .collect();

    Ok(ResumeProfile {
        personal_info,
        summary: fields::string_opt(value, "summary"),
        work_experience,
        education,
        skills: Skills {
            technical_skills: fields::string_list(value, "skills.technical_skills"),
            soft_skills: fields::string_list(value, "skills.soft_skills"),
        },
        certifications: fields::string_list(value, "certifications"),
        enhanced: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_profile_from_value_full_record() {
        let value = json!({
            "personal_info": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "location": "London"
            },
            "summary": "Analytical engine programmer",
            "work_experience": [{
                "company": "Analytical Engines",
                "title": "Principal Engineer",
                "duration": "1840 - 1852",
                "responsibilities": ["Wrote the first program"]
            }],
            "education": [{
                "degree": "Mathematics",
                "institution": "Private tutoring",
                "graduation_year": 1835
            }],
            "skills": {
                "technical_skills": ["Bernoulli numbers"],
                "soft_skills": ["Correspondence"]
            },
            "certifications": ["Royal Society fellow"]
        });

        let profile = profile_from_value(&value).unwrap();
        assert_eq!(profile.personal_info.name, "Ada Lovelace");
        assert_eq!(profile.work_experience.len(), 1);
        assert_eq!(profile.work_experience[0].responsibilities.len(), 1);
        assert_eq!(profile.education[0].graduation_year, "1835");
        assert_eq!(profile.certifications, vec!["Royal Society fellow"]);
        assert!(profile.enhanced.is_none());
    }

    #[test]
    fn test_profile_from_value_defaults_everything_but_name() {
        let value = json!({"personal_info": {"name": "Ada"}});
        let profile = profile_from_value(&value).unwrap();
        assert!(profile.summary.is_none());
        assert!(profile.work_experience.is_empty());
        assert!(profile.education.is_empty());
        assert!(profile.skills.technical_skills.is_empty());
        assert!(profile.certifications.is_empty());
    }

    #[test]
    fn test_profile_from_value_requires_name() {
        let value = json!({"personal_info": {"email": "ada@example.com"}});
        let err = profile_from_value(&value).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::MissingRequiredField { path } if path == "personal_info.name"
        ));
    }

    #[test]
    fn test_extract_text_fails_for_missing_file() {
        let err = extract_text(Path::new("/nonexistent/resume.pdf")).unwrap_err();
        assert!(matches!(err, ProfileError::Extraction(_)));
    }

    #[test]
    fn test_extract_text_fails_for_non_pdf_content() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"plain text, not a PDF").unwrap();
        let err = extract_text(file.path()).unwrap_err();
        assert!(matches!(err, ProfileError::Extraction(_)));
    }
}
