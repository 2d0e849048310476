//! LLM prompt constants for resume structuring.

/// System prompt — enforces JSON-only output.
pub const EXTRACTION_SYSTEM: &str =
    "You are an expert resume analyst. \
    Extract structured information from raw resume text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Extraction prompt template. Replace `{resume_text}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract structured information from the following resume text.

Return a JSON object with this EXACT schema (no extra fields):
{
  "personal_info": {
    "name": "Full name",
    "email": "email@example.com or null",
    "phone": "phone number or null",
    "location": "city, country or null"
  },
  "summary": "2-3 sentence professional summary in the candidate's voice",
  "work_experience": [
    {
      "company": "Company name",
      "title": "Job title",
      "duration": "e.g. Jan 2020 - Present",
      "responsibilities": ["one bullet per responsibility or achievement"]
    }
  ],
  "education": [
    {
      "degree": "Degree and field",
      "institution": "School name",
      "graduation_year": "Year as a string"
    }
  ],
  "skills": {
    "technical_skills": ["languages, frameworks, tools"],
    "soft_skills": ["communication, leadership, ..."]
  },
  "certifications": ["certification names, verbatim"]
}

Rules:
- Keep work_experience in the order it appears in the resume (most recent first).
- Use null for any personal_info field that is not present. Never invent contact details.
- Use [] for any list with no entries.
- Copy certification names verbatim; do not paraphrase them.

Resume text:
{resume_text}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_carries_the_schema_and_placeholder() {
        assert!(EXTRACTION_PROMPT_TEMPLATE.contains("{resume_text}"));
        for key in [
            "personal_info",
            "work_experience",
            "education",
            "technical_skills",
            "certifications",
        ] {
            assert!(EXTRACTION_PROMPT_TEMPLATE.contains(key), "{key}");
        }
    }
}
