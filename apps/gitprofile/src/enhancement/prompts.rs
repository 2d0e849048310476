//! LLM prompt constants for profile enrichment.

/// System prompt — enforces JSON-only output, friendly-professional tone.
pub const ENHANCEMENT_SYSTEM: &str =
    "You are a creative GitHub profile enhancer. \
    Given structured resume data, generate engaging and personalized content \
    that makes the profile more attractive and memorable. \
    Keep the tone professional yet friendly, and base everything on the \
    candidate's actual experience and skills. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Enhancement prompt template. Replace `{resume_data}` before sending.
pub const ENHANCEMENT_PROMPT_TEMPLATE: &str = r#"Enhance the following resume data with creative profile content.

Resume data:
{resume_data}

Return a JSON object with this EXACT schema (no extra fields):
{
  "tagline": "A creative one-liner that captures their essence as a developer",
  "impact_statement": "A powerful statement about their potential impact in tech",
  "current_focus": ["2-3 areas they're currently focusing on"],
  "collaboration_style": "A brief description of their likely collaboration style",
  "custom_sections": [
    {
      "title": "Creative section title with emoji",
      "content": ["2-3 interesting points for this section"]
    }
  ],
  "skill_categories": {
    "category_name": {"Category label": ["skills from technical_skills, max 3 categories"]},
    "expertise_levels": {"key skill": "Expert | Advanced | Growing"}
  },
  "fun_facts": ["3-4 interesting facts about their skills, experience, or interests"],
  "github_activity_highlights": ["3 key points about likely GitHub activity"]
}

Make the content engaging but factual. Do not invent employers, dates, or
credentials that are not in the resume data.
"#;
