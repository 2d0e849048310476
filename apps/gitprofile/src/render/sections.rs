//! Section Renderers — pure functions from profile data to markdown
//! fragments. An empty returned string means the section is omitted
//! entirely (no dangling heading), except where a contract below says
//! otherwise. No renderer performs I/O; all decoration (heading text,
//! badge style, layout) is passed in by the template strategy.

use crate::errors::ProfileError;
use crate::models::profile::ResumeProfile;
use crate::render::style::BadgeStyle;

/// Experience layouts. `Detailed` renders responsibilities as bullets;
/// `Compact` prunes to the first `limit` entries (source order is
/// most-recent-first by resume convention) and drops the bullets.
#[derive(Debug, Clone, Copy)]
pub enum ExperienceLayout {
    Detailed,
    Compact { limit: usize },
}

/// Contact layouts: one bullet per channel, or a single " · " joined line.
#[derive(Debug, Clone, Copy)]
pub enum ContactLayout {
    Bulleted,
    Inline,
}

/// Header: greeting + name line, optional tagline subtitle.
///
/// The name is the single required field in the whole data model; a blank
/// name fails here, before any output is assembled.
pub fn header(
    profile: &ResumeProfile,
    greeting: &str,
    name_prefix: &str,
    tagline_prefix: &str,
) -> Result<String, ProfileError> {
    let name = profile.personal_info.name.trim();
    if name.is_empty() {
        return Err(ProfileError::MissingRequiredField {
            path: "personal_info.name".to_string(),
        });
    }

    let mut lines = vec![format!("{name_prefix}{greeting}, I'm {name}")];
    if let Some(tagline) = profile
        .enhanced
        .as_ref()
        .and_then(|e| e.tagline.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        lines.push(format!("{tagline_prefix}{tagline}"));
    }
    Ok(lines.join("\n"))
}

/// Quote block: `enhanced.impact_statement`, else `summary`, else omitted.
/// Split out of the header fragment so the Modern template can interleave
/// its banner embed between the two.
pub fn summary_quote(profile: &ResumeProfile) -> String {
    profile
        .enhanced
        .as_ref()
        .and_then(|e| e.impact_statement.as_deref())
        .or(profile.summary.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("> {s}"))
        .unwrap_or_default()
}

/// Skills: badge-styled tokens, grouped by `enhanced.skill_categories`
/// when present, flat "Technical Skills" list otherwise. Soft skills are
/// always a flat list. Omitted entirely when there is nothing to show.
pub fn skills(profile: &ResumeProfile, heading: &str, badge: BadgeStyle) -> String {
    let tech = &profile.skills.technical_skills;
    let soft = &profile.skills.soft_skills;
    let categories = profile
        .enhanced
        .as_ref()
        .and_then(|e| e.skill_categories.as_ref())
        .map(|c| &c.category_name)
        .filter(|m| !m.is_empty());

    if tech.is_empty() && soft.is_empty() && categories.is_none() {
        return String::new();
    }

    let badge_line =
        |items: &[String]| items.iter().map(|s| badge.apply(s)).collect::<Vec<_>>().join(" ");

    let mut lines = vec![heading.to_string(), String::new()];
    if let Some(categories) = categories {
        for (category, items) in categories {
            lines.push(format!("### {category}"));
            lines.push(badge_line(items));
            lines.push(String::new());
        }
    } else if !tech.is_empty() {
        lines.push("### Technical Skills".to_string());
        lines.push(badge_line(tech));
        lines.push(String::new());
    }
    if !soft.is_empty() {
        lines.push("### Soft Skills".to_string());
        lines.push(badge_line(soft));
        lines.push(String::new());
    }

    trim_trailing_blanks(&mut lines);
    lines.join("\n")
}

/// Experience: jobs in source order (never reordered), with the optional
/// `collaboration_style` epigraph. Omitted when there are no jobs.
pub fn experience(profile: &ResumeProfile, heading: &str, layout: ExperienceLayout) -> String {
    let jobs = &profile.work_experience;
    if jobs.is_empty() {
        return String::new();
    }
    let collaboration = profile
        .enhanced
        .as_ref()
        .and_then(|e| e.collaboration_style.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut lines = vec![heading.to_string(), String::new()];
    match layout {
        ExperienceLayout::Detailed => {
            if let Some(style) = collaboration {
                lines.push(format!("> {style}"));
                lines.push(String::new());
            }
            for job in jobs {
                lines.push(format!("### 🏢 {} @ {}", job.title, job.company));
                lines.push(format!("*{}*", job.duration));
                if !job.responsibilities.is_empty() {
                    lines.push(String::new());
                    for responsibility in &job.responsibilities {
                        lines.push(format!("- {responsibility}"));
                    }
                }
                lines.push(String::new());
            }
        }
        ExperienceLayout::Compact { limit } => {
            if let Some(style) = collaboration {
                lines.push(format!("*{style}*"));
                lines.push(String::new());
            }
            for job in jobs.iter().take(limit) {
                lines.push(format!("**{}** @ {}", job.title, job.company));
                lines.push(format!("_{}_", job.duration));
                lines.push(String::new());
            }
        }
    }

    trim_trailing_blanks(&mut lines);
    lines.join("\n")
}

/// Education entries. Omitted when the list is empty.
pub fn education(profile: &ResumeProfile, heading: &str) -> String {
    if profile.education.is_empty() {
        return String::new();
    }
    let mut lines = vec![heading.to_string(), String::new()];
    for entry in &profile.education {
        lines.push(format!("### 🎓 {}", entry.degree));
        lines.push(format!("*{} - {}*", entry.institution, entry.graduation_year));
        lines.push(String::new());
    }
    trim_trailing_blanks(&mut lines);
    lines.join("\n")
}

/// Certifications as a bullet list, each string verbatim. Omitted when
/// the list is empty.
pub fn certifications(profile: &ResumeProfile, heading: &str) -> String {
    if profile.certifications.is_empty() {
        return String::new();
    }
    let mut lines = vec![heading.to_string(), String::new()];
    for certification in &profile.certifications {
        lines.push(format!("- {certification}"));
    }
    lines.join("\n")
}

/// Contact: only the present subset of {email, location}. When neither is
/// present the heading is still emitted with no body — a documented edge
/// case, not an error.
pub fn contact(profile: &ResumeProfile, heading: &str, layout: ContactLayout) -> String {
    let info = &profile.personal_info;
    let email = info.email.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let location = info
        .location
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut lines = vec![heading.to_string()];
    let items: Vec<String> = match layout {
        ContactLayout::Bulleted => email
            .map(|e| format!("- 📧 Email: {e}"))
            .into_iter()
            .chain(location.map(|l| format!("- 📍 Location: {l}")))
            .collect(),
        ContactLayout::Inline => email
            .map(|e| format!("[Email](mailto:{e})"))
            .into_iter()
            .chain(location.map(|l| format!("Based in {l}")))
            .collect(),
    };
    if !items.is_empty() {
        lines.push(String::new());
        match layout {
            ContactLayout::Bulleted => lines.extend(items),
            ContactLayout::Inline => lines.push(items.join(" · ")),
        }
    }
    lines.join("\n")
}

fn trim_trailing_blanks(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
}
