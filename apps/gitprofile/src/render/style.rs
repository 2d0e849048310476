//! Stylistic candidate sets and the injectable random-choice seam.
//!
//! Templates never call an ambient random source. Every randomized pick
//! (banner art, greeting, section heading, badge style, fun fact) goes
//! through a [`StylePicker`], so production can use entropy while tests pin
//! a seed and get byte-identical output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ────────────────────────────────────────────────────────────────────────────
// Candidate sets
// ────────────────────────────────────────────────────────────────────────────

pub const HEADER_ASCII_ART: &[&str] = &[
    r#"╔═══╗─────╔╗──────────╔═══╦╗
║╔═╗║─────║║──────────║╔═╗║║
║║─╚╬══╦══╣║╔══╦╗╔╦══╗║║─║║║╔══╦═╗
║║╔═╣╔╗║╔═╣║║╔╗║║║║║═╣║║─║║║║╔╗║╔╗╗
║╚╩═║╚╝║╚═╣╚╣╚╝║╚╝║║═╣║╚═╝║╚╣╚╝║║║║
╚═══╩══╩══╩═╩══╩══╩══╝╚═══╩═╩══╩╝╚╝"#,
    r#"██████╗ ██████╗  ██████╗ ███████╗██╗██╗     ███████╗
██╔══██╗██╔══██╗██╔═══██╗██╔════╝██║██║     ██╔════╝
██████╔╝██████╔╝██║   ██║█████╗  ██║██║     █████╗
██╔═══╝ ██╔══██╗██║   ██║██╔══╝  ██║██║     ██╔══╝
██║     ██║  ██║╚██████╔╝██║     ██║███████╗███████╗
╚═╝     ╚═╝  ╚═╝ ╚═════╝ ╚═╝     ╚═╝╚══════╝╚══════╝"#,
];

pub const GREETINGS: &[&str] = &[
    "Hi there 👋",
    "Hey, nice to meet you! 🌟",
    "Welcome to my GitHub space! 🚀",
    "Hello, fellow coder! 💻",
    "Greetings, earthling! 👾",
];

pub const SKILLS_HEADINGS: &[&str] = &[
    "🛠️ Tech Arsenal",
    "💪 Skills & Expertise",
    "🔧 Tools of the Trade",
    "⚡ Superpowers",
];

pub const EXPERIENCE_HEADINGS: &[&str] = &[
    "💼 Professional Journey",
    "🌱 Growth Story",
    "🚀 Experience",
    "💫 Career Adventures",
];

pub const EDUCATION_HEADINGS: &[&str] = &[
    "🎓 Academic Journey",
    "📚 Education",
    "🧠 Learning Path",
    "📖 Academic Background",
];

pub const CERTIFICATIONS_HEADINGS: &[&str] = &[
    "🏆 Achievements & Certifications",
    "📜 Certifications",
    "🎯 Professional Milestones",
    "🌟 Badges of Honor",
];

pub const CONTACT_HEADINGS: &[&str] = &[
    "📫 Let's Connect",
    "🤝 Get in Touch",
    "💌 Contact Me",
    "🌐 Find Me Online",
];

/// Decorative banner embeds. `{github_username}` is substituted by the
/// Modern template before emission.
pub const PROFILE_BANNERS: &[&str] = &[
    r#"<div align="center">
  <img src="https://readme-typing-svg.demolab.com?font=Fira+Code&pause=1000&color=2E97F7&center=true&vCenter=true&width=435&lines=Software+Engineer;Problem+Solver;Continuous+Learner" alt="Typing SVG" />
</div>"#,
    r#"<div align="center">
  <img src="https://github-readme-streak-stats.herokuapp.com/?user={github_username}&theme=dark" alt="GitHub Streak" />
</div>"#,
];

/// GitHub stats footer for the Modern template.
pub const STATS_FOOTER: &str = r#"<div align="center">
  <img src="https://github-readme-stats.vercel.app/api?username={github_username}&show_icons=true&theme=radical" alt="GitHub Stats" />
</div>"#;

/// How a single skill token is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Inline code token: `` `Rust` ``
    Inline,
    /// shields.io flat-square markdown image
    FlatSquare,
    /// shields.io for-the-badge HTML image
    ForTheBadge,
}

pub const BADGE_STYLES: &[BadgeStyle] = &[
    BadgeStyle::Inline,
    BadgeStyle::FlatSquare,
    BadgeStyle::ForTheBadge,
];

impl BadgeStyle {
    pub fn apply(&self, skill: &str) -> String {
        match self {
            BadgeStyle::Inline => format!("`{skill}`"),
            BadgeStyle::FlatSquare => {
                format!("![{skill}](https://img.shields.io/badge/-{skill}-blue?style=flat-square)")
            }
            BadgeStyle::ForTheBadge => format!(
                "<img src='https://img.shields.io/badge/-{skill}-success?style=for-the-badge' alt='{skill}' />"
            ),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Random-choice seam
// ────────────────────────────────────────────────────────────────────────────

/// Injectable source of stylistic choices. Dyn-safe so strategies can take
/// `&mut dyn StylePicker` without caring about the backing RNG.
pub trait StylePicker {
    /// Returns an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Picks one element of `items`, or `None` when the slice is empty.
pub fn choose<'a, T>(picker: &mut dyn StylePicker, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[picker.pick_index(items.len()) % items.len()])
    }
}

/// Production picker backed by a seedable RNG. Same seed, same profile,
/// same template name ⇒ byte-identical output.
pub struct RngPicker {
    rng: StdRng,
}

impl RngPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl StylePicker for RngPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the first candidate. Test-only, for pinning output.
#[cfg(test)]
pub struct FirstPicker;

#[cfg(test)]
impl StylePicker for FirstPicker {
    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}
