use tracing::debug;

use super::lines::Lines;

/// The named sections the engine knows how to segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Education,
    Skills,
    Experience,
}

impl SectionKind {
    /// Header synonyms, matched case-insensitively against a whole line
    /// (optional trailing colon stripped first).
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            SectionKind::Education => &["education", "educational background", "academic background"],
            SectionKind::Skills => &[
                "skills",
                "technical skills",
                "technologies",
                "tools",
                "soft skills",
            ],
            SectionKind::Experience => &[
                "experience",
                "work experience",
                "employment history",
                "work history",
            ],
        }
    }
}

/// Header labels that bound a section even when they open one we do not
/// extract. Resumes have no schema; these labels plus the all-caps shape
/// check are the only generic boundary signal available.
const OTHER_HEADERS: &[&str] = &[
    "summary",
    "objective",
    "profile",
    "contact",
    "projects",
    "certifications",
    "awards",
    "languages",
    "interests",
    "activities",
    "publications",
    "references",
];

/// Text of the named section: everything between its header line and the
/// next header-like line (or end of document). `None` when no header for
/// the section exists, or the section body is empty.
pub fn section_text(lines: &Lines, kind: SectionKind) -> Option<String> {
    let all = lines.as_slice();
    let start = match all.iter().position(|l| matches_header(l, kind.synonyms())) {
        Some(i) => i,
        None => {
            debug!(section = ?kind, "no header found");
            return None;
        }
    };

    let body = &all[start + 1..];
    let end = body.iter().position(|l| is_boundary(l)).unwrap_or(body.len());
    let text = body[..end].join("\n");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn matches_header(line: &str, synonyms: &[&str]) -> bool {
    let label = line.trim_end_matches(':').trim().to_lowercase();
    synonyms.contains(&label.as_str())
}

/// A line that looks like the start of a new section: any known header
/// label, or a short all-caps label line.
fn is_boundary(line: &str) -> bool {
    let label = line.trim_end_matches(':').trim();
    let lower = label.to_lowercase();
    let known = SectionKind::Education
        .synonyms()
        .iter()
        .chain(SectionKind::Skills.synonyms())
        .chain(SectionKind::Experience.synonyms())
        .chain(OTHER_HEADERS)
        .any(|s| *s == lower);
    known || is_caps_label(label)
}

fn is_caps_label(label: &str) -> bool {
    let tokens = label.split_whitespace().count();
    if tokens == 0 || tokens > 4 {
        return false;
    }
    label.chars().any(|c| c.is_alphabetic())
        && label.chars().all(|c| c.is_ascii_uppercase() || c.is_whitespace())
}

// ── Tests ──
