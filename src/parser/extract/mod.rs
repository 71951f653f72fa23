pub mod education;
pub mod experience;
pub mod identity;
pub mod skills;

use chrono::{Datelike, Utc};

use super::lines::Lines;
use super::patterns::Patterns;
use super::sections::{self, SectionKind};
use super::ExtractOptions;
use crate::record::{EducationRecord, ExperienceEntry, IdentityFields, ResumeRecord, Skills};

/// Run every extractor over the normalized text and assemble the record.
/// The current year (for age derivation) is taken here, at the boundary,
/// so the extraction itself stays a pure function of its inputs.
pub fn extract_all(lines: &Lines, pats: &Patterns, opts: &ExtractOptions) -> ResumeRecord {
    extract_all_at(lines, pats, opts, Utc::now().year())
}

pub fn extract_all_at(
    lines: &Lines,
    pats: &Patterns,
    opts: &ExtractOptions,
    current_year: i32,
) -> ResumeRecord {
    let identity = identity::extract(lines, pats, opts, current_year);

    // Education and skills operate only within their segmented section;
    // segmentation failure means their fields are absent. Experience scans
    // the whole canonical text by design.
    let education_text = sections::section_text(lines, SectionKind::Education);
    let skills_text = sections::section_text(lines, SectionKind::Skills);

    let education = education::extract(education_text.as_deref(), pats);
    let skills = skills::extract(skills_text.as_deref(), pats);
    let entries = experience::extract(lines, pats);

    assemble(identity, education, skills, entries)
}

/// Merge extractor outputs into the terminal record. Every contract field
/// exists; absence stays `None` (never a placeholder value).
fn assemble(
    identity: IdentityFields,
    education: EducationRecord,
    skills: Option<Skills>,
    entries: Vec<ExperienceEntry>,
) -> ResumeRecord {
    ResumeRecord {
        name: identity.name,
        gender: identity.gender,
        date_of_birth: identity.date_of_birth,
        age: identity.age,
        email: identity.email,
        tel: identity.tel,
        university: education.university,
        degree: education.degree,
        major: education.major,
        gpax: education.gpax,
        graduation_year: education.graduation_year,
        skills,
        experience: if entries.is_empty() { None } else { Some(entries) },
    }
}

// ── Tests ──
