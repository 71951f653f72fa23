use std::sync::LazyLock;

use regex::Regex;

/// Every pattern the extractors use, compiled once at first use and passed
/// by reference into each call. Immutable and `Sync`, so concurrent
/// extraction needs no coordination.
pub struct Patterns {
    pub email: Regex,
    /// `word.word` local part of an already-matched email address.
    pub email_local: Regex,
    pub phone: Regex,
    /// A line of capitalized word tokens (hyphen/apostrophe allowed inside a token).
    pub name_line: Regex,
    pub gender: Regex,
    pub dob: Regex,
    pub university: Regex,
    pub degree: Regex,
    pub major: Regex,
    pub gpa: Regex,
    pub graduation: Regex,
    /// Closed `YYYY-YYYY` range; secondary source for a graduation year.
    pub year_range: Regex,
    /// `Label:` line opening a skill category block.
    pub category_label: Regex,
    pub skill_sep: Regex,
    /// Full experience block: optional Company/Position lines, mandatory
    /// duration line, one or more bullet lines.
    pub experience: Regex,
}

pub static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap(),
    email_local: Regex::new(r"^([A-Za-z]+)\.([A-Za-z]+)@").unwrap(),
    phone: Regex::new(r"\+?\d[\d\s()\-]{7,}\d").unwrap(),
    name_line: Regex::new(r"^[A-Z][A-Za-z'’\-]*(?:\s+[A-Z][A-Za-z'’\-]*)*$").unwrap(),
    gender: Regex::new(r"(?i)\bGender\b\s*[:\-]?\s*(Male|Female|Other)").unwrap(),
    dob: Regex::new(r"(?i)Date\s+of\s+Birth\s*[:\-]?\s*(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})")
        .unwrap(),
    university: Regex::new(r"(?i)\b(?:University|College|Institute)\b").unwrap(),
    degree: Regex::new(r"(?i)\b(?:Bachelor|Master|Doctor)\b").unwrap(),
    major: Regex::new(r"(?i)^(?:Program|Major)(?:\s+(?:in|of))?\s*[:\-]?\s*(.+)$").unwrap(),
    gpa: Regex::new(r"(?i)\bGPAX?\s*[:\-]?\s*([0-9.]+)").unwrap(),
    graduation: Regex::new(r"(?i)\bGraduation(?:\s+Year)?\s*[:\-]?\s*((?:19|20)\d{2})").unwrap(),
    year_range: Regex::new(r"\b((?:19|20)\d{2})\s*[-–]\s*((?:19|20)\d{2})\b").unwrap(),
    category_label: Regex::new(r"^([A-Za-z][A-Za-z /+#&]{0,30}?)\s*:\s*(.*)$").unwrap(),
    skill_sep: Regex::new(r"[,;|•·]").unwrap(),
    experience: Regex::new(
        r"(?mi)^(?:Company\s*[:\-]?\s*(?P<company>.+)\n)?(?:Position\s*[:\-]?\s*(?P<position>.+)\n)?(?P<duration>[A-Za-z]{3,9}\s+\d{4}\s*[-–—]\s*(?:[A-Za-z]{3,9}\s+\d{4}|Present))[ \t]*\n(?P<resp>(?:[-•*·].*\n?)+)",
    )
    .unwrap(),
});

// ── Tests ──
