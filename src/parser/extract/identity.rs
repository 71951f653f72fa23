use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::parser::lines::Lines;
use crate::parser::patterns::Patterns;
use crate::parser::ExtractOptions;
use crate::record::IdentityFields;

/// One candidate strategy for the name field. Strategies are tried in
/// order until one yields a value; the order itself is data, not control
/// flow, so it can be tested on its own.
type NameStrategy = fn(&Lines, &Patterns, &ExtractOptions) -> Option<String>;

pub const NAME_STRATEGIES: &[(&str, NameStrategy)] = &[
    ("header-line", name_from_header),
    ("email-local-part", name_from_email),
];

/// Every sub-extraction here is independent and best-effort: failure of
/// one never blocks another, and absence is the only failure signal.
pub fn extract(lines: &Lines, pats: &Patterns, opts: &ExtractOptions, current_year: i32) -> IdentityFields {
    let text = lines.text();

    let name = NAME_STRATEGIES.iter().find_map(|(label, strategy)| {
        let found = strategy(lines, pats, opts);
        if found.is_some() {
            debug!(strategy = label, "name resolved");
        }
        found
    });

    let email = pats.email.find(text).map(|m| m.as_str().to_string());
    let tel = pats.phone.find(text).map(|m| m.as_str().to_string());
    let gender = pats.gender.captures(text).map(|c| c[1].to_string());
    let date_of_birth = pats.dob.captures(text).map(|c| c[1].to_string());
    let age = date_of_birth.as_deref().and_then(|d| derive_age(d, current_year));

    IdentityFields { name, gender, date_of_birth, age, email, tel }
}

/// Names are positionally biased toward the document top: scan at most the
/// first `name_window` lines for a line of capitalized word tokens. The
/// pattern alone admits all-caps section labels, so a lowercase character
/// is also required.
fn name_from_header(lines: &Lines, pats: &Patterns, opts: &ExtractOptions) -> Option<String> {
    lines
        .as_slice()
        .iter()
        .take(opts.name_window)
        .find(|line| {
            pats.name_line.is_match(line)
                && line.chars().any(char::is_lowercase)
                && opts
                    .name_max_tokens
                    .map_or(true, |max| line.split_whitespace().count() <= max)
        })
        .cloned()
}

/// Recovers a name from a `word.word@` email local part when no plain-text
/// name line survived upstream conversion.
fn name_from_email(lines: &Lines, pats: &Patterns, _opts: &ExtractOptions) -> Option<String> {
    let email = pats.email.find(lines.text())?;
    let caps = pats.email_local.captures(email.as_str())?;
    Some(format!("{} {}", capitalize(&caps[1]), capitalize(&caps[2])))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Age = current year − birth year: a documented approximation that
/// ignores month and day. Candidate formats are tried in fixed order and
/// an unparseable date simply leaves age absent.
pub fn derive_age(date_of_birth: &str, current_year: i32) -> Option<i32> {
    const FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d/%m/%y", "%d-%m-%y"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_of_birth, fmt).ok())
        .map(|d| current_year - d.year())
}

// ── Tests ──
