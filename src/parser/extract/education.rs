use tracing::debug;

use crate::parser::patterns::Patterns;
use crate::record::EducationRecord;

/// How many lines past the university anchor the sub-field scan may look.
/// Stopping here avoids consuming a later institution's details as if they
/// belonged to the first one.
const LOOKAHEAD: usize = 3;

/// Extract education fields from the segmented Education text. `None`
/// section (segmentation failed) yields an all-absent record.
pub fn extract(section: Option<&str>, pats: &Patterns) -> EducationRecord {
    let Some(text) = section else {
        return EducationRecord::default();
    };
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let mut rec = EducationRecord::default();

    if let Some(anchor) = lines.iter().position(|l| pats.university.is_match(l)) {
        rec.university = Some(lines[anchor].to_string());

        for line in lines[anchor + 1..].iter().take(LOOKAHEAD) {
            if rec.degree.is_none() && pats.degree.is_match(line) {
                rec.degree = Some(line.to_string());
                continue;
            }
            if rec.major.is_none() {
                if let Some(caps) = pats.major.captures(line) {
                    rec.major = Some(caps[1].trim().to_string());
                    continue;
                }
            }
            if rec.gpax.is_none() {
                if let Some(caps) = pats.gpa.captures(line) {
                    // A malformed number is absence, never an error.
                    rec.gpax = caps[1].parse().ok();
                }
            }
        }
    } else {
        debug!("no university line in education section");
    }

    // Graduation year is independent of the university anchor. A labeled
    // year wins; a closed year range supplies the end year as a fallback.
    rec.graduation_year = pats
        .graduation
        .captures(text)
        .map(|c| c[1].to_string())
        .or_else(|| pats.year_range.captures(text).map(|c| c[2].to_string()));

    rec
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::patterns::PATTERNS;

    fn run(section: &str) -> EducationRecord {
        extract(Some(section), &PATTERNS)
    }

    #[test]
    fn full_block() {
        let rec = run("ABC University\nBachelor of Science\nMajor in Computer Science\nGPA: 3.8");
        assert_eq!(rec.university.as_deref(), Some("ABC University"));
        assert!(rec.degree.as_deref().unwrap().contains("Bachelor"));
        assert_eq!(rec.major.as_deref(), Some("Computer Science"));
        assert_eq!(rec.gpax, Some(3.8));
    }

    #[test]
    fn lookahead_window_is_bounded() {
        // Degree sits four lines past the anchor, outside the window.
        let rec = run("ABC University\nfiller\nfiller\nfiller\nBachelor of Arts");
        assert_eq!(rec.university.as_deref(), Some("ABC University"));
        assert!(rec.degree.is_none());
    }

    #[test]
    fn first_university_line_wins() {
        let rec = run("ABC University\nGPA: 3.5\nXYZ College\nGPA: 2.0");
        assert_eq!(rec.university.as_deref(), Some("ABC University"));
        assert_eq!(rec.gpax, Some(3.5));
    }

    #[test]
    fn malformed_gpa_is_absent() {
        let rec = run("ABC University\nGPA: 3.8.1");
        assert!(rec.gpax.is_none());
    }

    #[test]
    fn graduation_year_without_university() {
        let rec = run("Graduation Year: 2017");
        assert!(rec.university.is_none());
        assert_eq!(rec.graduation_year.as_deref(), Some("2017"));
    }

    #[test]
    fn year_range_supplies_end_year() {
        let rec = run("XYZ College\n2018 - 2022");
        assert_eq!(rec.graduation_year.as_deref(), Some("2022"));
    }

    #[test]
    fn open_range_contributes_nothing() {
        let rec = run("XYZ College\n2018 - Present");
        assert!(rec.graduation_year.is_none());
    }

    #[test]
    fn labeled_year_beats_range() {
        let rec = run("2015 - 2019\nGraduation: 2020");
        assert_eq!(rec.graduation_year.as_deref(), Some("2020"));
    }

    #[test]
    fn absent_section_is_all_absent() {
        assert_eq!(extract(None, &PATTERNS), EducationRecord::default());
    }

    #[test]
    fn gpax_label_variant() {
        let rec = run("Some Institute\nGPAX: 3.25");
        assert_eq!(rec.gpax, Some(3.25));
    }
}
