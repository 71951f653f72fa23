use crate::parser::lines::Lines;
use crate::parser::patterns::Patterns;
use crate::record::ExperienceEntry;

/// Extract work-history entries from the full canonical text. Experience
/// blocks are often unlabeled, so this pass is not restricted to a
/// segmented section: the duration line is the only token with a
/// near-fixed shape across resume styles, and it anchors every entry.
pub fn extract(lines: &Lines, pats: &Patterns) -> Vec<ExperienceEntry> {
    pats.experience
        .captures_iter(lines.text())
        .map(|caps| ExperienceEntry {
            company: caps.name("company").map(|m| m.as_str().trim().to_string()),
            position: caps.name("position").map(|m| m.as_str().trim().to_string()),
            duration: caps["duration"].trim().to_string(),
            responsibilities: caps["resp"]
                .lines()
                .map(strip_bullet)
                .filter(|l| !l.is_empty())
                .collect(),
        })
        .collect()
}

fn strip_bullet(line: &str) -> String {
    line.trim().trim_start_matches(['-', '*', '•', '·']).trim().to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lines::normalize;
    use crate::parser::patterns::PATTERNS;

    fn run(text: &str) -> Vec<ExperienceEntry> {
        extract(&normalize(text), &PATTERNS)
    }

    #[test]
    fn full_entry() {
        let entries = run("Company: Acme\nPosition: Engineer\nJan 2020 - Dec 2021\n- Built systems\n");
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.company.as_deref(), Some("Acme"));
        assert_eq!(e.position.as_deref(), Some("Engineer"));
        assert_eq!(e.duration, "Jan 2020 - Dec 2021");
        assert_eq!(e.responsibilities, ["Built systems"]);
    }

    #[test]
    fn duration_is_the_anchor() {
        let entries = run("Company: Acme\nPosition: Engineer\n- Built systems\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn company_and_position_are_optional() {
        let entries = run("Mar 2019 - Present\n• Shipped the payments stack\n• Mentored juniors");
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert!(e.company.is_none());
        assert!(e.position.is_none());
        assert_eq!(e.duration, "Mar 2019 - Present");
        assert_eq!(e.responsibilities, ["Shipped the payments stack", "Mentored juniors"]);
    }

    #[test]
    fn multiple_entries_in_document_order() {
        let text = "Company: Acme\nPosition: Engineer\nJan 2018 - Dec 2020\n- First\nCompany: Globex\nPosition: Senior Engineer\nFeb 2021 - Present\n- Second";
        let entries = run(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company.as_deref(), Some("Acme"));
        assert_eq!(entries[1].company.as_deref(), Some("Globex"));
        assert_eq!(entries[1].duration, "Feb 2021 - Present");
    }

    #[test]
    fn bullets_require_a_marker() {
        // A duration followed by a plain paragraph is not an entry.
        let entries = run("Jan 2020 - Dec 2021\nWorked on various things");
        assert!(entries.is_empty());
    }

    #[test]
    fn bullet_markers_are_stripped() {
        let entries = run("Jun 2015 - Jul 2016\n* starred\n- dashed\n• dotted");
        assert_eq!(entries[0].responsibilities, ["starred", "dashed", "dotted"]);
    }

    #[test]
    fn full_month_names_and_en_dash() {
        let entries = run("January 2020 – December 2021\n- Built systems");
        assert_eq!(entries[0].duration, "January 2020 – December 2021");
    }
}
