use std::collections::HashSet;

use tracing::debug;

use crate::parser::patterns::Patterns;
use crate::record::{SkillCategory, Skills};

/// Extract skills from the segmented Skills text. Two recognized shapes:
/// `Label:` category blocks (category order follows the source), or a flat
/// deduplicated token set when no labels exist. Absent entirely when the
/// section could not be segmented.
pub fn extract(section: Option<&str>, pats: &Patterns) -> Option<Skills> {
    let text = section?;
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let mut categories: Vec<SkillCategory> = Vec::new();
    for line in &lines {
        if let Some(caps) = pats.category_label.captures(line) {
            categories.push(SkillCategory {
                name: title_case(caps[1].trim()),
                skills: split_tokens(&caps[2], pats),
            });
        } else if let Some(current) = categories.last_mut() {
            // Continuation lines belong to the open category block.
            current.skills.extend(split_tokens(line, pats));
        }
    }

    if !categories.is_empty() {
        return Some(Skills::Categorized(categories));
    }

    debug!("no category labels, falling back to flat skill set");
    let mut seen: HashSet<String> = HashSet::new();
    let mut flat = Vec::new();
    for line in &lines {
        for token in split_tokens(line, pats) {
            if seen.insert(token.to_lowercase()) {
                flat.push(token);
            }
        }
    }

    if flat.is_empty() {
        None
    } else {
        Some(Skills::Flat(flat))
    }
}

/// Split on the separator set, strip bullet lead-ins, title-case, and
/// discard tokens with no alphabetic character.
fn split_tokens(s: &str, pats: &Patterns) -> Vec<String> {
    pats.skill_sep
        .split(s)
        .map(|t| t.trim().trim_start_matches(['-', '*', '•', '·']).trim())
        .filter(|t| !t.is_empty() && t.chars().any(char::is_alphabetic))
        .map(title_case)
        .collect()
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::patterns::PATTERNS;

    fn run(section: &str) -> Option<Skills> {
        extract(Some(section), &PATTERNS)
    }

    #[test]
    fn categorized_blocks() {
        let skills = run("Programming: Python, Go\nTools: Git").unwrap();
        match &skills {
            Skills::Categorized(cats) => {
                assert_eq!(cats.len(), 2);
                assert_eq!(cats[0].name, "Programming");
                assert_eq!(cats[0].skills, ["Python", "Go"]);
                assert_eq!(cats[1].name, "Tools");
                assert_eq!(cats[1].skills, ["Git"]);
            }
            Skills::Flat(_) => panic!("expected categories"),
        }
        assert_eq!(skills.flat(), ["Python", "Go", "Git"]);
    }

    #[test]
    fn continuation_lines_extend_open_category() {
        let skills = run("Programming:\n- Python\n- Rust").unwrap();
        match skills {
            Skills::Categorized(cats) => assert_eq!(cats[0].skills, ["Python", "Rust"]),
            Skills::Flat(_) => panic!("expected categories"),
        }
    }

    #[test]
    fn flat_fallback_dedupes_case_insensitively() {
        let skills = run("Python, SQL, python\nDocker | SQL").unwrap();
        match skills {
            Skills::Flat(v) => assert_eq!(v, ["Python", "Sql", "Docker"]),
            Skills::Categorized(_) => panic!("expected flat"),
        }
    }

    #[test]
    fn non_alphabetic_tokens_discarded() {
        let skills = run("Python, 123, --, C++").unwrap();
        match skills {
            Skills::Flat(v) => assert_eq!(v, ["Python", "C++"]),
            Skills::Categorized(_) => panic!("expected flat"),
        }
    }

    #[test]
    fn empty_category_keeps_its_slot() {
        let skills = run("Databases:\nTools: Git").unwrap();
        match skills {
            Skills::Categorized(cats) => {
                assert_eq!(cats[0].name, "Databases");
                assert!(cats[0].skills.is_empty());
                assert_eq!(cats[1].skills, ["Git"]);
            }
            Skills::Flat(_) => panic!("expected categories"),
        }
    }

    #[test]
    fn absent_section() {
        assert!(extract(None, &PATTERNS).is_none());
    }

    #[test]
    fn section_with_no_usable_tokens() {
        assert!(run("12345\n---").is_none());
    }
}
