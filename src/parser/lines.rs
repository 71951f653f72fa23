/// Normalized view of a source document: trimmed non-blank lines in source
/// order, plus the canonical text formed by rejoining them with `\n`.
#[derive(Debug, Clone, Default)]
pub struct Lines {
    lines: Vec<String>,
    text: String,
}

impl Lines {
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    /// Canonical rejoined text used by the pattern-matching passes.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split raw text into trimmed lines, dropping blanks. Pure; empty input
/// yields an empty line list and empty canonical text.
pub fn normalize(source: &str) -> Lines {
    let lines: Vec<String> = source
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    let text = lines.join("\n");
    Lines { lines, text }
}

// ── Tests ──
