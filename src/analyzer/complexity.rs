use regex::Regex;

/// Decision constructs counted toward cyclomatic complexity.
///
/// Each class is counted independently, so `else if (` also matches `if (`.
const DECISION_PATTERNS: &[&str] = &[
    r"\bif\s*\(",
    r"\belse\s+if\s*\(",
    r"\bcase\s",
    r"\bfor\s*\(",
    r"\bwhile\s*\(",
    r"\bdo\s*\{",
    r"\bcatch\s*\(",
    r"&&",
    r"\|\|",
    r"\?\?",
];

/// Scores a function body for cyclomatic complexity by counting decision points.
///
/// This is a text heuristic: keywords inside comments or strings are counted too.
pub struct ComplexityCounter {
    patterns: Vec<Regex>,
}

impl Default for ComplexityCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: DECISION_PATTERNS
                .iter()
                .map(|p| Regex::new(p).expect("Invalid regex"))
                .collect(),
        }
    }

    /// Complexity of `body`, starting from the straight-line baseline of 1.
    #[must_use]
    pub fn score(&self, body: &str) -> usize {
        let decisions: usize = self
            .patterns
            .iter()
            .map(|p| p.find_iter(body).count())
            .sum();

        1 + decisions + count_ternaries(body)
    }
}

fn count_ternaries(text: &str) -> usize {
    text.lines().map(count_line_ternaries).sum()
}

/// Rough `cond ? a : b` detection on one line.
///
/// A `?` that is part of `??`, optional chaining (`?.`) or an optional
/// annotation (`?:`) is skipped, and the `:` must follow on the same line.
fn count_line_ternaries(line: &str) -> usize {
    let bytes = line.as_bytes();
    let mut count = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'?' {
            i += 1;
            continue;
        }

        let prev = if i > 0 { bytes[i - 1] } else { b' ' };
        let next = bytes.get(i + 1).copied();
        let is_operator_part = prev == b'?' || matches!(next, None | Some(b'?' | b'.' | b':'));

        if !is_operator_part && let Some(offset) = line[i + 1..].find(':') {
            count += 1;
            i += offset + 2;
            continue;
        }
        i += 1;
    }

    count
}

#[cfg(test)]
#[path = "complexity_tests.rs"]
mod tests;
