use regex::{Captures, Regex};

/// Literals that never count as magic numbers unless configured otherwise.
pub const DEFAULT_ALLOWED_NUMBERS: &[f64] = &[0.0, 1.0, -1.0, 2.0, 100.0, 1000.0, 0.5, 0.1];

const QUOTES: [u8; 3] = [b'"', b'\'', b'`'];

/// An unnamed numeric literal found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicNumber {
    /// Line of the literal (1-indexed)
    pub line: usize,
    /// Literal as written, including a leading minus sign
    pub literal: String,
}

/// Scans source lines for numeric literals that are not given a name.
///
/// Named-constant declarations, imports and comment lines are exempt. Array
/// indices, `.length` comparisons, `: number` annotations, comparisons against
/// `0` and increments are stripped before scanning.
pub struct MagicNumberDetector {
    allowed: Vec<f64>,
    declaration: Regex,
    import: Regex,
    safe_patterns: Vec<Regex>,
    number: Regex,
}

impl Default for MagicNumberDetector {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_NUMBERS.to_vec())
    }
}

impl MagicNumberDetector {
    #[must_use]
    pub fn new(allowed: Vec<f64>) -> Self {
        let safe_patterns = [
            r"\[\s*-?[0-9]+\s*\]",
            r"\.length\s*(?:[<>]=?|[=!]==?)\s*-?[0-9]+(?:\.[0-9]+)?",
            r":\s*number\b",
            r"(?:[<>]=?|[=!]==?)\s*0(?:[^0-9.xXbBoO]|$)",
            r"\+\+|--",
            r"[+-]=\s*1(?:[^0-9.]|$)",
        ];

        Self {
            allowed,
            declaration: Regex::new(r"^\s*(?:export\s+)?(?:const|let|var)\s+[^=]*=")
                .expect("Invalid regex"),
            import: Regex::new(r"^\s*import\b").expect("Invalid regex"),
            safe_patterns: safe_patterns
                .iter()
                .map(|p| Regex::new(p).expect("Invalid regex"))
                .collect(),
            number: Regex::new(r"(?:^|[^\w.$])(-?[0-9]+(?:\.[0-9]+)?)").expect("Invalid regex"),
        }
    }

    /// Find every magic number in `content`, in line order.
    #[must_use]
    pub fn detect(&self, content: &str) -> Vec<MagicNumber> {
        content
            .lines()
            .enumerate()
            .flat_map(|(i, line)| self.detect_line(line, i + 1))
            .collect()
    }

    fn detect_line(&self, line: &str, line_number: usize) -> Vec<MagicNumber> {
        if self.is_exempt_line(line) {
            return Vec::new();
        }

        let cleaned = self.strip_safe_patterns(strip_trailing_comment(line));
        let mut found = Vec::new();

        for caps in self.number.captures_iter(&cleaned) {
            let Some(token) = caps.get(1) else {
                continue;
            };
            let next = cleaned[token.end()..].chars().next();
            // Identifier or prefixed literal (`0x1F`, `1e3`, `10n`)
            if next.is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$') {
                continue;
            }
            if self.is_allowed(token.as_str()) || is_inside_string(&cleaned, token.start()) {
                continue;
            }
            found.push(MagicNumber {
                line: line_number,
                literal: token.as_str().to_string(),
            });
        }

        found
    }

    fn is_exempt_line(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        trimmed.starts_with("//")
            || trimmed.starts_with("/*")
            || trimmed.starts_with('*')
            || trimmed.starts_with('#')
            || self.import.is_match(line)
            || self.declaration.is_match(line)
    }

    fn strip_safe_patterns(&self, line: &str) -> String {
        self.safe_patterns
            .iter()
            .fold(line.to_string(), |text, pattern| {
                pattern
                    .replace_all(&text, |caps: &Captures<'_>| " ".repeat(caps[0].len()))
                    .into_owned()
            })
    }

    fn is_allowed(&self, literal: &str) -> bool {
        literal.parse::<f64>().is_ok_and(|value| {
            self.allowed
                .iter()
                .any(|allowed| (value - allowed).abs() < f64::EPSILON)
        })
    }
}

/// Whether byte offset `pos` falls inside a string literal, judged by an odd
/// number of unescaped quote characters of one kind before it.
fn is_inside_string(line: &str, pos: usize) -> bool {
    let before = &line.as_bytes()[..pos];
    QUOTES.iter().any(|&quote| {
        before
            .iter()
            .enumerate()
            .filter(|&(i, &b)| b == quote && (i == 0 || before[i - 1] != b'\\'))
            .count()
            % 2
            == 1
    })
}

/// Drop a trailing `//` comment that is not inside a string.
fn strip_trailing_comment(line: &str) -> &str {
    line.match_indices("//")
        .find(|&(pos, _)| !is_inside_string(line, pos))
        .map_or(line, |(pos, _)| &line[..pos])
}

#[cfg(test)]
#[path = "magic_tests.rs"]
mod tests;
