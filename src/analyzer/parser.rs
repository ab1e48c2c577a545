use regex::Regex;

use super::params::count_parameters;
use super::types::FunctionSpan;

/// Names that look like calls followed by a block but never start a function.
const RESERVED_NAMES: &[&str] = &["if", "for", "while", "switch", "catch", "constructor"];

/// Trait for locating function spans in source text.
///
/// Rule evaluation only sees the returned spans, so a grammar-based parser can
/// replace the heuristic one without touching the checker.
pub trait FunctionParser: Send + Sync {
    /// Parse content and extract function spans in line order.
    fn parse(&self, content: &str) -> Vec<FunctionSpan>;
}

/// Signature shapes, tried in order on each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// `[export] [async] function name(`
    Declaration,
    /// `const|let|var name = [async] (params) [: Type] =>`
    Arrow,
    /// `const|let|var name = [async] function(`
    Expression,
    /// `[async] name(params) {`
    Method,
}

/// Brace-matching function extractor for JavaScript/TypeScript-like sources.
#[allow(clippy::struct_field_names)]
pub struct HeuristicParser {
    fn_pattern: Regex,
    arrow_pattern: Regex,
    expression_pattern: Regex,
    method_pattern: Regex,
    arrow_tail: Regex,
    method_tail: Regex,
}

impl Default for HeuristicParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_pattern: Regex::new(
                r"^[\t ]*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\(",
            )
            .expect("Invalid regex"),
            arrow_pattern: Regex::new(
                r"^[\t ]*(?:export\s+)?(?:const|let|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*(?::[^=]+)?=\s*(?:async\s*)?\(",
            )
            .expect("Invalid regex"),
            expression_pattern: Regex::new(
                r"^[\t ]*(?:export\s+)?(?:const|let|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*(?:async\s+)?function\s*\*?\s*(?:[a-zA-Z_$][a-zA-Z0-9_$]*)?\s*\(",
            )
            .expect("Invalid regex"),
            method_pattern: Regex::new(
                r"^[\t ]*(?:(?:public|private|protected|static|override|readonly)\s+)*(?:async\s+)?([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\(",
            )
            .expect("Invalid regex"),
            arrow_tail: Regex::new(r"^\s*(?::[^=]*)?=>").expect("Invalid regex"),
            method_tail: Regex::new(r"^\s*(?::[^{;=]*)?\{").expect("Invalid regex"),
        }
    }

    /// Match a signature on `line`, returning its shape, name and the byte
    /// offset of the opening parenthesis.
    fn match_signature(&self, line: &str) -> Option<(Shape, String, usize)> {
        let candidates = [
            (Shape::Declaration, &self.fn_pattern),
            (Shape::Arrow, &self.arrow_pattern),
            (Shape::Expression, &self.expression_pattern),
            (Shape::Method, &self.method_pattern),
        ];

        candidates.into_iter().find_map(|(shape, pattern)| {
            let caps = pattern.captures(line)?;
            let name = caps.get(1)?.as_str();
            if RESERVED_NAMES.contains(&name) {
                return None;
            }
            let open = caps.get(0)?.end() - 1;
            Some((shape, name.to_string(), open))
        })
    }

    fn tail_matches(&self, shape: Shape, tail: &str) -> bool {
        match shape {
            Shape::Arrow => self.arrow_tail.is_match(tail),
            Shape::Method => self.method_tail.is_match(tail),
            Shape::Declaration | Shape::Expression => true,
        }
    }
}

impl FunctionParser for HeuristicParser {
    fn parse(&self, content: &str) -> Vec<FunctionSpan> {
        let lines: Vec<&str> = content.lines().collect();
        let mut functions = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let Some((shape, name, open)) = self.match_signature(line) else {
                continue;
            };
            let params = extract_params(&lines, i, open);
            if !self.tail_matches(shape, params.tail) {
                continue;
            }

            let start_line = i + 1;
            let end_line =
                find_block_end(&lines, params.close_line, params.close_col).unwrap_or(start_line);
            let body_text = lines[i..end_line].join("\n");
            functions.push(FunctionSpan::new(
                name,
                start_line,
                end_line,
                count_parameters(&params.text),
                body_text,
            ));
        }

        functions
    }
}

struct ParamList<'a> {
    /// Text between the parentheses, possibly spanning lines
    text: String,
    /// Rest of the line after the closing parenthesis
    tail: &'a str,
    /// Line index holding the closing parenthesis
    close_line: usize,
    /// Byte offset just past the closing parenthesis
    close_col: usize,
}

/// Collect the parameter text starting at the `(` at byte `open` of line `start`.
fn extract_params<'a>(lines: &[&'a str], start: usize, open: usize) -> ParamList<'a> {
    let mut depth = 0usize;
    let mut text = String::new();

    for (i, line) in lines.iter().enumerate().skip(start) {
        let offset = if i == start { open } else { 0 };
        for (pos, ch) in line[offset..].char_indices() {
            match ch {
                '(' => {
                    depth += 1;
                    if depth == 1 {
                        continue;
                    }
                }
                ')' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        let close_col = offset + pos + 1;
                        return ParamList {
                            text,
                            tail: &line[close_col..],
                            close_line: i,
                            close_col,
                        };
                    }
                }
                _ => {}
            }
            text.push(ch);
        }
        text.push('\n');
    }

    ParamList {
        text,
        tail: "",
        close_line: start,
        close_col: open,
    }
}

/// Find the line (1-indexed) where the body opened after the parameter list
/// closes, scanning from byte `col` of line `start`.
///
/// Depth is checked at the end of each line, so a block opened and closed on
/// the same line as other braces still ends on that line. A `;` before the
/// first `{` means there is no block body (`=> x + 1;`, overload signatures).
fn find_block_end(lines: &[&str], start: usize, col: usize) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut found_open = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        let rest = if i == start { &line[col..] } else { line };
        for ch in rest.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    found_open = true;
                }
                '}' => depth -= 1,
                ';' if !found_open => return None,
                _ => {}
            }
        }
        if found_open && depth <= 0 {
            return Some(i + 1);
        }
    }

    None
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
