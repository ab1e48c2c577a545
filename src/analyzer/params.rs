/// Count the top-level parameters in the raw text between a function's parentheses.
///
/// Commas nested inside `()`, `{}`, `[]` or `<>` belong to a single parameter
/// (destructuring patterns, default values, generic type arguments). A single
/// trailing comma is ignored, so `a, b,` counts as two.
#[must_use]
pub fn count_parameters(params: &str) -> usize {
    let trimmed = params.trim();
    let list = trimmed.strip_suffix(',').unwrap_or(trimmed).trim_end();
    if list.is_empty() {
        return 0;
    }

    let mut depth = 0usize;
    let mut count = 1;
    let mut prev = '\0';

    for ch in list.chars() {
        match ch {
            '(' | '{' | '[' | '<' => depth += 1,
            ')' | '}' | ']' => depth = depth.saturating_sub(1),
            // `=>` inside a default value is an arrow, not a closing angle bracket
            '>' if prev != '=' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => count += 1,
            _ => {}
        }
        prev = ch;
    }

    count
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
