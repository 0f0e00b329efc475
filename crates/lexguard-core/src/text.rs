//! Character-counted text windows.
//!
//! Offsets passed in are byte offsets as produced by `regex` matches; the
//! window radii are counted in characters and clipped to the text bounds.
//! Offsets that do not fall on a char boundary degrade to the text edges
//! rather than panicking.

/// Slice `before` characters ahead of `start` through `after` characters past `end`.
pub fn context_window(text: &str, start: usize, end: usize, before: usize, after: usize) -> &str {
    let lo = step_back(text, start, before);
    let hi = step_forward(text, end, after);
    if lo > hi {
        return "";
    }
    text.get(lo..hi).unwrap_or("")
}

/// Prefix of `s` holding at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// `unlimited_liability` → `Unlimited Liability`.
pub fn title_case(id: &str) -> String {
    id.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn step_back(text: &str, start: usize, n: usize) -> usize {
    if n == 0 {
        return start.min(text.len());
    }
    let head = text.get(..start).unwrap_or("");
    head.char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn step_forward(text: &str, end: usize, n: usize) -> usize {
    match text.get(end..) {
        Some(tail) => tail
            .char_indices()
            .nth(n)
            .map(|(i, _)| end + i)
            .unwrap_or(text.len()),
        None => text.len(),
    }
}
