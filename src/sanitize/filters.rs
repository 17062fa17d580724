//! Sanitization filters
//!
//! Case-insensitive stripping of script blocks, `javascript:` URI prefixes,
//! and inline event handler patterns from raw input. The filter pipeline
//! repeats until the input stops changing, so a removal can never splice a
//! stripped pattern back together. Sanitized output therefore contains no
//! `<script` or `javascript:` substring in any case, and sanitizing twice
//! yields the same string.
//!
//! This is pattern-stripping only. It is not a substitute for
//! output-encoding based XSS defense and guarantees nothing beyond the
//! three patterns above.

/// Sanitize a raw input string.
pub fn sanitize_input(input: &str) -> String {
    let mut out = input.to_string();
    loop {
        let pass = strip_script_blocks(&out);
        let pass = strip_token(&pass, "<script");
        let pass = strip_token(&pass, "javascript:");
        let pass = strip_event_handlers(&pass);
        if pass == out {
            return out;
        }
        out = pass;
    }
}

/// Find the first ASCII-case-insensitive occurrence of `token`.
fn find_token(haystack: &str, token: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let pat = token.as_bytes();
    if pat.is_empty() || hay.len() < pat.len() {
        return None;
    }
    (0..=hay.len() - pat.len()).find(|&i| {
        hay[i..i + pat.len()]
            .iter()
            .zip(pat)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
    })
}

/// Remove complete `<script ...>...</script>` blocks, including their
/// contents. Leftover unpaired `<script` fragments are handled separately.
fn strip_script_blocks(input: &str) -> String {
    let mut out = input.to_string();
    loop {
        let Some(start) = find_token(&out, "<script") else {
            return out;
        };
        let after = start + "<script".len();
        let Some(close) = find_token(&out[after..], "</script>") else {
            return out;
        };
        let end = after + close + "</script>".len();
        out.replace_range(start..end, "");
    }
}

/// Remove every occurrence of `token`, repeating until none remains.
fn strip_token(input: &str, token: &str) -> String {
    let mut out = input.to_string();
    while let Some(pos) = find_token(&out, token) {
        out.replace_range(pos..pos + token.len(), "");
    }
    out
}

/// Remove inline event handler patterns: `on`, one or more word
/// characters, optional whitespace, `=`.
fn strip_event_handlers(input: &str) -> String {
    let mut out = input.to_string();
    while let Some((start, end)) = find_event_handler(&out) {
        out.replace_range(start..end, "");
    }
    out
}

fn find_event_handler(haystack: &str) -> Option<(usize, usize)> {
    let hay = haystack.as_bytes();
    let mut i = 0;
    while i + 2 < hay.len() {
        if hay[i].eq_ignore_ascii_case(&b'o') && hay[i + 1].eq_ignore_ascii_case(&b'n') {
            let mut j = i + 2;
            while j < hay.len() && (hay[j].is_ascii_alphanumeric() || hay[j] == b'_') {
                j += 1;
            }
            if j > i + 2 {
                let mut k = j;
                while k < hay.len() && hay[k].is_ascii_whitespace() {
                    k += 1;
                }
                if k < hay.len() && hay[k] == b'=' {
                    return Some((i, k + 1));
                }
            }
        }
        i += 1;
    }
    None
}
