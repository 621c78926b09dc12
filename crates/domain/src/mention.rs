//! `@mention` extraction from free-form notification text.
//!
//! A mention is an email address prefixed with `@`, e.g.
//! `"Hello @studentagnes@gmail.com"`. Word characters are ASCII
//! letters, digits and `_`; both the local part and the domain are word runs
//! joined by single `.` or `-` separators, and the domain must end with a
//! `.` followed by a two- or three-character run.

use crate::email::Email;

fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn is_separator(byte: u8) -> bool {
    byte == b'.' || byte == b'-'
}

/// Word runs joined by single separators, starting and ending on a word byte.
fn is_dotted(segment: &[u8]) -> bool {
    match (segment.first(), segment.last()) {
        (Some(&first), Some(&last)) => {
            is_word(first)
                && is_word(last)
                && segment.windows(2).all(|w| is_word(w[0]) || is_word(w[1]))
        }
        _ => false,
    }
}

fn is_domain(segment: &[u8]) -> bool {
    if !is_dotted(segment) {
        return false;
    }
    match segment.iter().rposition(|&b| is_separator(b)) {
        Some(idx) => segment[idx] == b'.' && (2..=3).contains(&(segment.len() - idx - 1)),
        None => false,
    }
}

fn scan_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !(is_word(b) || is_separator(b)))
        .map_or(bytes.len(), |len| start + len)
}

/// Try to match a mention whose leading `@` sits at `at`; returns the end offset.
fn match_mention(bytes: &[u8], at: usize) -> Option<usize> {
    let local_start = at + 1;
    let local_end = scan_run(bytes, local_start);
    if bytes.get(local_end) != Some(&b'@') || !is_dotted(&bytes[local_start..local_end]) {
        return None;
    }

    let domain_start = local_end + 1;
    let run_end = scan_run(bytes, domain_start);
    (domain_start + 1..=run_end)
        .rev()
        .find(|&end| is_domain(&bytes[domain_start..end]))
}

/// Extract every valid `@mentioned` email from `text`, in order of appearance.
///
/// Duplicates are kept; callers that need a set deduplicate themselves.
#[must_use]
pub fn parse_mentioned_emails(text: &str) -> Vec<Email> {
    let bytes = text.as_bytes();
    let mut mentions = Vec::new();
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'@') {
        let at = pos + offset;
        match match_mention(bytes, at) {
            Some(end) => {
                // All matched bytes are ASCII, so both offsets are char boundaries.
                if let Ok(email) = Email::parse(&text[at + 1..end]) {
                    mentions.push(email);
                }
                pos = end;
            }
            None => pos = at + 1,
        }
    }

    mentions
}
