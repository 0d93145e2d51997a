//! Callsign detection from free-text radio reports.
//!
//! Resolves the single most likely unit callsign ("S1", "A2", "Control")
//! using a fixed strategy precedence:
//! 1. Standard alphanumeric (S1, AB12, S-1, A/2)
//! 2. NATO phonetic word + number (Sierra 12 -> S12)
//! 3. Role prefix + number (Security 5 -> S5, Medic 2 -> M2)
//! 4. The literal Control / Event Control
//!
//! No strategy matching means empty string, never an error.

use crate::patterns::{
    CALLSIGN_CONTEXT_CUES, CONTROL_CALLSIGN, NATO_ALPHABET, NATO_CALLSIGN, ROLE_CALLSIGN,
    ROLE_PREFIXES, STANDARD_CALLSIGN,
};
use crate::types::CallsignMatch;

/// Confidence for a callsign adjoined by a context cue ("reported by S1").
const CUED_CONFIDENCE: f32 = 0.95;
/// Confidence for a bare token match with no surrounding cue.
const BARE_CONFIDENCE: f32 = 0.6;

/// Detect the most likely callsign in `text`, or empty string.
pub fn detect_callsign(text: &str) -> String {
    match find_callsign(text) {
        Some((callsign, _, _)) => callsign,
        None => String::new(),
    }
}

/// Detect a callsign with a context-sensitive confidence score.
///
/// Returns `None` when no strategy matches. Confidence is above 0.9 only
/// when the token sits next to a cue phrase like "reported by" or
/// "responding", which separates deliberate references from incidental ones.
pub fn detect_callsign_with_confidence(text: &str) -> Option<CallsignMatch> {
    let (callsign, start, end) = find_callsign(text)?;
    let confidence = if has_context_cue(text, start, end) {
        CUED_CONFIDENCE
    } else {
        BARE_CONFIDENCE
    };
    Some(CallsignMatch {
        callsign,
        confidence,
    })
}

/// Extract every distinct callsign referenced in `text`, normalized and
/// deduplicated. Used when one report mentions multiple units.
pub fn extract_all_callsigns(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for m in STANDARD_CALLSIGN.captures_iter(text) {
        push_unique(&mut found, format!("{}{}", &m[1], &m[2]));
    }
    for m in NATO_CALLSIGN.captures_iter(text) {
        if let Some(letter) = nato_letter(&m[1]) {
            push_unique(&mut found, format!("{}{}", letter, &m[2]));
        }
    }
    for m in ROLE_CALLSIGN.captures_iter(text) {
        if let Some(prefix) = role_prefix(&m[1]) {
            push_unique(&mut found, format!("{}{}", prefix, &m[2]));
        }
    }
    if CONTROL_CALLSIGN.is_match(text) {
        push_unique(&mut found, "Control".to_string());
    }

    found
}

/// Normalize a raw callsign token to canonical form. Idempotent:
/// already-normalized input passes through unchanged.
///
/// - NATO phonetic prefix + number becomes letter + number (sierra 12 -> S12)
/// - Standard forms are upcased and separator-stripped (s-1 -> S1)
/// - control / event control becomes the literal `Control`
/// - Anything else is upcased but otherwise untouched
pub fn normalize_callsign(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_lowercase();
    if lower == "control" || lower == "event control" {
        return "Control".to_string();
    }

    // Whole-token NATO form
    if let Some(caps) = NATO_CALLSIGN.captures(trimmed) {
        if caps.get(0).map(|m| m.as_str().len()) == Some(trimmed.len()) {
            if let Some(letter) = nato_letter(&caps[1]) {
                return format!("{}{}", letter, &caps[2]);
            }
        }
    }

    // Whole-token standard form, any case, optional separator
    if let Some(caps) = whole_standard(trimmed) {
        return caps;
    }

    trimmed.to_uppercase()
}

// ============================================================================
// Strategy evaluation
// ============================================================================

/// First matching strategy, in precedence order. Returns the normalized
/// callsign plus the byte span of the raw match for context scoring.
fn find_callsign(text: &str) -> Option<(String, usize, usize)> {
    if let Some(caps) = STANDARD_CALLSIGN.captures(text) {
        let whole = caps.get(0).unwrap();
        return Some((
            format!("{}{}", &caps[1], &caps[2]),
            whole.start(),
            whole.end(),
        ));
    }

    if let Some(caps) = NATO_CALLSIGN.captures(text) {
        if let Some(letter) = nato_letter(&caps[1]) {
            let whole = caps.get(0).unwrap();
            return Some((format!("{}{}", letter, &caps[2]), whole.start(), whole.end()));
        }
    }

    if let Some(caps) = ROLE_CALLSIGN.captures(text) {
        if let Some(prefix) = role_prefix(&caps[1]) {
            let whole = caps.get(0).unwrap();
            return Some((format!("{}{}", prefix, &caps[2]), whole.start(), whole.end()));
        }
    }

    if let Some(m) = CONTROL_CALLSIGN.find(text) {
        return Some(("Control".to_string(), m.start(), m.end()));
    }

    None
}

/// Whether a cue phrase sits in the few words before or after the match.
fn has_context_cue(text: &str, start: usize, end: usize) -> bool {
    let before = trailing_words(&text[..start], 3);
    let after = leading_words(&text[end..], 3);

    CALLSIGN_CONTEXT_CUES.iter().any(|cue| {
        contains_phrase(&before, cue) || contains_phrase(&after, cue)
    })
}

/// Last `n` whitespace-separated words, lowercased.
fn trailing_words(text: &str, n: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let start = words.len().saturating_sub(n);
    words[start..].join(" ").to_lowercase()
}

/// First `n` whitespace-separated words, lowercased, punctuation-insensitive.
fn leading_words(text: &str, n: usize) -> String {
    text.split_whitespace()
        .take(n)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Word-bounded phrase containment: "at" must not fire on "that".
fn contains_phrase(window: &str, phrase: &str) -> bool {
    let padded = format!(" {} ", window.replace(|c: char| !c.is_alphanumeric() && c != ' ', " "));
    padded.contains(&format!(" {} ", phrase))
}

fn nato_letter(word: &str) -> Option<char> {
    let lower = word.to_lowercase();
    NATO_ALPHABET
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, letter)| *letter)
}

fn role_prefix(word: &str) -> Option<char> {
    let lower = word.to_lowercase();
    ROLE_PREFIXES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, letter)| *letter)
}

/// Whole-string standard form in any case: letters, optional -/, digits.
fn whole_standard(token: &str) -> Option<String> {
    let mut letters = String::new();
    let mut digits = String::new();
    let mut chars = token.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphabetic() && letters.len() < 2 && digits.is_empty() {
            letters.push(c.to_ascii_uppercase());
            chars.next();
        } else {
            break;
        }
    }
    if letters.is_empty() {
        return None;
    }
    if let Some(&c) = chars.peek() {
        if c == '-' || c == '/' {
            chars.next();
        }
    }
    for c in chars {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            return None;
        }
    }
    if digits.is_empty() {
        return None;
    }
    Some(format!("{}{}", letters, digits))
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_forms() {
        assert_eq!(detect_callsign("S1 on scene"), "S1");
        assert_eq!(detect_callsign("unit AB12 responding"), "AB12");
        assert_eq!(detect_callsign("S-1 to control"), "S1");
        assert_eq!(detect_callsign("A/2 attending"), "A2");
    }

    #[test]
    fn test_nato_forms() {
        assert_eq!(detect_callsign("Sierra 12 responding"), "S12");
        assert_eq!(detect_callsign("report from alpha 2"), "A2");
        assert_eq!(detect_callsign("tango-7 in position"), "T7");
    }

    #[test]
    fn test_role_forms() {
        assert_eq!(detect_callsign("Security 5 requesting backup"), "S5");
        assert_eq!(detect_callsign("medic 2 attending"), "M2");
        assert_eq!(detect_callsign("supervisor 3 aware"), "M3");
    }

    #[test]
    fn test_control() {
        assert_eq!(detect_callsign("message for event control"), "Control");
        assert_eq!(detect_callsign("Control, are you receiving"), "Control");
    }

    #[test]
    fn test_precedence_standard_beats_nato() {
        // Both forms present: standard alphanumeric wins
        assert_eq!(detect_callsign("S1 passing to Sierra 12"), "S1");
    }

    #[test]
    fn test_no_match() {
        assert_eq!(detect_callsign(""), "");
        assert_eq!(detect_callsign("nothing to report here"), "");
        assert_eq!(detect_callsign("!!!???"), "");
        assert!(detect_callsign_with_confidence("nothing here").is_none());
    }

    #[test]
    fn test_bar_number_is_not_a_callsign() {
        assert_eq!(detect_callsign("spillage near Bar 3"), "");
    }

    #[test]
    fn test_confidence_with_cue() {
        let m = detect_callsign_with_confidence("incident reported by S1 at main gate").unwrap();
        assert_eq!(m.callsign, "S1");
        assert!(m.confidence > 0.9);
    }

    #[test]
    fn test_confidence_bare_token() {
        let m = detect_callsign_with_confidence("random text containing S1 somewhere").unwrap();
        assert_eq!(m.callsign, "S1");
        assert!(m.confidence < 0.9);
    }

    #[test]
    fn test_extract_all() {
        let all = extract_all_callsigns("S1 and Sierra 12 plus Security 5, copy Control");
        assert!(all.contains(&"S1".to_string()));
        assert!(all.contains(&"S12".to_string()));
        assert!(all.contains(&"S5".to_string()));
        assert!(all.contains(&"Control".to_string()));
    }

    #[test]
    fn test_extract_all_dedupes() {
        let all = extract_all_callsigns("S1 calling, S1 again, sierra 1 too");
        assert_eq!(all.iter().filter(|c| *c == "S1").count(), 1);
    }

    #[test]
    fn test_normalize_standard() {
        assert_eq!(normalize_callsign("s-1"), "S1");
        assert_eq!(normalize_callsign("ab/12"), "AB12");
        assert_eq!(normalize_callsign("S1"), "S1");
    }

    #[test]
    fn test_normalize_nato() {
        assert_eq!(normalize_callsign("sierra 12"), "S12");
        assert_eq!(normalize_callsign("Alpha-2"), "A2");
    }

    #[test]
    fn test_normalize_control() {
        assert_eq!(normalize_callsign("control"), "Control");
        assert_eq!(normalize_callsign("Event Control"), "Control");
    }

    #[test]
    fn test_normalize_unrecognized_upcased() {
        assert_eq!(normalize_callsign("gate team"), "GATE TEAM");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["s-1", "sierra 12", "control", "gate team", "AB12", ""] {
            let once = normalize_callsign(raw);
            assert_eq!(normalize_callsign(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_output_shape_invariant() {
        let inputs = [
            "Medical at gate 4, S1 responding",
            "sierra 9 to control",
            "Security 12 on scene",
            "event control please copy",
            "no units mentioned",
        ];
        for input in inputs {
            let result = detect_callsign(input);
            let shape_ok = result.is_empty()
                || result == "Control"
                || (result.len() >= 2
                    && result
                        .chars()
                        .take_while(|c| c.is_ascii_uppercase())
                        .count()
                        <= 2
                    && result.chars().skip_while(|c| c.is_ascii_uppercase()).all(|c| c.is_ascii_digit()));
            assert!(shape_ok, "bad callsign shape: {result:?}");
        }
    }
}
