//! Incident type detection over the severity-ordered keyword ladder.
//!
//! Safety-critical categories are checked before medical, before
//! security/crowd, before purely operational ones, so a report mentioning
//! both "smoke" and "attendance numbers" resolves to the safety category.

use crate::patterns::{ALTERNATIVE_CLUSTERS, TYPE_LADDER};
use crate::types::{IncidentType, IncidentTypeMatch, IncidentTypeResult};

/// Confidence for a crisp keyword hit.
const CRISP_CONFIDENCE: f32 = 0.8;
/// Fallback floor when no rule matched. Anything at or below this needs
/// human confirmation.
const FALLBACK_CONFIDENCE: f32 = 0.3;

/// First ladder category with a case-insensitive keyword hit, or `None`.
pub fn detect_incident_type(text: &str) -> Option<IncidentType> {
    let lower = text.to_lowercase();
    TYPE_LADDER
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.incident_type)
}

/// Type detection with confidence: 0.8 on a hit, 0.3 floor otherwise.
pub fn detect_incident_type_with_confidence(text: &str) -> IncidentTypeResult {
    match detect_incident_type(text) {
        Some(incident_type) => IncidentTypeResult {
            incident_type: Some(incident_type),
            confidence: CRISP_CONFIDENCE,
        },
        None => IncidentTypeResult {
            incident_type: None,
            confidence: FALLBACK_CONFIDENCE,
        },
    }
}

/// Every matching category, ranked by confidence descending.
///
/// Confidence grows with keyword-hit density but is clamped to a running
/// envelope over ladder order, so the top entry always agrees with
/// [`detect_incident_type`] and the array is descending by construction.
pub fn get_all_incident_type_matches(text: &str) -> Vec<IncidentTypeMatch> {
    let lower = text.to_lowercase();
    let mut matches = Vec::new();
    let mut envelope = 1.0_f32;

    for rule in TYPE_LADDER.iter() {
        let hits = rule
            .keywords
            .iter()
            .filter(|k| lower.contains(*k))
            .count();
        if hits == 0 {
            continue;
        }
        let density = hits as f32 / rule.keywords.len() as f32;
        let confidence = (CRISP_CONFIDENCE + 0.15 * density).min(0.95).min(envelope);
        envelope = confidence;
        matches.push(IncidentTypeMatch {
            incident_type: rule.incident_type,
            confidence,
        });
    }

    matches
}

/// Softer, intentionally overlapping suggestions for human review.
///
/// Whole semantic clusters are offered whenever any of their trigger words
/// appears, independent of which category won, so a reviewer can correct a
/// misclassification without re-typing.
pub fn get_alternative_incident_types(text: &str) -> Vec<IncidentType> {
    let lower = text.to_lowercase();
    let mut suggestions = Vec::new();

    for (triggers, types) in ALTERNATIVE_CLUSTERS {
        if triggers.iter().any(|t| lower.contains(t)) {
            for t in *types {
                if !suggestions.contains(t) {
                    suggestions.push(*t);
                }
            }
        }
    }

    suggestions
}
