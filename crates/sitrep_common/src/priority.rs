//! Priority scoring via weighted keyword voting.
//!
//! Each level owns a keyword list and an integer weight (urgent=4 .. low=1);
//! the highest weighted hit-count wins, ties break toward severity. An
//! incident type hint can raise the result (floor) or, for operational log
//! types, force it low regardless of keyword content.

use crate::patterns::{level_keywords, priority_bounds, QUANTITY_SIGNAL, TEMPORAL_SIGNAL};
use crate::types::{IncidentType, Priority, PriorityConfidence, PriorityResult};
use tracing::debug;

/// Detect the priority level for a report. Absence of signal yields
/// `Medium`: an under-described incident is never silently deprioritized.
pub fn detect_priority(text: &str, incident_type: Option<IncidentType>) -> Priority {
    detect_priority_optimized(text, incident_type).priority
}

/// Priority plus confidence, without a type hint.
pub fn detect_priority_with_confidence(text: &str) -> PriorityConfidence {
    let result = detect_priority_optimized(text, None);
    PriorityConfidence {
        priority: result.priority,
        confidence: result.confidence,
    }
}

/// Full priority decision with signal and reasoning trail for audit logs.
pub fn detect_priority_optimized(
    text: &str,
    incident_type: Option<IncidentType>,
) -> PriorityResult {
    let lower = text.to_lowercase();
    let mut signals = Vec::new();

    // Keyword voting: hits * level weight, most severe level first so an
    // exact score tie resolves toward severity.
    let mut winner: Option<(Priority, usize, u32)> = None;
    for level in Priority::ALL {
        let hits: Vec<&str> = level_keywords(level)
            .iter()
            .filter(|k| lower.contains(*k))
            .copied()
            .collect();
        if hits.is_empty() {
            continue;
        }
        let score = hits.len() as u32 * level.weight();
        for hit in &hits {
            signals.push(format!("{}:{}", level, hit));
        }
        if winner.map_or(true, |(_, _, best)| score > best) {
            winner = Some((level, hits.len(), score));
        }
    }

    let bounds = incident_type.map(priority_bounds).unwrap_or_default();

    // Operational ceiling overrides keyword scoring entirely: routine logs
    // are never escalated by incidental urgent-sounding words.
    if let (Some(ceiling), Some(hinted)) = (bounds.ceiling, incident_type) {
        signals.push(format!("ceiling:{}", hinted));
        let result = PriorityResult {
            priority: ceiling,
            confidence: apply_boosts(0.9, &lower, &mut signals).0,
            signals,
            reasoning: format!(
                "operational incident type {} forces {} priority",
                hinted, ceiling
            ),
        };
        debug!(priority = %result.priority, "priority decided by type ceiling");
        return result;
    }

    let (priority, base_confidence, mut reasoning) = match (winner, bounds.floor) {
        (Some((level, _, _)), Some(floor)) if floor > level => {
            if let Some(hinted) = incident_type {
                signals.push(format!("floor:{}", hinted));
            }
            (
                floor,
                0.75,
                format!(
                    "incident type floor raised priority from {} to {}",
                    level, floor
                ),
            )
        }
        (Some((level, hits, _)), _) => (
            level,
            (0.55 + 0.08 * hits as f32).min(0.85),
            format!("matched {} {} keyword(s)", hits, level),
        ),
        (None, Some(floor)) => {
            if let Some(hinted) = incident_type {
                signals.push(format!("floor:{}", hinted));
            }
            (
                floor,
                0.7,
                format!("incident type floor applied: {}", floor),
            )
        }
        (None, None) => (
            Priority::Medium,
            0.4,
            "no priority keywords matched; defaulting to medium".to_string(),
        ),
    };

    let (confidence, boost_notes) = apply_boosts(base_confidence, &lower, &mut signals);
    if !boost_notes.is_empty() {
        reasoning.push_str("; ");
        reasoning.push_str(&boost_notes.join("; "));
    }

    debug!(priority = %priority, confidence, "priority decided");
    PriorityResult {
        priority,
        confidence,
        signals,
        reasoning,
    }
}

/// Quantity and temporal-urgency boosts. Confidence only; the level never
/// changes here.
fn apply_boosts(base: f32, lower: &str, signals: &mut Vec<String>) -> (f32, Vec<String>) {
    let mut confidence = base;
    let mut notes = Vec::new();

    if QUANTITY_SIGNAL.is_match(lower) {
        confidence += 0.05;
        signals.push("boost:quantity".to_string());
        notes.push("boosted by quantity signal".to_string());
    }
    if TEMPORAL_SIGNAL.is_match(lower) {
        confidence += 0.05;
        signals.push("boost:temporal".to_string());
        notes.push("boosted by temporal urgency".to_string());
    }

    (confidence.clamp(0.0, 1.0), notes)
}
