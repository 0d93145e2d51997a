//! Quick incident classification for as-you-type feedback.
//!
//! A single coarse rule table, strict first-match-wins over explicit ranks.
//! Intentionally simpler and faster than the severity ladder in
//! [`crate::incident_type`]: this is the instant first pass, the ladder and
//! priority scorer are the confidence-scored second pass.

use crate::patterns::{NUMERIC_TOKEN, QUICK_RULES};
use crate::types::{IncidentDetection, IncidentType};
use tracing::debug;

/// Classify a report in one pass: incident type, normalized occurrence
/// text, and the type's fixed priority when it has one.
///
/// No table entry matching yields the empty default; callers treat that as
/// "no classification available" and fall back to their own defaults.
pub fn detect_incident_from_text(text: &str) -> IncidentDetection {
    let lower = text.to_lowercase();

    for rule in QUICK_RULES.iter() {
        if rule.keywords.iter().any(|k| lower.contains(k)) {
            let occurrence = if rule.incident_type == IncidentType::Attendance {
                attendance_occurrence(text)
            } else {
                text.to_string()
            };
            debug!(
                incident_type = %rule.incident_type,
                rank = rule.rank,
                "quick classification matched"
            );
            return IncidentDetection {
                incident_type: Some(rule.incident_type),
                occurrence: Some(occurrence),
                priority: rule.priority,
            };
        }
    }

    IncidentDetection::default()
}

/// Canonical attendance occurrence: first numeric token with grouping
/// separators stripped, or the raw text verbatim when no number is present.
fn attendance_occurrence(text: &str) -> String {
    match NUMERIC_TOKEN.find(text) {
        Some(m) => format!("Current Attendance: {}", m.as_str().replace(',', "")),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    #[test]
    fn test_attendance_with_grouped_number() {
        let result = detect_incident_from_text("Current attendance: 3,500");
        assert_eq!(result.incident_type, Some(IncidentType::Attendance));
        assert_eq!(result.occurrence.as_deref(), Some("Current Attendance: 3500"));
        assert_eq!(result.priority, Some(Priority::Low));
    }

    #[test]
    fn test_attendance_with_plain_number() {
        let result = detect_incident_from_text("headcount now 12000 on site");
        assert_eq!(result.incident_type, Some(IncidentType::Attendance));
        assert_eq!(
            result.occurrence.as_deref(),
            Some("Current Attendance: 12000")
        );
    }

    #[test]
    fn test_attendance_without_number_falls_back_to_raw() {
        let raw = "attendance figures to follow";
        let result = detect_incident_from_text(raw);
        assert_eq!(result.incident_type, Some(IncidentType::Attendance));
        assert_eq!(result.occurrence.as_deref(), Some(raw));
    }

    #[test]
    fn test_other_types_keep_raw_occurrence() {
        let raw = "fight near bar 3, security responding";
        let result = detect_incident_from_text(raw);
        assert_eq!(result.incident_type, Some(IncidentType::Fight));
        assert_eq!(result.occurrence.as_deref(), Some(raw));
        assert_eq!(result.priority, Some(Priority::High));
    }

    #[test]
    fn test_fixed_priority_overrides() {
        let result = detect_incident_from_text("weapon seen at north gate");
        assert_eq!(result.incident_type, Some(IncidentType::WeaponRelated));
        assert_eq!(result.priority, Some(Priority::Urgent));
    }

    #[test]
    fn test_no_match_returns_empty() {
        let result = detect_incident_from_text("completely unrelated text");
        assert!(result.is_empty());
        assert!(detect_incident_from_text("").is_empty());
    }

    #[test]
    fn test_first_match_wins_by_rank() {
        // Attendance (rank 10) outranks sit rep (rank 20) in the quick table
        let result = detect_incident_from_text("sit rep: attendance steady, all quiet");
        assert_eq!(result.incident_type, Some(IncidentType::Attendance));
    }
}
