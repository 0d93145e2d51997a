//! End-to-end scenario tests for the signal extraction engine.
//!
//! Full radio-style reports run through every detector the way the
//! quick-add and voice-transcript callers do.

use sitrep_common::{
    detect_callsign, detect_callsign_with_confidence, detect_incident_from_text,
    detect_incident_type, detect_priority, detect_priority_optimized, extract_all_callsigns,
    get_all_incident_type_matches, normalize_callsign, patterns, IncidentType, Priority,
};

#[test]
fn test_rule_tables_are_consistent() {
    patterns::validate().expect("shipped rule tables must validate");
}

#[test]
fn test_scenario_medical_collapse() {
    let report = "Medical incident at main stage, female collapsed and not breathing, reported by S1";

    assert_eq!(detect_callsign(report), "S1");
    assert_eq!(detect_incident_type(report), Some(IncidentType::Medical));
    assert_eq!(
        detect_priority(report, Some(IncidentType::Medical)),
        Priority::Urgent
    );
    // Urgent comes from keywords, not the Medical floor
    assert_eq!(detect_priority(report, None), Priority::Urgent);
}

#[test]
fn test_scenario_fight_with_backup() {
    let report = "Fight broke out near Bar 3, multiple people involved, Security 5 requesting backup";

    assert_eq!(detect_callsign(report), "S5");
    assert_eq!(detect_incident_type(report), Some(IncidentType::Fight));
    assert_eq!(detect_priority(report, None), Priority::High);
}

#[test]
fn test_scenario_sit_rep_from_alpha_two() {
    let report = "Situation report from Alpha 2: current attendance 3500, all quiet, artist on stage";

    assert_eq!(detect_callsign(report), "A2");
    assert_eq!(detect_priority(report, None), Priority::Low);

    let matches = get_all_incident_type_matches(report);
    assert!(
        matches
            .iter()
            .any(|m| m.incident_type == IncidentType::Attendance),
        "Attendance should be among the candidates"
    );
}

#[test]
fn test_empty_input_yields_no_signal_everywhere() {
    assert_eq!(detect_callsign(""), "");
    assert!(detect_callsign_with_confidence("").is_none());
    assert!(extract_all_callsigns("").is_empty());
    assert_eq!(detect_incident_type(""), None);
    assert!(get_all_incident_type_matches("").is_empty());
    assert_eq!(detect_priority("", None), Priority::Medium);
    assert!(detect_incident_from_text("").is_empty());
}

#[test]
fn test_adversarial_input_never_panics() {
    let inputs = [
        "!!!@@@###".to_string(),
        "\u{0}\u{1}\u{2}".to_string(),
        "日本語のレポート、緊急ではない".to_string(),
        "x".repeat(100_000),
        "3,500 3,500 3,500".to_string(),
    ];
    for input in &inputs {
        let _ = detect_callsign(input);
        let _ = detect_incident_type(input);
        let p = detect_priority(input, None);
        assert!(Priority::ALL.contains(&p));
        let _ = detect_incident_from_text(input);
    }
}

#[test]
fn test_callsign_shape_invariant_over_corpus() {
    let corpus = [
        "S1 responding to gate 4",
        "sierra 12 on scene",
        "Security 99 to control",
        "event control acknowledge",
        "crowd building at the arch",
        "AB12 and R4 both attending",
    ];
    for report in corpus {
        for callsign in extract_all_callsigns(report) {
            let standard = callsign.len() >= 2
                && callsign
                    .chars()
                    .take_while(|c| c.is_ascii_uppercase())
                    .count()
                    >= 1
                && callsign
                    .chars()
                    .take_while(|c| c.is_ascii_uppercase())
                    .count()
                    <= 2
                && callsign
                    .chars()
                    .skip_while(|c| c.is_ascii_uppercase())
                    .all(|c| c.is_ascii_digit());
            assert!(
                standard || callsign == "Control",
                "unexpected callsign shape: {callsign:?} from {report:?}"
            );
        }
    }
}

#[test]
fn test_normalize_is_idempotent_over_corpus() {
    let raws = [
        "s1", "S-1", "ab/12", "sierra 7", "SIERRA7", "control", "Event Control", "gate team",
        "", "123", "???",
    ];
    for raw in raws {
        let once = normalize_callsign(raw);
        let twice = normalize_callsign(&once);
        assert_eq!(once, twice, "normalize not idempotent for {raw:?}");
    }
}

#[test]
fn test_type_floor_and_ceiling_dominance() {
    assert_eq!(
        detect_priority("mild inconvenience", Some(IncidentType::Fire)),
        Priority::Urgent
    );
    assert_eq!(
        detect_priority("URGENT URGENT ASAP", Some(IncidentType::Attendance)),
        Priority::Low
    );
}

#[test]
fn test_floor_never_above_ceiling_for_any_type() {
    for incident_type in IncidentType::ALL {
        let bounds = patterns::priority_bounds(incident_type);
        if let (Some(floor), Some(ceiling)) = (bounds.floor, bounds.ceiling) {
            assert!(floor <= ceiling, "contradictory bounds for {incident_type}");
        }
    }
}

#[test]
fn test_attendance_roundtrip_normalization() {
    let result = detect_incident_from_text("Current attendance: 3,500");
    assert_eq!(result.occurrence.as_deref(), Some("Current Attendance: 3500"));
}

#[test]
fn test_all_matches_ordering_agrees_with_detection() {
    let corpus = [
        "medical and crowd issues at once",
        "smoke near the food court",
        "queue at gate 2, welfare concern",
        "quiet shift, nothing to report",
        "attendance 9,000 and rising",
    ];
    for report in corpus {
        let matches = get_all_incident_type_matches(report);
        for pair in matches.windows(2) {
            assert!(
                pair[0].confidence >= pair[1].confidence,
                "not descending for {report:?}"
            );
        }
        match detect_incident_type(report) {
            Some(t) => assert_eq!(matches[0].incident_type, t),
            None => assert!(matches.is_empty()),
        }
    }
}

#[test]
fn test_confidence_always_in_unit_interval() {
    let corpus = [
        "",
        "weapon drawn, evacuate now, 30 people at risk",
        "radio check",
        "suspicious bag unattended, asap",
    ];
    for report in corpus {
        if let Some(m) = detect_callsign_with_confidence(report) {
            assert!((0.0..=1.0).contains(&m.confidence));
        }
        let r = detect_priority_optimized(report, None);
        assert!((0.0..=1.0).contains(&r.confidence));
        for m in get_all_incident_type_matches(report) {
            assert!((0.0..=1.0).contains(&m.confidence));
        }
    }
}

#[test]
fn test_quick_and_ladder_share_one_vocabulary() {
    // Every label either classifier can emit parses back into the shared enum.
    for rule in patterns::TYPE_LADDER.iter() {
        let label = rule.incident_type.label();
        assert_eq!(label.parse::<IncidentType>().unwrap(), rule.incident_type);
    }
    for rule in patterns::QUICK_RULES.iter() {
        let label = rule.incident_type.label();
        assert_eq!(label.parse::<IncidentType>().unwrap(), rule.incident_type);
    }
}

#[test]
fn test_deterministic_across_calls() {
    let report = "Fight near bar 3, Security 5 requesting backup asap";
    let first = (
        detect_callsign(report),
        detect_incident_type(report),
        detect_priority_optimized(report, None),
        detect_incident_from_text(report),
    );
    for _ in 0..3 {
        let again = (
            detect_callsign(report),
            detect_incident_type(report),
            detect_priority_optimized(report, None),
            detect_incident_from_text(report),
        );
        assert_eq!(first, again);
    }
}
