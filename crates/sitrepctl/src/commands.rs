//! Command handlers for sitrepctl.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use serde_json::json;
use sitrep_common::{
    detect_callsign_with_confidence, detect_incident_from_text, detect_incident_type_with_confidence,
    detect_priority_optimized, extract_all_callsigns, get_alternative_incident_types, patterns,
    IncidentType, Priority,
};

/// Full classification pass over one report.
pub fn classify(text: &str, json_output: bool) -> Result<()> {
    let quick = detect_incident_from_text(text);
    let callsign = detect_callsign_with_confidence(text);
    let typed = detect_incident_type_with_confidence(text);
    let alternatives = get_alternative_incident_types(text);
    let priority = detect_priority_optimized(text, typed.incident_type);

    if json_output {
        let payload = json!({
            "quick": quick,
            "callsign": callsign,
            "incident_type": typed,
            "alternatives": alternatives,
            "priority": priority,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", "Classification".bold());
    match &callsign {
        Some(m) => println!(
            "  callsign:  {} (confidence {:.2})",
            m.callsign.cyan(),
            m.confidence
        ),
        None => println!("  callsign:  {}", "none".dimmed()),
    }
    match typed.incident_type {
        Some(t) => println!(
            "  type:      {} (confidence {:.2})",
            t.to_string().cyan(),
            typed.confidence
        ),
        None => println!(
            "  type:      {} (confidence {:.2})",
            "undetermined".dimmed(),
            typed.confidence
        ),
    }
    println!(
        "  priority:  {} (confidence {:.2})",
        colored_priority(priority.priority),
        priority.confidence
    );
    println!("  reasoning: {}", priority.reasoning);
    if !priority.signals.is_empty() {
        println!("  signals:   {}", priority.signals.join(", ").dimmed());
    }
    if !alternatives.is_empty() {
        let labels: Vec<&str> = alternatives.iter().map(|t| t.label()).collect();
        println!("  consider:  {}", labels.join(", "));
    }
    if let Some(occurrence) = &quick.occurrence {
        println!("  occurrence: {}", occurrence);
    }

    Ok(())
}

/// Detect one or all callsigns in a report.
pub fn callsign(text: &str, all: bool) -> Result<()> {
    if all {
        let found = extract_all_callsigns(text);
        if found.is_empty() {
            println!("{}", "no callsigns found".dimmed());
        } else {
            for c in found {
                println!("{}", c.cyan());
            }
        }
        return Ok(());
    }

    match detect_callsign_with_confidence(text) {
        Some(m) => println!("{} (confidence {:.2})", m.callsign.cyan(), m.confidence),
        None => println!("{}", "no callsign found".dimmed()),
    }
    Ok(())
}

/// Score priority, optionally with an incident type hint.
pub fn priority(text: &str, incident_type: Option<&str>, json_output: bool) -> Result<()> {
    let hint = match incident_type {
        Some(label) => match label.parse::<IncidentType>() {
            Ok(t) => Some(t),
            Err(e) => bail!("{e} (see `sitrepctl types` for the vocabulary)"),
        },
        None => None,
    };

    let result = detect_priority_optimized(text, hint);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} (confidence {:.2})",
        colored_priority(result.priority),
        result.confidence
    );
    println!("reasoning: {}", result.reasoning);
    if !result.signals.is_empty() {
        println!("signals:   {}", result.signals.join(", ").dimmed());
    }
    Ok(())
}

/// Print the closed incident type vocabulary with priority bounds.
pub fn types() -> Result<()> {
    for incident_type in IncidentType::ALL {
        let bounds = patterns::priority_bounds(incident_type);
        let mut notes = Vec::new();
        if let Some(floor) = bounds.floor {
            notes.push(format!("floor {}", floor));
        }
        if let Some(ceiling) = bounds.ceiling {
            notes.push(format!("ceiling {}", ceiling));
        }
        if notes.is_empty() {
            println!("{}", incident_type.label());
        } else {
            println!(
                "{} {}",
                incident_type.label(),
                format!("({})", notes.join(", ")).dimmed()
            );
        }
    }
    Ok(())
}

/// Validate the built-in rule tables.
pub fn check() -> Result<()> {
    match patterns::validate() {
        Ok(()) => {
            println!("{} rule tables valid", "ok:".green().bold());
            Ok(())
        }
        Err(e) => bail!("rule table validation failed: {e}"),
    }
}

fn colored_priority(priority: Priority) -> String {
    match priority {
        Priority::Urgent => priority.to_string().red().bold().to_string(),
        Priority::High => priority.to_string().yellow().bold().to_string(),
        Priority::Medium => priority.to_string().white().to_string(),
        Priority::Low => priority.to_string().green().to_string(),
    }
}
