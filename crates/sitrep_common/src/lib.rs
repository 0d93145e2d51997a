//! Sitrep Common - rule-based incident signal extraction.
//!
//! Converts free-text radio/incident reports into structured fields: a
//! callsign, an incident type, and a priority level, each with a confidence
//! score. Purely deterministic keyword/pattern rules; no model, no I/O, no
//! state beyond the immutable pattern library. Identical input always yields
//! identical output, from any thread.

pub mod callsign;
pub mod incident_logic;
pub mod incident_type;
pub mod patterns;
pub mod priority;
pub mod types;

pub use callsign::{
    detect_callsign, detect_callsign_with_confidence, extract_all_callsigns, normalize_callsign,
};
pub use incident_logic::detect_incident_from_text;
pub use incident_type::{
    detect_incident_type, detect_incident_type_with_confidence, get_all_incident_type_matches,
    get_alternative_incident_types,
};
pub use priority::{detect_priority, detect_priority_optimized, detect_priority_with_confidence};
pub use types::{
    CallsignMatch, IncidentDetection, IncidentType, IncidentTypeMatch, IncidentTypeResult,
    Priority, PriorityConfidence, PriorityResult,
};
