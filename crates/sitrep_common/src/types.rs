//! Shared types for the incident signal extraction engine.
//!
//! Two closed vocabularies live here: the four-level [`Priority`] scale and
//! the control-room [`IncidentType`] catalogue. Every detector draws its
//! labels from these enums; no detector may invent a new label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Priority
// ============================================================================

/// Incident priority level, ordered by severity.
///
/// Derived `Ord` follows declaration order (`Low < Medium < High < Urgent`),
/// which is what severity tie-breaking relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All levels, most severe first (scoring iterates in this order).
    pub const ALL: [Priority; 4] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Integer weight used in keyword voting: urgent=4 .. low=1.
    pub fn weight(self) -> u32 {
        match self {
            Priority::Urgent => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urgent" => Ok(Priority::Urgent),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("unknown priority level: {}", other)),
        }
    }
}

// ============================================================================
// Incident type vocabulary
// ============================================================================

/// Closed set of incident type labels used across the whole engine.
///
/// Both classifiers (the severity ladder and the quick rule table) and the
/// priority bounds table key off this one enum, so the vocabularies can
/// never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentType {
    // Safety-critical
    #[serde(rename = "Fire")]
    Fire,
    #[serde(rename = "Suspected Fire")]
    SuspectedFire,
    #[serde(rename = "Fire Alarm")]
    FireAlarm,
    #[serde(rename = "Evacuation")]
    Evacuation,
    #[serde(rename = "Weapon Related")]
    WeaponRelated,
    #[serde(rename = "Counter-Terror Alert")]
    CounterTerrorAlert,
    #[serde(rename = "Hostile Act")]
    HostileAct,
    #[serde(rename = "Emergency Show Stop")]
    EmergencyShowStop,
    #[serde(rename = "Structural Issue")]
    StructuralIssue,
    #[serde(rename = "Power Failure")]
    PowerFailure,

    // Medical / welfare
    #[serde(rename = "Medical")]
    Medical,
    #[serde(rename = "Welfare")]
    Welfare,
    #[serde(rename = "Mental Health Concern")]
    MentalHealthConcern,
    #[serde(rename = "Missing Person")]
    MissingPerson,
    #[serde(rename = "Found Person")]
    FoundPerson,
    #[serde(rename = "Sexual Misconduct")]
    SexualMisconduct,
    #[serde(rename = "Drug Related")]
    DrugRelated,
    #[serde(rename = "Alcohol Related")]
    AlcoholRelated,

    // Security / crowd
    #[serde(rename = "Fight")]
    Fight,
    #[serde(rename = "Ejection")]
    Ejection,
    #[serde(rename = "Refusal")]
    Refusal,
    #[serde(rename = "Theft")]
    Theft,
    #[serde(rename = "Criminal Damage")]
    CriminalDamage,
    #[serde(rename = "Suspicious Behaviour")]
    SuspiciousBehaviour,
    #[serde(rename = "Security Breach")]
    SecurityBreach,
    #[serde(rename = "Crowd Management")]
    CrowdManagement,
    #[serde(rename = "Queue Build-Up")]
    QueueBuildUp,
    #[serde(rename = "Noise Complaint")]
    NoiseComplaint,

    // Operational
    #[serde(rename = "Attendance")]
    Attendance,
    #[serde(rename = "Sit Rep")]
    SitRep,
    #[serde(rename = "Event Timing")]
    EventTiming,
    #[serde(rename = "Timings")]
    Timings,
    #[serde(rename = "Artist On Stage")]
    ArtistOnStage,
    #[serde(rename = "Artist Off Stage")]
    ArtistOffStage,
    #[serde(rename = "Artist Movement")]
    ArtistMovement,
    #[serde(rename = "Radio Check")]
    RadioCheck,
    #[serde(rename = "Lost Property")]
    LostProperty,
    #[serde(rename = "Found Property")]
    FoundProperty,
    #[serde(rename = "Technical Issue")]
    TechnicalIssue,
    #[serde(rename = "Site Issue")]
    SiteIssue,
    #[serde(rename = "Equipment Failure")]
    EquipmentFailure,
    #[serde(rename = "Weather")]
    Weather,
    #[serde(rename = "Traffic Management")]
    TrafficManagement,
    #[serde(rename = "Parking")]
    Parking,
    #[serde(rename = "Accessibility")]
    Accessibility,
    #[serde(rename = "Animal Incident")]
    AnimalIncident,
    #[serde(rename = "Staffing")]
    Staffing,
    #[serde(rename = "Accreditation")]
    Accreditation,
}

impl IncidentType {
    /// Every label in the vocabulary.
    pub const ALL: [IncidentType; 48] = [
        IncidentType::Fire,
        IncidentType::SuspectedFire,
        IncidentType::FireAlarm,
        IncidentType::Evacuation,
        IncidentType::WeaponRelated,
        IncidentType::CounterTerrorAlert,
        IncidentType::HostileAct,
        IncidentType::EmergencyShowStop,
        IncidentType::StructuralIssue,
        IncidentType::PowerFailure,
        IncidentType::Medical,
        IncidentType::Welfare,
        IncidentType::MentalHealthConcern,
        IncidentType::MissingPerson,
        IncidentType::FoundPerson,
        IncidentType::SexualMisconduct,
        IncidentType::DrugRelated,
        IncidentType::AlcoholRelated,
        IncidentType::Fight,
        IncidentType::Ejection,
        IncidentType::Refusal,
        IncidentType::Theft,
        IncidentType::CriminalDamage,
        IncidentType::SuspiciousBehaviour,
        IncidentType::SecurityBreach,
        IncidentType::CrowdManagement,
        IncidentType::QueueBuildUp,
        IncidentType::NoiseComplaint,
        IncidentType::Attendance,
        IncidentType::SitRep,
        IncidentType::EventTiming,
        IncidentType::Timings,
        IncidentType::ArtistOnStage,
        IncidentType::ArtistOffStage,
        IncidentType::ArtistMovement,
        IncidentType::RadioCheck,
        IncidentType::LostProperty,
        IncidentType::FoundProperty,
        IncidentType::TechnicalIssue,
        IncidentType::SiteIssue,
        IncidentType::EquipmentFailure,
        IncidentType::Weather,
        IncidentType::TrafficManagement,
        IncidentType::Parking,
        IncidentType::Accessibility,
        IncidentType::AnimalIncident,
        IncidentType::Staffing,
        IncidentType::Accreditation,
    ];

    /// Human-readable label, as stored on incident records.
    pub fn label(self) -> &'static str {
        match self {
            IncidentType::Fire => "Fire",
            IncidentType::SuspectedFire => "Suspected Fire",
            IncidentType::FireAlarm => "Fire Alarm",
            IncidentType::Evacuation => "Evacuation",
            IncidentType::WeaponRelated => "Weapon Related",
            IncidentType::CounterTerrorAlert => "Counter-Terror Alert",
            IncidentType::HostileAct => "Hostile Act",
            IncidentType::EmergencyShowStop => "Emergency Show Stop",
            IncidentType::StructuralIssue => "Structural Issue",
            IncidentType::PowerFailure => "Power Failure",
            IncidentType::Medical => "Medical",
            IncidentType::Welfare => "Welfare",
            IncidentType::MentalHealthConcern => "Mental Health Concern",
            IncidentType::MissingPerson => "Missing Person",
            IncidentType::FoundPerson => "Found Person",
            IncidentType::SexualMisconduct => "Sexual Misconduct",
            IncidentType::DrugRelated => "Drug Related",
            IncidentType::AlcoholRelated => "Alcohol Related",
            IncidentType::Fight => "Fight",
            IncidentType::Ejection => "Ejection",
            IncidentType::Refusal => "Refusal",
            IncidentType::Theft => "Theft",
            IncidentType::CriminalDamage => "Criminal Damage",
            IncidentType::SuspiciousBehaviour => "Suspicious Behaviour",
            IncidentType::SecurityBreach => "Security Breach",
            IncidentType::CrowdManagement => "Crowd Management",
            IncidentType::QueueBuildUp => "Queue Build-Up",
            IncidentType::NoiseComplaint => "Noise Complaint",
            IncidentType::Attendance => "Attendance",
            IncidentType::SitRep => "Sit Rep",
            IncidentType::EventTiming => "Event Timing",
            IncidentType::Timings => "Timings",
            IncidentType::ArtistOnStage => "Artist On Stage",
            IncidentType::ArtistOffStage => "Artist Off Stage",
            IncidentType::ArtistMovement => "Artist Movement",
            IncidentType::RadioCheck => "Radio Check",
            IncidentType::LostProperty => "Lost Property",
            IncidentType::FoundProperty => "Found Property",
            IncidentType::TechnicalIssue => "Technical Issue",
            IncidentType::SiteIssue => "Site Issue",
            IncidentType::EquipmentFailure => "Equipment Failure",
            IncidentType::Weather => "Weather",
            IncidentType::TrafficManagement => "Traffic Management",
            IncidentType::Parking => "Parking",
            IncidentType::Accessibility => "Accessibility",
            IncidentType::AnimalIncident => "Animal Incident",
            IncidentType::Staffing => "Staffing",
            IncidentType::Accreditation => "Accreditation",
        }
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for IncidentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        IncidentType::ALL
            .iter()
            .find(|t| t.label().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| format!("unknown incident type: {}", trimmed))
    }
}

// ============================================================================
// Detection results
// ============================================================================

/// A detected callsign with a heuristic confidence in [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallsignMatch {
    pub callsign: String,
    pub confidence: f32,
}

/// Incident type detection result. `incident_type` is `None` when no rule
/// matched; the confidence then sits at the 0.3 fallback floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTypeResult {
    pub incident_type: Option<IncidentType>,
    pub confidence: f32,
}

/// One candidate incident type with its ranking confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTypeMatch {
    pub incident_type: IncidentType,
    pub confidence: f32,
}

/// Full priority decision with an audit trail.
///
/// `signals` lists every keyword, bound, and boost that contributed;
/// `reasoning` names the factor that decided the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityResult {
    pub priority: Priority,
    pub confidence: f32,
    pub signals: Vec<String>,
    pub reasoning: String,
}

/// Slim priority + confidence pair for callers that do not need the trail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityConfidence {
    pub priority: Priority,
    pub confidence: f32,
}

/// Combined output of the quick classifier. All fields `None` means
/// "no classification available" and callers fall back to their own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentDetection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_type: Option<IncidentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl IncidentDetection {
    /// True when nothing was classified.
    pub fn is_empty(&self) -> bool {
        self.incident_type.is_none() && self.occurrence.is_none() && self.priority.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Urgent > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_priority_weights_monotonic() {
        assert_eq!(Priority::Urgent.weight(), 4);
        assert_eq!(Priority::High.weight(), 3);
        assert_eq!(Priority::Medium.weight(), 2);
        assert_eq!(Priority::Low.weight(), 1);
    }

    #[test]
    fn test_priority_roundtrip() {
        for p in Priority::ALL {
            assert_eq!(p.to_string().parse::<Priority>().unwrap(), p);
        }
    }

    #[test]
    fn test_priority_serde_lowercase() {
        let json = serde_json::to_string(&Priority::Urgent).unwrap();
        assert_eq!(json, "\"urgent\"");
    }

    #[test]
    fn test_incident_type_labels_unique() {
        let mut labels: Vec<&str> = IncidentType::ALL.iter().map(|t| t.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), IncidentType::ALL.len());
    }

    #[test]
    fn test_incident_type_roundtrip() {
        for t in IncidentType::ALL {
            assert_eq!(t.label().parse::<IncidentType>().unwrap(), t);
        }
        // Case-insensitive parse
        assert_eq!(
            "weapon related".parse::<IncidentType>().unwrap(),
            IncidentType::WeaponRelated
        );
    }

    #[test]
    fn test_incident_type_serde_uses_label() {
        let json = serde_json::to_string(&IncidentType::CounterTerrorAlert).unwrap();
        assert_eq!(json, "\"Counter-Terror Alert\"");
    }

    #[test]
    fn test_empty_detection() {
        let d = IncidentDetection::default();
        assert!(d.is_empty());
        assert_eq!(serde_json::to_string(&d).unwrap(), "{}");
    }
}
