//! Pattern library - pure data behind every detector.
//!
//! Keyword tables, callsign regexes, the severity-ordered type ladder, the
//! quick classification table, and per-type priority bounds all live here.
//! Everything is initialized once and immutable afterwards, so concurrent
//! callers never need a lock.
//!
//! Precedence is always an explicit `rank` field sorted at load time;
//! reordering a source array can never silently change behavior.

use crate::types::{IncidentType, Priority};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// ============================================================================
// Rule records
// ============================================================================

/// One entry in the severity-ordered type ladder. Lower rank is checked
/// first, so safety-critical categories outrank operational ones.
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    pub incident_type: IncidentType,
    pub rank: u32,
    pub keywords: &'static [&'static str],
}

/// One entry in the quick classification table: coarser keywords plus an
/// optional fixed priority for the matched type.
#[derive(Debug, Clone, Copy)]
pub struct QuickRule {
    pub incident_type: IncidentType,
    pub rank: u32,
    pub keywords: &'static [&'static str],
    pub priority: Option<Priority>,
}

/// Priority bounds implied by an incident type. A `floor` raises weak
/// keyword signal; a `Low` ceiling marks an operational type whose logs are
/// never escalated by incidental urgent-sounding words.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityBounds {
    pub floor: Option<Priority>,
    pub ceiling: Option<Priority>,
}

/// Rule table misconfiguration found by [`validate`].
#[derive(Debug, Error)]
pub enum RuleConfigError {
    #[error("duplicate rank {rank} in {table} table")]
    DuplicateRank { table: &'static str, rank: u32 },
    #[error("empty keyword list for {0}")]
    EmptyKeywords(IncidentType),
    #[error("keyword '{keyword}' for {incident_type} is not lowercase")]
    NonLowercaseKeyword {
        incident_type: IncidentType,
        keyword: &'static str,
    },
    #[error("{0} has priority floor {1} above ceiling {2}")]
    FloorAboveCeiling(IncidentType, Priority, Priority),
}

// ============================================================================
// Callsign patterns
// ============================================================================

/// Standard alphanumeric callsign: 1-2 uppercase letters immediately
/// followed by digits, optionally split by a dash or slash (S1, AB12, S-1).
pub static STANDARD_CALLSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{1,2})[-/]?(\d+)\b").unwrap());

/// NATO phonetic word followed by a number (Sierra 12, alpha-2).
pub static NATO_CALLSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(alpha|bravo|charlie|delta|echo|foxtrot|golf|hotel|india|juliett|juliet|kilo|lima|mike|november|oscar|papa|quebec|romeo|sierra|tango|uniform|victor|whiskey|xray|x-ray|yankee|zulu)[ -]?(\d+)\b",
    )
    .unwrap()
});

/// Role word followed by a number (Security 5, medic 2).
pub static ROLE_CALLSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(security|sec|medical|medic|med|staff|manager|supervisor)\s*(\d+)\b")
        .unwrap()
});

/// Event Control / Control literal.
pub static CONTROL_CALLSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:event\s+)?control\b").unwrap());

/// NATO phonetic word to letter, for callsign normalization.
pub const NATO_ALPHABET: &[(&str, char)] = &[
    ("alpha", 'A'),
    ("bravo", 'B'),
    ("charlie", 'C'),
    ("delta", 'D'),
    ("echo", 'E'),
    ("foxtrot", 'F'),
    ("golf", 'G'),
    ("hotel", 'H'),
    ("india", 'I'),
    ("juliett", 'J'),
    ("juliet", 'J'),
    ("kilo", 'K'),
    ("lima", 'L'),
    ("mike", 'M'),
    ("november", 'N'),
    ("oscar", 'O'),
    ("papa", 'P'),
    ("quebec", 'Q'),
    ("romeo", 'R'),
    ("sierra", 'S'),
    ("tango", 'T'),
    ("uniform", 'U'),
    ("victor", 'V'),
    ("whiskey", 'W'),
    ("xray", 'X'),
    ("x-ray", 'X'),
    ("yankee", 'Y'),
    ("zulu", 'Z'),
];

/// Role word to single-letter callsign prefix.
pub const ROLE_PREFIXES: &[(&str, char)] = &[
    ("security", 'S'),
    ("sec", 'S'),
    ("medical", 'M'),
    ("medic", 'M'),
    ("med", 'M'),
    ("staff", 'S'),
    ("manager", 'M'),
    ("supervisor", 'M'),
];

/// Contextual cue phrases that mark a callsign as deliberately referenced
/// ("S1 reported the incident") rather than an incidental token.
pub const CALLSIGN_CONTEXT_CUES: &[&str] = &[
    "reported by",
    "reporting",
    "responding",
    "on scene",
    "this is",
    "from",
    "attending",
    "requesting",
    "at",
];

// ============================================================================
// Priority keywords
// ============================================================================

const URGENT_KEYWORDS: &[&str] = &[
    "not breathing",
    "unconscious",
    "unresponsive",
    "cardiac",
    "heart attack",
    "collapsed",
    "severe bleeding",
    "choking",
    "weapon",
    "knife",
    "gun",
    "explosion",
    "evacuate",
    "life threatening",
    "life-threatening",
    "crush",
    "cpr",
    "defib",
    "urgent",
    "emergency",
    "immediately",
    "asap",
];

const HIGH_KEYWORDS: &[&str] = &[
    "fight",
    "assault",
    "aggressive",
    "backup",
    "injury",
    "injured",
    "bleeding",
    "crowd surge",
    "distress",
    "threatening",
    "hostile",
    "missing child",
    "overdose",
    "seizure",
    "multiple people",
];

const MEDIUM_KEYWORDS: &[&str] = &[
    "complaint",
    "damage",
    "suspicious",
    "refused",
    "refusal",
    "intoxicated",
    "drunk",
    "theft",
    "stolen",
    "fault",
    "failure",
    "blocked",
];

const LOW_KEYWORDS: &[&str] = &[
    "routine",
    "patrol",
    "all quiet",
    "attendance",
    "sit rep",
    "sitrep",
    "situation report",
    "radio check",
    "artist on stage",
    "artist off stage",
    "timings",
    "doors open",
    "headcount",
    "litter",
    "lost property",
];

/// Keyword list owned by a priority level.
pub fn level_keywords(level: Priority) -> &'static [&'static str] {
    match level {
        Priority::Urgent => URGENT_KEYWORDS,
        Priority::High => HIGH_KEYWORDS,
        Priority::Medium => MEDIUM_KEYWORDS,
        Priority::Low => LOW_KEYWORDS,
    }
}

/// Numeric quantifier followed by a person noun ("15 people injured").
pub static QUANTITY_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d+\s+(?:people|persons|person|casualties|patients|males|females|children|kids|individuals)\b",
    )
    .unwrap()
});

/// Temporal urgency cue ("immediately", "asap", "right now").
pub static TEMPORAL_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:immediate(?:ly)?|urgent(?:ly)?|asap|right now|now|straight away)\b")
        .unwrap()
});

// ============================================================================
// Priority bounds per incident type
// ============================================================================

/// Priority bounds implied by an incident type.
///
/// Known-dangerous types establish a minimum; operational/log types carry a
/// `Low` ceiling that overrides keyword scoring entirely.
pub fn priority_bounds(incident_type: IncidentType) -> PriorityBounds {
    use IncidentType::*;
    match incident_type {
        Fire | Evacuation | WeaponRelated | HostileAct | CounterTerrorAlert
        | EmergencyShowStop => PriorityBounds {
            floor: Some(Priority::Urgent),
            ceiling: None,
        },
        Medical | Fight | SexualMisconduct | SuspectedFire | MissingPerson => PriorityBounds {
            floor: Some(Priority::High),
            ceiling: None,
        },
        Attendance | EventTiming | Timings | ArtistOnStage | ArtistOffStage | SitRep
        | RadioCheck | LostProperty | FoundProperty => PriorityBounds {
            floor: None,
            ceiling: Some(Priority::Low),
        },
        _ => PriorityBounds::default(),
    }
}

// ============================================================================
// Severity-ordered type ladder
// ============================================================================

const TYPE_LADDER_RAW: &[TypeRule] = &[
    // Safety-critical first. Specific fire categories outrank plain Fire so
    // "fire alarm sounding" does not classify as an active fire.
    TypeRule {
        incident_type: IncidentType::CounterTerrorAlert,
        rank: 10,
        keywords: &[
            "counter-terror",
            "counter terror",
            "terror alert",
            "suspect package",
            "suspicious package",
            "unattended package",
            "unattended bag",
            "suspicious item",
        ],
    },
    TypeRule {
        incident_type: IncidentType::WeaponRelated,
        rank: 20,
        keywords: &["weapon", "knife", "blade", "firearm", "gun", "machete"],
    },
    TypeRule {
        incident_type: IncidentType::Evacuation,
        rank: 30,
        keywords: &["evacuat"],
    },
    TypeRule {
        incident_type: IncidentType::SuspectedFire,
        rank: 40,
        keywords: &[
            "suspected fire",
            "possible fire",
            "smell of smoke",
            "smell of burning",
        ],
    },
    TypeRule {
        incident_type: IncidentType::FireAlarm,
        rank: 50,
        keywords: &["fire alarm", "alarm activation", "alarm sounding"],
    },
    TypeRule {
        incident_type: IncidentType::Fire,
        rank: 60,
        keywords: &["fire", "smoke", "flames", "burning"],
    },
    TypeRule {
        incident_type: IncidentType::EmergencyShowStop,
        rank: 70,
        keywords: &["show stop", "show-stop", "stop the show"],
    },
    TypeRule {
        incident_type: IncidentType::HostileAct,
        rank: 80,
        keywords: &["hostile act", "hostile", "acid attack", "vehicle attack"],
    },
    TypeRule {
        incident_type: IncidentType::StructuralIssue,
        rank: 90,
        keywords: &[
            "structural",
            "barrier collapse",
            "stage collapse",
            "scaffold",
        ],
    },
    TypeRule {
        incident_type: IncidentType::PowerFailure,
        rank: 100,
        keywords: &[
            "power failure",
            "power cut",
            "power outage",
            "power loss",
            "generator failure",
        ],
    },
    // Medical and welfare
    TypeRule {
        incident_type: IncidentType::Medical,
        rank: 110,
        keywords: &[
            "medical",
            "first aid",
            "injury",
            "injured",
            "unconscious",
            "collapsed",
            "not breathing",
            "seizure",
            "chest pain",
            "casualty",
            "ambulance",
            "defib",
            "overdose",
            "head injury",
            "bleeding",
        ],
    },
    TypeRule {
        incident_type: IncidentType::SexualMisconduct,
        rank: 120,
        keywords: &["sexual", "rape", "groping", "indecent"],
    },
    TypeRule {
        incident_type: IncidentType::MissingPerson,
        rank: 130,
        keywords: &["missing person", "missing child", "lost child", "misper"],
    },
    TypeRule {
        incident_type: IncidentType::FoundPerson,
        rank: 140,
        keywords: &["found person", "found child"],
    },
    TypeRule {
        incident_type: IncidentType::MentalHealthConcern,
        rank: 150,
        keywords: &["mental health", "self harm", "self-harm", "suicidal", "suicide"],
    },
    TypeRule {
        incident_type: IncidentType::DrugRelated,
        rank: 160,
        keywords: &["drug", "narcotic", "pills", "cocaine", "ketamine"],
    },
    TypeRule {
        incident_type: IncidentType::AlcoholRelated,
        rank: 170,
        keywords: &["drunk", "intoxicated", "alcohol"],
    },
    TypeRule {
        incident_type: IncidentType::Welfare,
        rank: 180,
        keywords: &["welfare", "distressed", "vulnerable", "safeguarding"],
    },
    // Security and crowd
    TypeRule {
        incident_type: IncidentType::Fight,
        rank: 190,
        keywords: &["fight", "fighting", "brawl", "altercation", "assault", "punch"],
    },
    TypeRule {
        incident_type: IncidentType::SecurityBreach,
        rank: 200,
        keywords: &["breach", "fence jump", "jumped the fence", "forced entry"],
    },
    TypeRule {
        incident_type: IncidentType::Theft,
        rank: 210,
        keywords: &["theft", "stolen", "pickpocket", "robbery", "shoplifting"],
    },
    TypeRule {
        incident_type: IncidentType::CriminalDamage,
        rank: 220,
        keywords: &["criminal damage", "vandal", "graffiti", "smashed"],
    },
    TypeRule {
        incident_type: IncidentType::SuspiciousBehaviour,
        rank: 230,
        keywords: &["suspicious", "loitering", "acting strangely"],
    },
    TypeRule {
        incident_type: IncidentType::Ejection,
        rank: 240,
        keywords: &["eject", "removed from site", "escorted out", "escorted off"],
    },
    TypeRule {
        incident_type: IncidentType::Refusal,
        rank: 250,
        keywords: &["refusal", "refused entry", "turned away", "denied entry"],
    },
    TypeRule {
        incident_type: IncidentType::CrowdManagement,
        rank: 260,
        keywords: &[
            "crowd surge",
            "crowd crush",
            "crowd build",
            "overcrowding",
            "crowd management",
            "crush",
        ],
    },
    TypeRule {
        incident_type: IncidentType::QueueBuildUp,
        rank: 270,
        keywords: &["queue", "queuing", "long line"],
    },
    TypeRule {
        incident_type: IncidentType::NoiseComplaint,
        rank: 280,
        keywords: &["noise complaint", "too loud", "noise levels"],
    },
    // Operational
    TypeRule {
        incident_type: IncidentType::TechnicalIssue,
        rank: 290,
        keywords: &[
            "technical issue",
            "technical fault",
            "radio fault",
            "screen failure",
            "comms failure",
        ],
    },
    TypeRule {
        incident_type: IncidentType::EquipmentFailure,
        rank: 300,
        keywords: &["equipment failure", "equipment fault", "broken equipment"],
    },
    TypeRule {
        incident_type: IncidentType::SiteIssue,
        rank: 310,
        keywords: &[
            "site issue",
            "trip hazard",
            "flooding",
            "blocked walkway",
            "damaged fence",
        ],
    },
    TypeRule {
        incident_type: IncidentType::Weather,
        rank: 320,
        keywords: &["weather", "lightning", "high winds", "heavy rain", "thunder"],
    },
    TypeRule {
        incident_type: IncidentType::TrafficManagement,
        rank: 330,
        keywords: &["traffic", "congestion", "road closure"],
    },
    TypeRule {
        incident_type: IncidentType::Parking,
        rank: 340,
        keywords: &["parking", "car park"],
    },
    TypeRule {
        incident_type: IncidentType::Accessibility,
        rank: 350,
        keywords: &["accessibility", "wheelchair", "access platform"],
    },
    TypeRule {
        incident_type: IncidentType::AnimalIncident,
        rank: 360,
        keywords: &["dog on site", "loose dog", "animal"],
    },
    TypeRule {
        incident_type: IncidentType::LostProperty,
        rank: 370,
        keywords: &["lost property", "lost phone", "lost wallet", "lost bag"],
    },
    TypeRule {
        incident_type: IncidentType::FoundProperty,
        rank: 380,
        keywords: &["found property", "found phone", "found wallet", "found bag"],
    },
    TypeRule {
        incident_type: IncidentType::Staffing,
        rank: 390,
        keywords: &["staffing", "staff shortage", "understaffed", "no show"],
    },
    TypeRule {
        incident_type: IncidentType::Accreditation,
        rank: 400,
        keywords: &["accreditation", "wristband issue", "pass issue"],
    },
    TypeRule {
        incident_type: IncidentType::Attendance,
        rank: 410,
        keywords: &["attendance", "capacity update", "headcount", "clicker count"],
    },
    TypeRule {
        incident_type: IncidentType::ArtistOnStage,
        rank: 420,
        keywords: &["artist on stage", "on stage now", "act started", "performance started"],
    },
    TypeRule {
        incident_type: IncidentType::ArtistOffStage,
        rank: 430,
        keywords: &["artist off stage", "act finished", "performance ended"],
    },
    TypeRule {
        incident_type: IncidentType::ArtistMovement,
        rank: 440,
        keywords: &["artist movement", "artist transfer", "artist arriving", "artist departing"],
    },
    TypeRule {
        incident_type: IncidentType::EventTiming,
        rank: 450,
        keywords: &["event timing", "doors open", "gates open", "show start"],
    },
    TypeRule {
        incident_type: IncidentType::Timings,
        rank: 460,
        keywords: &["timings", "running late", "running over", "schedule change"],
    },
    TypeRule {
        incident_type: IncidentType::SitRep,
        rank: 470,
        keywords: &["sit rep", "sitrep", "situation report", "all quiet", "status update"],
    },
    TypeRule {
        incident_type: IncidentType::RadioCheck,
        rank: 480,
        keywords: &["radio check", "radio test", "comms check"],
    },
];

/// Severity ladder, sorted by rank at load.
pub static TYPE_LADDER: LazyLock<Vec<TypeRule>> = LazyLock::new(|| {
    let mut rules = TYPE_LADDER_RAW.to_vec();
    rules.sort_by_key(|r| r.rank);
    rules
});

// ============================================================================
// Quick classification table
// ============================================================================

const QUICK_RULES_RAW: &[QuickRule] = &[
    QuickRule {
        incident_type: IncidentType::Attendance,
        rank: 10,
        keywords: &["attendance", "headcount", "capacity update", "clicker count"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::SitRep,
        rank: 20,
        keywords: &["sit rep", "sitrep", "situation report", "all quiet"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::RadioCheck,
        rank: 30,
        keywords: &["radio check", "comms check"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::ArtistOnStage,
        rank: 40,
        keywords: &["artist on stage", "on stage now"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::ArtistOffStage,
        rank: 50,
        keywords: &["artist off stage", "act finished"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::EventTiming,
        rank: 60,
        keywords: &["doors open", "gates open", "show start", "event timing"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::Timings,
        rank: 70,
        keywords: &["timings", "running late", "running over"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::CounterTerrorAlert,
        rank: 80,
        keywords: &["suspect package", "unattended bag", "terror"],
        priority: Some(Priority::Urgent),
    },
    QuickRule {
        incident_type: IncidentType::WeaponRelated,
        rank: 90,
        keywords: &["weapon", "knife", "gun", "firearm"],
        priority: Some(Priority::Urgent),
    },
    QuickRule {
        incident_type: IncidentType::Evacuation,
        rank: 100,
        keywords: &["evacuat"],
        priority: Some(Priority::Urgent),
    },
    QuickRule {
        incident_type: IncidentType::SuspectedFire,
        rank: 110,
        keywords: &["suspected fire", "smell of smoke", "smell of burning"],
        priority: Some(Priority::High),
    },
    QuickRule {
        incident_type: IncidentType::FireAlarm,
        rank: 120,
        keywords: &["fire alarm", "alarm activation"],
        priority: Some(Priority::High),
    },
    QuickRule {
        incident_type: IncidentType::Fire,
        rank: 130,
        keywords: &["fire", "smoke", "flames"],
        priority: Some(Priority::Urgent),
    },
    QuickRule {
        incident_type: IncidentType::EmergencyShowStop,
        rank: 140,
        keywords: &["show stop", "stop the show"],
        priority: Some(Priority::Urgent),
    },
    QuickRule {
        incident_type: IncidentType::HostileAct,
        rank: 150,
        keywords: &["hostile act", "acid attack", "vehicle attack"],
        priority: Some(Priority::Urgent),
    },
    QuickRule {
        incident_type: IncidentType::Medical,
        rank: 160,
        keywords: &[
            "medical",
            "first aid",
            "unconscious",
            "collapsed",
            "injury",
            "injured",
            "ambulance",
        ],
        priority: Some(Priority::High),
    },
    QuickRule {
        incident_type: IncidentType::SexualMisconduct,
        rank: 170,
        keywords: &["sexual", "groping", "indecent"],
        priority: Some(Priority::High),
    },
    QuickRule {
        incident_type: IncidentType::MissingPerson,
        rank: 180,
        keywords: &["missing person", "missing child", "lost child", "misper"],
        priority: Some(Priority::High),
    },
    QuickRule {
        incident_type: IncidentType::FoundPerson,
        rank: 190,
        keywords: &["found person", "found child"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::MentalHealthConcern,
        rank: 200,
        keywords: &["mental health", "self harm", "self-harm", "suicidal"],
        priority: Some(Priority::High),
    },
    QuickRule {
        incident_type: IncidentType::Fight,
        rank: 210,
        keywords: &["fight", "brawl", "altercation", "assault"],
        priority: Some(Priority::High),
    },
    QuickRule {
        incident_type: IncidentType::CrowdManagement,
        rank: 220,
        keywords: &["crowd surge", "crowd crush", "overcrowding", "crowd build"],
        priority: Some(Priority::High),
    },
    QuickRule {
        incident_type: IncidentType::Ejection,
        rank: 230,
        keywords: &["eject", "escorted out", "escorted off", "removed from site"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::Refusal,
        rank: 240,
        keywords: &["refusal", "refused entry", "denied entry"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::Theft,
        rank: 250,
        keywords: &["theft", "stolen", "pickpocket"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::CriminalDamage,
        rank: 260,
        keywords: &["criminal damage", "vandal", "graffiti"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::SuspiciousBehaviour,
        rank: 270,
        keywords: &["suspicious", "loitering"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::SecurityBreach,
        rank: 280,
        keywords: &["breach", "fence jump", "forced entry"],
        priority: Some(Priority::High),
    },
    QuickRule {
        incident_type: IncidentType::DrugRelated,
        rank: 290,
        keywords: &["drug", "narcotic", "pills"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::AlcoholRelated,
        rank: 300,
        keywords: &["drunk", "intoxicated"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::Welfare,
        rank: 310,
        keywords: &["welfare", "distressed", "vulnerable"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::QueueBuildUp,
        rank: 320,
        keywords: &["queue", "queuing"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::NoiseComplaint,
        rank: 330,
        keywords: &["noise complaint", "too loud"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::StructuralIssue,
        rank: 340,
        keywords: &["structural", "barrier collapse", "stage collapse"],
        priority: Some(Priority::Urgent),
    },
    QuickRule {
        incident_type: IncidentType::PowerFailure,
        rank: 350,
        keywords: &["power failure", "power cut", "power outage"],
        priority: Some(Priority::High),
    },
    QuickRule {
        incident_type: IncidentType::TechnicalIssue,
        rank: 360,
        keywords: &["technical issue", "technical fault", "comms failure"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::EquipmentFailure,
        rank: 370,
        keywords: &["equipment failure", "equipment fault"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::SiteIssue,
        rank: 380,
        keywords: &["trip hazard", "flooding", "blocked walkway", "site issue"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::Weather,
        rank: 390,
        keywords: &["lightning", "high winds", "heavy rain"],
        priority: Some(Priority::Medium),
    },
    QuickRule {
        incident_type: IncidentType::TrafficManagement,
        rank: 400,
        keywords: &["traffic", "congestion", "road closure"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::Parking,
        rank: 410,
        keywords: &["parking", "car park"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::Accessibility,
        rank: 420,
        keywords: &["wheelchair", "accessibility", "access platform"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::AnimalIncident,
        rank: 430,
        keywords: &["loose dog", "dog on site", "animal"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::LostProperty,
        rank: 440,
        keywords: &["lost property", "lost phone", "lost wallet", "lost bag"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::FoundProperty,
        rank: 450,
        keywords: &["found property", "found phone", "found wallet", "found bag"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::Staffing,
        rank: 460,
        keywords: &["staffing", "staff shortage", "understaffed"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::Accreditation,
        rank: 470,
        keywords: &["accreditation", "wristband", "pass issue"],
        priority: Some(Priority::Low),
    },
    QuickRule {
        incident_type: IncidentType::ArtistMovement,
        rank: 480,
        keywords: &["artist movement", "artist arriving", "artist departing"],
        priority: None,
    },
];

/// Quick table, sorted by rank at load. First match wins.
pub static QUICK_RULES: LazyLock<Vec<QuickRule>> = LazyLock::new(|| {
    let mut rules = QUICK_RULES_RAW.to_vec();
    rules.sort_by_key(|r| r.rank);
    rules
});

/// Numeric token for attendance normalization: comma-grouped or plain digits.
pub static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,3}(?:,\d{3})+|\d+").unwrap());

// ============================================================================
// Alternative type clusters
// ============================================================================

/// Overlapping suggestion clusters: when any trigger keyword appears, the
/// whole related set is offered so a reviewer can correct a misclassification
/// without re-typing.
pub const ALTERNATIVE_CLUSTERS: &[(&[&str], &[IncidentType])] = &[
    (
        &["medical", "injur", "unwell", "welfare", "collaps", "faint"],
        &[
            IncidentType::Medical,
            IncidentType::Welfare,
            IncidentType::MentalHealthConcern,
        ],
    ),
    (
        &["security", "suspicious", "theft", "stolen", "breach"],
        &[
            IncidentType::SuspiciousBehaviour,
            IncidentType::Theft,
            IncidentType::SecurityBreach,
        ],
    ),
    (
        &["crowd", "queue", "surge", "crush"],
        &[
            IncidentType::CrowdManagement,
            IncidentType::QueueBuildUp,
            IncidentType::Welfare,
        ],
    ),
    (
        &["technical", "equipment", "power", "site issue", "fault"],
        &[
            IncidentType::TechnicalIssue,
            IncidentType::SiteIssue,
            IncidentType::EquipmentFailure,
        ],
    ),
];

// ============================================================================
// Validation
// ============================================================================

/// Validate every rule table. Catches contradictory floor/ceiling bounds,
/// duplicate ranks, and keywords that would never match lowercased input.
pub fn validate() -> Result<(), RuleConfigError> {
    check_ranks("type ladder", TYPE_LADDER.iter().map(|r| r.rank))?;
    check_ranks("quick", QUICK_RULES.iter().map(|r| r.rank))?;

    for rule in TYPE_LADDER.iter() {
        check_keywords(rule.incident_type, rule.keywords)?;
    }
    for rule in QUICK_RULES.iter() {
        check_keywords(rule.incident_type, rule.keywords)?;
    }

    for incident_type in IncidentType::ALL {
        let bounds = priority_bounds(incident_type);
        if let (Some(floor), Some(ceiling)) = (bounds.floor, bounds.ceiling) {
            if floor > ceiling {
                return Err(RuleConfigError::FloorAboveCeiling(
                    incident_type,
                    floor,
                    ceiling,
                ));
            }
        }
    }

    Ok(())
}

fn check_ranks(
    table: &'static str,
    ranks: impl Iterator<Item = u32>,
) -> Result<(), RuleConfigError> {
    let mut seen = Vec::new();
    for rank in ranks {
        if seen.contains(&rank) {
            return Err(RuleConfigError::DuplicateRank { table, rank });
        }
        seen.push(rank);
    }
    Ok(())
}

fn check_keywords(
    incident_type: IncidentType,
    keywords: &'static [&'static str],
) -> Result<(), RuleConfigError> {
    if keywords.is_empty() {
        return Err(RuleConfigError::EmptyKeywords(incident_type));
    }
    for keyword in keywords {
        if *keyword != keyword.to_lowercase() {
            return Err(RuleConfigError::NonLowercaseKeyword {
                incident_type,
                keyword,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_validate() {
        validate().expect("rule tables must be internally consistent");
    }

    #[test]
    fn test_ladder_sorted_by_rank() {
        let ranks: Vec<u32> = TYPE_LADDER.iter().map(|r| r.rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_floor_never_above_ceiling() {
        for incident_type in IncidentType::ALL {
            let bounds = priority_bounds(incident_type);
            if let (Some(floor), Some(ceiling)) = (bounds.floor, bounds.ceiling) {
                assert!(
                    floor <= ceiling,
                    "{} has floor {} above ceiling {}",
                    incident_type,
                    floor,
                    ceiling
                );
            }
        }
    }

    #[test]
    fn test_urgent_floors() {
        assert_eq!(
            priority_bounds(IncidentType::Fire).floor,
            Some(Priority::Urgent)
        );
        assert_eq!(
            priority_bounds(IncidentType::CounterTerrorAlert).floor,
            Some(Priority::Urgent)
        );
    }

    #[test]
    fn test_operational_ceilings() {
        for t in [
            IncidentType::Attendance,
            IncidentType::SitRep,
            IncidentType::Timings,
        ] {
            assert_eq!(priority_bounds(t).ceiling, Some(Priority::Low));
        }
    }

    #[test]
    fn test_standard_callsign_regex() {
        assert!(STANDARD_CALLSIGN.is_match("S1"));
        assert!(STANDARD_CALLSIGN.is_match("AB12"));
        assert!(STANDARD_CALLSIGN.is_match("S-1"));
        assert!(STANDARD_CALLSIGN.is_match("A/2"));
        // Lowercase and spaced forms do not count as standard
        assert!(!STANDARD_CALLSIGN.is_match("s1"));
        assert!(!STANDARD_CALLSIGN.is_match("Bar 3"));
    }

    #[test]
    fn test_numeric_token_regex() {
        assert_eq!(NUMERIC_TOKEN.find("3,500").unwrap().as_str(), "3,500");
        assert_eq!(NUMERIC_TOKEN.find("about 3500 in").unwrap().as_str(), "3500");
    }
}
