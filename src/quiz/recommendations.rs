use serde::{Deserialize, Serialize};

use super::{AnswerSet, Budget, Capacity, Portability, PrimaryUse};

/// The three storage strategies the quiz can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveKind {
    Ssd,
    Hdd,
    Hybrid,
}

impl std::fmt::Display for DriveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriveKind::Ssd => write!(f, "SSD"),
            DriveKind::Hdd => write!(f, "HDD"),
            DriveKind::Hybrid => write!(f, "Hybrid (SSD + HDD)"),
        }
    }
}

/// A quiz outcome: one of exactly three fixed title/description payloads.
///
/// The `kind` discriminant lets callers match on the outcome without
/// comparing strings; `title` and `description` are the displayed copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub kind: DriveKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Recommendation {
    /// The fixed payload for a drive kind.
    pub fn for_kind(kind: DriveKind) -> Self {
        match kind {
            DriveKind::Ssd => Recommendation {
                kind,
                title: "Recommendation: SSD",
                description: "Use an SSD for OS/apps and time-sensitive tasks. \
                              Pair with an HDD for libraries/backups.",
            },
            DriveKind::Hdd => Recommendation {
                kind,
                title: "Recommendation: HDD",
                description: "Choose a high-capacity HDD for multi-terabyte value, \
                              ideal for libraries, backups, NAS, and archives.",
            },
            DriveKind::Hybrid => Recommendation {
                kind,
                title: "Recommendation: Hybrid (SSD + HDD)",
                description: "SSD for OS/apps + HDD for mass storage gives the best \
                              balance of speed, capacity, and cost.",
            },
        }
    }
}

/// Map a set of quiz answers to a recommendation.
///
/// Returns `None` while any of the four questions is unanswered; partial
/// answers never produce a partial or default recommendation. Once all four
/// are answered the outcome is a pure function of the answers alone, so this
/// can be re-evaluated on every selection.
pub fn recommend(answers: &AnswerSet) -> Option<Recommendation> {
    let (budget, primary_use, capacity, portability) = match (
        answers.budget,
        answers.primary_use,
        answers.capacity,
        answers.portability,
    ) {
        (Some(b), Some(u), Some(c), Some(p)) => (b, u, c, p),
        _ => return None,
    };

    let prefer_ssd = matches!(primary_use, PrimaryUse::OsAndApps | PrimaryUse::Editing)
        && budget != Budget::Tight
        && portability != Portability::Stationary;
    let prefer_hdd = capacity == Capacity::MultiTb
        || budget == Budget::Tight
        || primary_use == PrimaryUse::Archive
        || portability == Portability::Stationary;

    let kind = if prefer_ssd && !prefer_hdd {
        DriveKind::Ssd
    } else if prefer_hdd && !prefer_ssd {
        DriveKind::Hdd
    } else {
        // Mixed or absent signals both land on the hybrid setup
        DriveKind::Hybrid
    };

    Some(Recommendation::for_kind(kind))
}
