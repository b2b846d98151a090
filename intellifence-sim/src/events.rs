//! Random grid events.

use intellifence_types::{Alert, Severity};

use crate::config::EventOdds;
use crate::entropy::Entropy;

pub const CRITICAL_EVENT: &str = "Illegal electrification detected on Power Line PL-403";
pub const WARNING_EVENT: &str = "Grid anomaly detected - unauthorized tap suspected";
pub const TEST_ALERT: &str =
    "TEST ALERT: Illegal electrification detected on Power Line PL-403 - Auto disconnect activated";

/// Routine notices, picked uniformly.
pub const NOTICES: [&str; 4] = [
    "Power line monitoring system online",
    "Smart circuit breakers calibrated",
    "Grid status verification completed",
    "Infrastructure monitoring active",
];

/// Rolls for a random event once per tick.
#[derive(Debug, Clone, Default)]
pub struct EventRoller {
    odds: EventOdds,
}

impl EventRoller {
    pub fn new(odds: EventOdds) -> Self {
        Self { odds }
    }

    /// Roll once; `None` means a quiet tick.
    pub fn roll(&self, entropy: &mut dyn Entropy, now_ms: u64) -> Option<Alert> {
        let chance = entropy.next_unit();
        if chance < self.odds.critical {
            Some(Alert::new(CRITICAL_EVENT, Severity::Critical, now_ms))
        } else if chance < self.odds.warning {
            Some(Alert::new(WARNING_EVENT, Severity::Warning, now_ms))
        } else if chance < self.odds.notice {
            let notice = NOTICES[entropy.next_index(NOTICES.len())];
            Some(Alert::new(notice, Severity::Normal, now_ms))
        } else {
            None
        }
    }
}
