//! Subscriber registry for sample and alert notifications.

use std::sync::Arc;

use intellifence_types::{Alert, TelemetrySample};

/// Callback invoked with every generated sample.
pub type SampleCallback = Arc<dyn Fn(&TelemetrySample) + Send + Sync>;

/// Callback invoked with every alert that enters the history.
pub type AlertCallback = Arc<dyn Fn(&Alert) + Send + Sync>;

/// Identifies one registration so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    samples: Vec<(SubscriptionId, SampleCallback)>,
    alerts: Vec<(SubscriptionId, AlertCallback)>,
}

impl Observers {
    fn next_id(&mut self) -> SubscriptionId {
        self.next_id += 1;
        SubscriptionId(self.next_id)
    }

    pub fn add_sample(&mut self, callback: SampleCallback) -> SubscriptionId {
        let id = self.next_id();
        self.samples.push((id, callback));
        id
    }

    pub fn add_alert(&mut self, callback: AlertCallback) -> SubscriptionId {
        let id = self.next_id();
        self.alerts.push((id, callback));
        id
    }

    /// Remove a registration of either kind.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.samples.len() + self.alerts.len();
        self.samples.retain(|(sid, _)| *sid != id);
        self.alerts.retain(|(sid, _)| *sid != id);
        before != self.samples.len() + self.alerts.len()
    }

    /// Callbacks are cloned out so they can run without the registry lock.
    pub fn sample_callbacks(&self) -> Vec<SampleCallback> {
        self.samples.iter().map(|(_, cb)| cb.clone()).collect()
    }

    pub fn alert_callbacks(&self) -> Vec<AlertCallback> {
        self.alerts.iter().map(|(_, cb)| cb.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len() + self.alerts.len()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("samples", &self.samples.len())
            .field("alerts", &self.alerts.len())
            .finish()
    }
}
