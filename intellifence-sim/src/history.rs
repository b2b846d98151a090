//! Bounded buffers for alerts and samples.

use std::collections::VecDeque;

use intellifence_types::{Alert, TelemetrySample};

/// Default number of alerts kept.
pub const DEFAULT_ALERT_CAPACITY: usize = 5;

/// Default number of samples kept for charts.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// The most recent alerts, oldest evicted first.
#[derive(Debug, Clone)]
pub struct AlertHistory {
    /// Front is the most recent alert.
    alerts: VecDeque<Alert>,
    capacity: usize,
}

impl Default for AlertHistory {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_CAPACITY)
    }
}

impl AlertHistory {
    /// Create an empty history. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            alerts: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an alert, evicting the oldest when full.
    pub fn push(&mut self, alert: Alert) {
        self.alerts.push_front(alert);
        if self.alerts.len() > self.capacity {
            self.alerts.pop_back();
        }
    }

    /// Alerts in display order, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn latest(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    /// Owned copy, most recent first.
    pub fn to_vec(&self) -> Vec<Alert> {
        self.alerts.iter().cloned().collect()
    }
}

/// Ring buffer of recent samples for trend charts.
#[derive(Debug, Clone)]
pub struct SampleHistory {
    /// Back is the most recent sample.
    samples: VecDeque<TelemetrySample>,
    capacity: usize,
}

impl Default for SampleHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SampleHistory {
    /// Create an empty history. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, sample: TelemetrySample) {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Samples oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TelemetrySample> {
        self.samples.iter()
    }

    pub fn last(&self) -> Option<&TelemetrySample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn to_vec(&self) -> Vec<TelemetrySample> {
        self.samples.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intellifence_types::Severity;
    use proptest::prelude::*;

    fn alert(n: u64) -> Alert {
        Alert::new(format!("alert {}", n), Severity::Normal, n)
    }

    #[test]
    fn new_history_is_empty() {
        let history = AlertHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 5);
        assert!(history.latest().is_none());
    }

    #[test]
    fn most_recent_first() {
        let mut history = AlertHistory::default();
        history.push(alert(1));
        history.push(alert(2));
        history.push(alert(3));
        let order: Vec<u64> = history.iter().map(|a| a.created_at_ms).collect();
        assert_eq!(order, vec![3, 2, 1]);
        assert_eq!(history.latest().unwrap().created_at_ms, 3);
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut history = AlertHistory::default();
        for n in 1..=7 {
            history.push(alert(n));
        }
        assert_eq!(history.len(), 5);
        let order: Vec<u64> = history.iter().map(|a| a.created_at_ms).collect();
        assert_eq!(order, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut history = AlertHistory::new(0);
        history.push(alert(1));
        history.push(alert(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().created_at_ms, 2);
    }

    #[test]
    fn clear_empties_history() {
        let mut history = AlertHistory::default();
        history.push(alert(1));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn sample_history_keeps_newest() {
        let mut history = SampleHistory::new(3);
        for n in 0..5 {
            history.record(TelemetrySample::baseline().at(n));
        }
        let stamps: Vec<u64> = history.iter().map(|s| s.timestamp_ms).collect();
        assert_eq!(stamps, vec![2, 3, 4]);
        assert_eq!(history.last().unwrap().timestamp_ms, 4);
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(pushes in 0u64..64, capacity in 1usize..10) {
            let mut history = AlertHistory::new(capacity);
            for n in 0..pushes {
                history.push(alert(n));
                prop_assert!(history.len() <= capacity);
            }
            // Whatever survived is the newest run, in descending order.
            let order: Vec<u64> = history.iter().map(|a| a.created_at_ms).collect();
            let expected: Vec<u64> = (0..pushes).rev().take(capacity).collect();
            prop_assert_eq!(order, expected);
        }
    }
}
