//! Live data source backed by a running [`Simulation`].
//!
//! Sample and alert callbacks bump a tokio watch channel; the TUI polls the
//! receiver and pulls a fresh snapshot only when something changed.

use intellifence_sim::{Simulation, SubscriptionId};
use intellifence_types::DashboardSnapshot;
use tokio::sync::watch;

use super::DataSource;

/// A data source that renders a simulation owned by the caller.
///
/// # Example
///
/// ```
/// use intellifence::{DataSource, SimulationSource};
/// use intellifence_sim::Simulation;
///
/// let sim = Simulation::builder().seed(1).build().unwrap();
/// let mut source = SimulationSource::new(sim.clone());
///
/// assert!(source.poll().is_some());
/// sim.step();
/// assert_eq!(source.poll().unwrap().tick, 1);
/// ```
#[derive(Debug)]
pub struct SimulationSource {
    simulation: Simulation,
    receiver: watch::Receiver<u64>,
    subscriptions: [SubscriptionId; 2],
    description: String,
    /// Track if we've returned the initial value yet
    initial_returned: bool,
}

impl SimulationSource {
    pub fn new(simulation: Simulation) -> Self {
        let (tx, receiver) = watch::channel(0u64);
        let sample_tx = tx.clone();
        let on_sample = simulation.on_sample(move |_| {
            sample_tx.send_modify(|n| *n += 1);
        });
        let on_alert = simulation.on_alert(move |_| {
            tx.send_modify(|n| *n += 1);
        });

        let description = format!("simulation: every {} ms", simulation.config().tick_interval_ms);

        Self {
            simulation,
            receiver,
            subscriptions: [on_sample, on_alert],
            description,
            initial_returned: false,
        }
    }
}

impl DataSource for SimulationSource {
    fn poll(&mut self) -> Option<DashboardSnapshot> {
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        if self.receiver.has_changed().unwrap_or(false) {
            let _ = self.receiver.borrow_and_update();
            Some(self.simulation.snapshot())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }

    fn simulation(&self) -> Option<&Simulation> {
        Some(&self.simulation)
    }

    fn invalidate(&mut self) {
        self.receiver.mark_changed();
    }
}

impl Drop for SimulationSource {
    fn drop(&mut self) {
        for id in self.subscriptions {
            self.simulation.unsubscribe(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> (Simulation, SimulationSource) {
        let sim = Simulation::builder().seed(3).build().unwrap();
        let source = SimulationSource::new(sim.clone());
        (sim, source)
    }

    #[test]
    fn test_first_poll_returns_snapshot() {
        let (_sim, mut source) = source();
        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.tick, 0);
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_poll_after_step() {
        let (sim, mut source) = source();
        let _ = source.poll();

        sim.step();
        sim.step();
        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.tick, 2);
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_test_alert_wakes_source() {
        let (sim, mut source) = source();
        let _ = source.poll();

        sim.trigger_test_alert();
        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.alerts.len(), 1);
    }

    #[test]
    fn test_invalidate_forces_snapshot() {
        let (_sim, mut source) = source();
        let _ = source.poll();
        assert!(source.poll().is_none());

        source.invalidate();
        assert!(source.poll().is_some());
    }

    #[test]
    fn test_description_and_control() {
        let (_sim, source) = source();
        assert_eq!(source.description(), "simulation: every 2000 ms");
        assert!(source.error().is_none());
        assert!(source.simulation().is_some());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let (sim, source) = source();
        drop(source);
        // Stepping with no receiver left must not panic.
        sim.step();
    }
}
