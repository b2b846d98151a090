//! The simulation context: owned state, lifecycle and subscriptions.

use std::sync::Arc;
#[cfg(feature = "tokio")]
use std::time::Duration;

use intellifence_types::{
    now_ms, Alert, DashboardSnapshot, FenceProfile, Lifecycle, Severity, SystemVitals,
    TelemetrySample,
};
use parking_lot::Mutex;
use tracing::{debug, info, trace, warn};

use crate::classifier::AlertClassifier;
use crate::config::SimConfig;
use crate::entropy::{Entropy, SeededEntropy};
use crate::error::ConfigError;
use crate::events::{EventRoller, TEST_ALERT};
use crate::generator::TelemetryGenerator;
use crate::history::{AlertHistory, SampleHistory};
use crate::observer::{Observers, SubscriptionId};
use crate::stats::{StatsTracker, VitalsGenerator};

/// How long a timer tick waits for the engine before skipping.
#[cfg(feature = "tokio")]
const TICK_LOCK_BUDGET: Duration = Duration::from_millis(250);

/// Pause between attempts to take a busy engine lock.
#[cfg(feature = "tokio")]
const TICK_LOCK_RETRY: Duration = Duration::from_millis(10);

/// What one tick produced.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub sample: TelemetrySample,
    pub severity: Severity,
    /// Alerts raised this tick, in the order they entered the history.
    pub alerts: Vec<Alert>,
}

/// Mutable simulation state. Only ever touched under the engine lock.
struct Engine {
    generator: TelemetryGenerator,
    classifier: AlertClassifier,
    roller: EventRoller,
    stats: StatsTracker,
    vitals_generator: VitalsGenerator,
    entropy: Box<dyn Entropy>,

    fence: FenceProfile,
    tick: u64,
    latest: TelemetrySample,
    previous: TelemetrySample,
    line_severity: Severity,
    vitals: SystemVitals,
    vitals_severity: Severity,
    alerts: AlertHistory,
    history: SampleHistory,
}

impl Engine {
    fn new(config: &SimConfig, entropy: Box<dyn Entropy>, fence: FenceProfile) -> Self {
        let classifier = AlertClassifier::new(config.thresholds.clone());
        let vitals = SystemVitals::default();
        let mut engine = Self {
            generator: TelemetryGenerator::new(config.limits.clone()),
            vitals_severity: classifier.classify_vitals(&vitals),
            classifier,
            roller: EventRoller::new(config.odds),
            stats: StatsTracker::default(),
            vitals_generator: VitalsGenerator::default(),
            entropy,
            fence: fence.clone(),
            tick: 0,
            latest: fence.baseline,
            previous: fence.baseline,
            line_severity: Severity::Normal,
            vitals,
            alerts: AlertHistory::new(config.alert_capacity),
            history: SampleHistory::new(config.history_capacity),
        };
        engine.reset_to(fence, now_ms());
        engine
    }

    fn reset_to(&mut self, fence: FenceProfile, now_ms: u64) {
        let baseline = fence.baseline.at(now_ms);
        self.fence = fence;
        self.tick = 0;
        self.latest = baseline;
        self.previous = baseline;
        self.line_severity = self.classifier.classify(&baseline);
        self.stats.reset();
        self.history.clear();
        self.history.record(baseline);
    }

    fn step(&mut self, now_ms: u64) -> TickOutcome {
        let sample = self
            .generator
            .tick_at(&self.latest, self.entropy.as_mut(), now_ms);
        self.previous = self.latest;
        self.latest = sample;
        self.history.record(sample);
        self.stats.fold(&sample, self.entropy.as_mut());

        self.vitals = self.vitals_generator.tick(&self.vitals, self.entropy.as_mut());
        self.vitals_severity = self.classifier.classify_vitals(&self.vitals);

        let severity = self.classifier.classify(&sample);
        let mut raised = Vec::new();
        if severity > Severity::Normal && severity != self.line_severity {
            let message = self.classifier.describe(&sample, severity);
            raised.push(Alert::new(message, severity, now_ms));
        }
        self.line_severity = severity;

        if let Some(event) = self.roller.roll(self.entropy.as_mut(), now_ms) {
            raised.push(event);
        }
        for alert in &raised {
            self.alerts.push(alert.clone());
        }

        self.tick += 1;
        trace!(
            tick = self.tick,
            voltage = sample.voltage,
            current = sample.current,
            power = sample.power,
            %severity,
            "tick"
        );

        TickOutcome {
            sample,
            severity,
            alerts: raised,
        }
    }

    fn snapshot(&self, lifecycle: Lifecycle) -> DashboardSnapshot {
        DashboardSnapshot {
            fence: self.fence.clone(),
            lifecycle,
            tick: self.tick,
            latest: self.latest,
            previous: self.previous,
            line_severity: self.line_severity,
            stats: *self.stats.stats(),
            vitals: self.vitals,
            vitals_severity: self.vitals_severity,
            alerts: self.alerts.to_vec(),
            history: self.history.to_vec(),
            taken_at_ms: now_ms(),
        }
    }
}

/// Result of one timer attempt on the engine.
#[cfg(feature = "tokio")]
#[derive(Debug)]
enum TickAttempt {
    Ticked,
    /// Someone else holds the engine lock.
    Busy,
    /// `stop()` won the race for the lock.
    Stopped,
}

/// Handle for the background tick task.
#[cfg(feature = "tokio")]
struct Runner {
    stop_tx: tokio::sync::watch::Sender<bool>,
    task: tokio::task::JoinHandle<()>,
}

struct Inner {
    config: SimConfig,
    engine: Mutex<Engine>,
    observers: Mutex<Observers>,
    #[cfg(feature = "tokio")]
    runner: Mutex<Option<Runner>>,
}

impl Inner {
    /// Run one tick and notify subscribers once the engine is unlocked.
    fn run_tick(&self) -> TickOutcome {
        let outcome = self.engine.lock().step(now_ms());
        self.notify(&outcome);
        outcome
    }

    /// Timer variant of [`run_tick`](Self::run_tick). Never blocks: a busy
    /// engine is reported so the task can retry after an async sleep.
    ///
    /// The stop flag is read under the engine lock, so once `stop()` has
    /// flipped it no further tick is applied.
    #[cfg(feature = "tokio")]
    fn try_tick(&self, stop: &tokio::sync::watch::Receiver<bool>) -> TickAttempt {
        let outcome = {
            let Some(mut engine) = self.engine.try_lock() else {
                return TickAttempt::Busy;
            };
            if *stop.borrow() {
                return TickAttempt::Stopped;
            }
            engine.step(now_ms())
        };
        self.notify(&outcome);
        TickAttempt::Ticked
    }

    fn notify(&self, outcome: &TickOutcome) {
        let (samples, alerts) = {
            let observers = self.observers.lock();
            (observers.sample_callbacks(), observers.alert_callbacks())
        };
        for callback in &samples {
            callback(&outcome.sample);
        }
        for alert in &outcome.alerts {
            for callback in &alerts {
                callback(alert);
            }
        }
    }
}

/// A running or stopped telemetry simulation.
///
/// This is the context object the presentation layer owns. It is a cheap
/// handle: clones share the same state, subscriptions and timer.
///
/// # Example
///
/// ```rust
/// use intellifence_sim::{FixedEntropy, Simulation};
///
/// let sim = Simulation::builder()
///     .entropy(FixedEntropy::NEUTRAL)
///     .build()
///     .unwrap();
///
/// sim.on_sample(|sample| println!("{:.1} V", sample.voltage));
///
/// // Advance by hand; `start()` does the same on a timer.
/// let sample = sim.step();
/// assert_eq!(sample.voltage, 230.5);
/// ```
#[derive(Clone)]
pub struct Simulation {
    inner: Arc<Inner>,
}

impl Simulation {
    /// Default configuration, first catalog fence, OS-seeded entropy.
    pub fn new() -> Self {
        Self::from_parts(
            SimConfig::default(),
            Box::new(SeededEntropy::from_os()),
            FenceProfile::default(),
        )
    }

    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    fn from_parts(config: SimConfig, entropy: Box<dyn Entropy>, fence: FenceProfile) -> Self {
        let engine = Engine::new(&config, entropy, fence);
        Self {
            inner: Arc::new(Inner {
                config,
                engine: Mutex::new(engine),
                observers: Mutex::new(Observers::default()),
                #[cfg(feature = "tokio")]
                runner: Mutex::new(None),
            }),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.inner.config
    }

    /// Register a callback for every generated sample.
    ///
    /// Callbacks run on the ticking task after the engine lock is released,
    /// so they may call back into the simulation.
    pub fn on_sample<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&TelemetrySample) + Send + Sync + 'static,
    {
        self.inner.observers.lock().add_sample(Arc::new(callback))
    }

    /// Register a callback for every alert that enters the history.
    pub fn on_alert<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Alert) + Send + Sync + 'static,
    {
        self.inner.observers.lock().add_alert(Arc::new(callback))
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.observers.lock().remove(id)
    }

    /// Run one tick immediately, whether or not the timer is running.
    pub fn step(&self) -> TelemetrySample {
        self.inner.run_tick().sample
    }

    /// Like [`step`](Self::step) but returns everything the tick produced.
    pub fn step_detailed(&self) -> TickOutcome {
        self.inner.run_tick()
    }

    /// Raise the demo's manual test alert.
    pub fn trigger_test_alert(&self) -> Alert {
        let alert = Alert::new(TEST_ALERT, Severity::Critical, now_ms());
        self.inner.engine.lock().alerts.push(alert.clone());
        info!("test alert triggered");

        let callbacks = self.inner.observers.lock().alert_callbacks();
        for callback in &callbacks {
            callback(&alert);
        }
        alert
    }

    /// Switch to another fence and restart the walk from its baseline.
    ///
    /// The alert history and unit vitals carry over.
    pub fn select_fence(&self, fence: FenceProfile) {
        info!(fence = %fence.id, name = %fence.name, "fence selected");
        self.inner.engine.lock().reset_to(fence, now_ms());
    }

    pub fn fence(&self) -> FenceProfile {
        self.inner.engine.lock().fence.clone()
    }

    pub fn latest(&self) -> TelemetrySample {
        self.inner.engine.lock().latest
    }

    /// Alerts, most recent first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.inner.engine.lock().alerts.to_vec()
    }

    pub fn tick_count(&self) -> u64 {
        self.inner.engine.lock().tick
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let lifecycle = self.status();
        self.inner.engine.lock().snapshot(lifecycle)
    }

    #[cfg(feature = "tokio")]
    pub fn status(&self) -> Lifecycle {
        if self.inner.runner.lock().is_some() {
            Lifecycle::Running
        } else {
            Lifecycle::Stopped
        }
    }

    #[cfg(not(feature = "tokio"))]
    pub fn status(&self) -> Lifecycle {
        Lifecycle::Stopped
    }

    /// Arm the tick timer (`Stopped -> Running`).
    ///
    /// The first tick fires one full interval after this call. Returns
    /// `false` if the simulation was already running. Must be called from
    /// within a tokio runtime.
    #[cfg(feature = "tokio")]
    pub fn start(&self) -> bool {
        use tokio::sync::watch;
        use tokio::time::{interval_at, Instant, MissedTickBehavior};

        let mut runner = self.inner.runner.lock();
        if runner.is_some() {
            return false;
        }

        let (stop_tx, mut stop_rx) = watch::channel(false);
        let period = self.inner.config.tick_interval();
        let first = Instant::now() + period;
        let weak = Arc::downgrade(&self.inner);

        let task = tokio::spawn(async move {
            let mut timer = interval_at(first, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;

                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                    _ = timer.tick() => {
                        let Some(inner) = weak.upgrade() else {
                            break;
                        };
                        let deadline = Instant::now() + TICK_LOCK_BUDGET;
                        loop {
                            match inner.try_tick(&stop_rx) {
                                TickAttempt::Ticked => break,
                                TickAttempt::Stopped => {
                                    debug!("tick task exited");
                                    return;
                                }
                                TickAttempt::Busy if Instant::now() >= deadline => {
                                    warn!("engine busy, skipping tick");
                                    break;
                                }
                                TickAttempt::Busy => tokio::time::sleep(TICK_LOCK_RETRY).await,
                            }
                        }
                    }
                }
            }
            debug!("tick task exited");
        });

        *runner = Some(Runner { stop_tx, task });
        info!(interval_ms = period.as_millis() as u64, "simulation started");
        true
    }

    /// Disarm the tick timer (`Running -> Stopped`).
    ///
    /// Waits for a tick that already holds the engine lock, so no tick is
    /// applied after this returns. That last tick's observers may still be
    /// running on the timer task when it does. Returns `false` if the
    /// simulation was not running.
    #[cfg(feature = "tokio")]
    pub fn stop(&self) -> bool {
        let Some(runner) = self.inner.runner.lock().take() else {
            return false;
        };
        let _ = runner.stop_tx.send(true);
        drop(self.inner.engine.lock());
        runner.task.abort();
        info!("simulation stopped");
        true
    }

    /// Start if stopped, stop if running. Returns the new state.
    #[cfg(feature = "tokio")]
    pub fn toggle(&self) -> Lifecycle {
        if !self.stop() {
            self.start();
        }
        self.status()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("status", &self.status())
            .field("observers", &self.inner.observers.lock().len())
            .finish()
    }
}

/// Builder for configuring a [`Simulation`].
#[derive(Default)]
pub struct SimulationBuilder {
    config: Option<SimConfig>,
    entropy: Option<Box<dyn Entropy>>,
    fence: Option<FenceProfile>,
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this configuration. Validated by [`build`](Self::build).
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Inject a random source.
    pub fn entropy(mut self, entropy: impl Entropy + 'static) -> Self {
        self.entropy = Some(Box::new(entropy));
        self
    }

    /// Shorthand for a reproducible [`SeededEntropy`].
    pub fn seed(self, seed: u64) -> Self {
        self.entropy(SeededEntropy::from_seed(seed))
    }

    /// Start on this fence instead of the first catalog entry.
    pub fn fence(mut self, fence: FenceProfile) -> Self {
        self.fence = Some(fence);
        self
    }

    pub fn build(self) -> Result<Simulation, ConfigError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        let entropy = self
            .entropy
            .unwrap_or_else(|| Box::new(SeededEntropy::from_os()));
        Ok(Simulation::from_parts(
            config,
            entropy,
            self.fence.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EventOdds;
    use crate::entropy::{FixedEntropy, ScriptedEntropy};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn quiet_config() -> SimConfig {
        SimConfig {
            odds: EventOdds::silent(),
            ..SimConfig::default()
        }
    }

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    #[test]
    fn neutral_entropy_keeps_baseline() {
        let sim = Simulation::builder()
            .config(quiet_config())
            .entropy(FixedEntropy::NEUTRAL)
            .build()
            .unwrap();
        let sample = sim.step();
        assert_eq!(sample.voltage, 230.5);
        assert_eq!(sample.current, 15.2);
        assert_eq!(sample.power, 3.5);
        assert_eq!(sim.tick_count(), 1);
        assert!(sim.alerts().is_empty());
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = SimConfig {
            alert_capacity: 0,
            ..SimConfig::default()
        };
        assert!(Simulation::builder().config(config).build().is_err());
    }

    #[test]
    fn step_notifies_sample_observers() {
        let sim = Simulation::builder().seed(1).build().unwrap();
        let seen = counter();
        let seen_cb = seen.clone();
        sim.on_sample(move |sample| {
            assert!(sample.is_within_limits());
            seen_cb.fetch_add(1, Ordering::SeqCst);
        });
        for _ in 0..3 {
            sim.step();
        }
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let sim = Simulation::builder().seed(1).build().unwrap();
        let seen = counter();
        let seen_cb = seen.clone();
        let id = sim.on_sample(move |_| {
            seen_cb.fetch_add(1, Ordering::SeqCst);
        });
        sim.step();
        assert!(sim.unsubscribe(id));
        sim.step();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert!(!sim.unsubscribe(id));
    }

    #[test]
    fn rolled_event_enters_history_and_notifies() {
        // Draws: 3 walk, 4 stats, 4 vitals, then the event roll.
        let mut script = vec![0.5; 11];
        script.push(0.05);
        let sim = Simulation::builder()
            .entropy(ScriptedEntropy::new(script))
            .build()
            .unwrap();
        let seen = counter();
        let seen_cb = seen.clone();
        sim.on_alert(move |alert| {
            assert_eq!(alert.severity, Severity::Critical);
            seen_cb.fetch_add(1, Ordering::SeqCst);
        });

        let outcome = sim.step_detailed();
        assert_eq!(outcome.alerts.len(), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(sim.alerts()[0].message, crate::events::CRITICAL_EVENT);
    }

    #[test]
    fn steady_severity_raises_nothing() {
        let overloaded = FenceProfile::new(
            "FN-T",
            "Test",
            "Bench",
            1,
            TelemetrySample::new(230.0, 23.0, 3.0, 0),
        );
        let sim = Simulation::builder()
            .config(quiet_config())
            .entropy(FixedEntropy::NEUTRAL)
            .fence(overloaded)
            .build()
            .unwrap();

        // The baseline is already critical, so holding there is not news.
        let outcome = sim.step_detailed();
        assert_eq!(outcome.severity, Severity::Critical);
        assert!(outcome.alerts.is_empty());
    }

    #[test]
    fn severity_change_raises_sample_alert_once() {
        let sim = Simulation::builder()
            .config(quiet_config())
            .entropy(FixedEntropy::NEUTRAL)
            .build()
            .unwrap();
        sim.inner.engine.lock().latest = TelemetrySample::new(230.0, 23.0, 3.0, 0);

        let outcome = sim.step_detailed();
        assert_eq!(outcome.severity, Severity::Critical);
        assert_eq!(outcome.alerts.len(), 1);
        assert_eq!(outcome.alerts[0].message, "Critical line condition: current at 23.0 A");

        let outcome = sim.step_detailed();
        assert!(outcome.alerts.is_empty());
        assert_eq!(sim.alerts().len(), 1);
    }

    #[test]
    fn history_never_exceeds_capacity() {
        let sim = Simulation::builder().seed(42).build().unwrap();
        for _ in 0..500 {
            sim.step();
            assert!(sim.alerts().len() <= 5);
        }
        let snapshot = sim.snapshot();
        assert!(snapshot.history.len() <= 20);
    }

    #[test]
    fn trigger_test_alert_is_critical() {
        let sim = Simulation::builder().seed(1).build().unwrap();
        let seen = counter();
        let seen_cb = seen.clone();
        sim.on_alert(move |_| {
            seen_cb.fetch_add(1, Ordering::SeqCst);
        });
        let alert = sim.trigger_test_alert();
        assert_eq!(alert.severity, Severity::Critical);
        assert!(alert.message.starts_with("TEST ALERT"));
        assert_eq!(sim.alerts().len(), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn select_fence_resets_walk() {
        let sim = Simulation::builder().seed(5).build().unwrap();
        for _ in 0..10 {
            sim.step();
        }
        let wayanad = FenceProfile::find("FN-003").unwrap();
        sim.select_fence(wayanad.clone());

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.fence.id, "FN-003");
        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.latest.voltage, wayanad.baseline.voltage);
        assert_eq!(snapshot.history.len(), 1);
    }

    #[test]
    fn callbacks_may_reenter_the_simulation() {
        let sim = Simulation::builder().seed(8).build().unwrap();
        let handle = sim.clone();
        let seen = counter();
        let seen_cb = seen.clone();
        sim.on_sample(move |sample| {
            assert_eq!(handle.snapshot().latest, *sample);
            seen_cb.fetch_add(1, Ordering::SeqCst);
        });
        sim.step();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn start_then_stop_fires_no_tick() {
        let sim = Simulation::builder().seed(1).build().unwrap();
        let seen = counter();
        let seen_cb = seen.clone();
        sim.on_sample(move |_| {
            seen_cb.fetch_add(1, Ordering::SeqCst);
        });

        assert!(sim.start());
        assert!(sim.stop());
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(seen.load(Ordering::SeqCst), 0);
        assert!(sim.alerts().is_empty());
        assert_eq!(sim.status(), Lifecycle::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn running_ticks_once_per_interval() {
        let sim = Simulation::builder().seed(1).build().unwrap();
        let seen = counter();
        let seen_cb = seen.clone();
        sim.on_sample(move |_| {
            seen_cb.fetch_add(1, Ordering::SeqCst);
        });

        assert!(sim.start());
        assert_eq!(sim.status(), Lifecycle::Running);

        tokio::time::sleep(Duration::from_millis(1_900)).await;
        assert_eq!(seen.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2_200)).await;
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        assert!(sim.stop());
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(sim.tick_count(), 2);
    }

    #[test]
    fn timer_tick_respects_stop_flag_under_lock() {
        let sim = Simulation::builder().seed(1).build().unwrap();
        let seen = counter();
        let seen_cb = seen.clone();
        sim.on_sample(move |_| {
            seen_cb.fetch_add(1, Ordering::SeqCst);
        });

        let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
        assert!(matches!(sim.inner.try_tick(&stop_rx), TickAttempt::Ticked));
        assert_eq!(sim.tick_count(), 1);

        stop_tx.send(true).unwrap();
        assert!(matches!(sim.inner.try_tick(&stop_rx), TickAttempt::Stopped));
        assert_eq!(sim.tick_count(), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn timer_tick_does_not_wait_for_a_busy_engine() {
        let sim = Simulation::builder().seed(1).build().unwrap();
        let (_stop_tx, stop_rx) = tokio::sync::watch::channel(false);

        let held = sim.inner.engine.lock();
        assert!(matches!(sim.inner.try_tick(&stop_rx), TickAttempt::Busy));
        drop(held);

        assert!(matches!(sim.inner.try_tick(&stop_rx), TickAttempt::Ticked));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_tick_is_applied_after_stop_returns() {
        let config = SimConfig {
            tick_interval_ms: 1,
            ..SimConfig::default()
        };
        let sim = Simulation::builder().config(config).seed(1).build().unwrap();

        assert!(sim.start());
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(sim.stop());

        let ticks = sim.tick_count();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(sim.tick_count(), ticks);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_start_and_stop_are_noops() {
        let sim = Simulation::builder().seed(1).build().unwrap();
        assert!(!sim.stop());
        assert!(sim.start());
        assert!(!sim.start());
        assert!(sim.stop());
        assert!(!sim.stop());
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_flips_lifecycle() {
        let sim = Simulation::builder().seed(1).build().unwrap();
        assert_eq!(sim.toggle(), Lifecycle::Running);
        assert!(sim.snapshot().lifecycle.is_running());
        assert_eq!(sim.toggle(), Lifecycle::Stopped);
    }
}
