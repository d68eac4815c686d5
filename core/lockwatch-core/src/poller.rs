//! Periodic lockfile poll that feeds a single status consumer.
//!
//! ```text
//!            start()                    stop() / drop
//!   Idle ──────────────► Active ──────────────────────► Idle
//!                        │  ▲
//!                        └──┘ start() again: stop, then restart
//! ```
//!
//! `start()` polls once on the caller's thread, then a timer thread ticks at a
//! fixed rate. Each tick runs locate → read → parse → deliver to completion
//! before the next one begins. Every tick delivers, even when nothing changed;
//! deduplication is the consumer's business.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::{LockwatchConfig, DEFAULT_POLL_INTERVAL_MS};
use crate::lockfile::LockfileReader;
use crate::status::{ConnectionStatus, StatusNotification};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(DEFAULT_POLL_INTERVAL_MS);

/// Receives one notification per tick.
///
/// Runs synchronously on the polling thread, so it should return quickly.
pub trait StatusConsumer: Send {
    fn deliver(&mut self, notification: &StatusNotification);

    /// `false` once the display target is gone. Delivery is skipped for that
    /// tick; polling continues.
    fn is_available(&self) -> bool {
        true
    }
}

/// Adapts a closure into a [`StatusConsumer`].
pub struct FnConsumer<F>(pub F);

impl<F> StatusConsumer for FnConsumer<F>
where
    F: FnMut(&StatusNotification) + Send,
{
    fn deliver(&mut self, notification: &StatusNotification) {
        (self.0)(notification)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Active,
}

struct TickContext {
    reader: LockfileReader,
    consumer: Option<Box<dyn StatusConsumer>>,
}

impl TickContext {
    fn tick(&mut self) -> ConnectionStatus {
        let record = self.reader.read(None);
        let status = ConnectionStatus::from_record(record.as_ref());
        debug!(connected = status.is_connected(), "Lockfile poll tick");

        match self.consumer.as_mut() {
            Some(consumer) if consumer.is_available() => {
                let notification = StatusNotification::from(status.clone());
                // A panicking consumer loses this delivery only; the timer keeps going.
                let delivered =
                    panic::catch_unwind(AssertUnwindSafe(|| consumer.deliver(&notification)));
                if delivered.is_err() {
                    warn!("Status consumer panicked; delivery skipped");
                }
            }
            _ => debug!("No available consumer; skipping delivery"),
        }
        status
    }
}

struct Timer {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Owns the timer and the consumer slot. Instances are independent.
pub struct PollLoop {
    interval: Duration,
    context: Arc<Mutex<TickContext>>,
    timer: Option<Timer>,
}

impl PollLoop {
    /// A zero interval is bumped to one millisecond.
    pub fn new(reader: LockfileReader, interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            context: Arc::new(Mutex::new(TickContext {
                reader,
                consumer: None,
            })),
            timer: None,
        }
    }

    pub fn from_config(config: &LockwatchConfig) -> Self {
        Self::new(LockfileReader::new(config.locator()), config.poll_interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> PollState {
        if self.timer.is_some() {
            PollState::Active
        } else {
            PollState::Idle
        }
    }

    /// Installs the consumer, replacing any previous one.
    pub fn subscribe(&self, consumer: impl StatusConsumer + 'static) {
        lock(&self.context).consumer = Some(Box::new(consumer));
    }

    pub fn unsubscribe(&self) {
        lock(&self.context).consumer = None;
    }

    /// Runs one tick on the caller's thread, outside the timer.
    pub fn poll_once(&self) -> ConnectionStatus {
        lock(&self.context).tick()
    }

    /// Polls immediately, then every `interval`. Restarts if already active.
    pub fn start(&mut self) {
        self.stop();
        self.poll_once();

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let context = Arc::clone(&self.context);
        let interval = self.interval;

        let handle = thread::spawn(move || {
            let mut next_tick = Instant::now() + interval;
            loop {
                let wait = next_tick.saturating_duration_since(Instant::now());
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {
                        lock(&context).tick();
                        next_tick += interval;
                        // A slow tick skips missed slots instead of bursting.
                        let now = Instant::now();
                        if next_tick < now {
                            next_tick = now + interval;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        self.timer = Some(Timer { stop_tx, handle });
        info!(interval_ms = interval.as_millis() as u64, "Lockfile polling started");
    }

    /// Cancels the timer. A tick already running finishes first. No-op when idle.
    pub fn stop(&mut self) {
        let Some(timer) = self.timer.take() else {
            return;
        };
        let _ = timer.stop_tx.send(());
        if timer.handle.join().is_err() {
            warn!("Lockfile poll thread panicked");
        }
        info!("Lockfile polling stopped");
    }
}

impl Default for PollLoop {
    fn default() -> Self {
        Self::new(LockfileReader::default(), DEFAULT_POLL_INTERVAL)
    }
}

impl Drop for PollLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

// Poisoning is recovered so a panic elsewhere in a tick can't wedge later ticks.
fn lock(context: &Mutex<TickContext>) -> MutexGuard<'_, TickContext> {
    context.lock().unwrap_or_else(PoisonError::into_inner)
}
