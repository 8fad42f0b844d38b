// crates/core/src/poller.rs
//! Lifecycle owner for a single upload job.
//!
//! Submits a file to the job API, then re-reads the job on a fixed cadence
//! until it reaches a terminal status (`Completed`, `Failed` or `Cancelled`).
//! The interval lives inside the spawned polling task, so when no
//! non-terminal job is tracked there is no timer at all, not a timer that
//! ticks and no-ops.
//!
//! Every arm/disarm bumps a generation counter. The polling task checks the
//! counter before issuing a read and again before applying the response, so
//! a read that was in flight when the job was cancelled, cleared or
//! superseded can never resurrect stale state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use migration_view_api::{ApiError, JobApi};
use migration_view_types::{Job, JobId, JobStatus};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Fixed polling cadence.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks at most one upload job at a time.
///
/// Starting a new job supersedes tracking of the prior one without cancelling
/// it server-side; only an explicit [`JobPoller::cancel_job`] contacts the
/// server. Callers must not start a second creation request before the
/// previous `create_job` call settles; the poller does not deduplicate
/// concurrent creations.
pub struct JobPoller {
    api: Arc<dyn JobApi>,
    state_tx: watch::Sender<Option<Job>>,
    generation: Arc<AtomicU64>,
    poll_interval: Duration,
    on_completed: Arc<dyn Fn() + Send + Sync>,
}

impl JobPoller {
    /// Create a poller. `on_completed` fires at most once per job, only when
    /// a job transitions into `Completed` (never for `Failed`/`Cancelled`).
    pub fn new(api: Arc<dyn JobApi>, on_completed: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            api,
            state_tx: watch::channel(None).0,
            generation: Arc::new(AtomicU64::new(0)),
            poll_interval: POLL_INTERVAL,
            on_completed: Arc::new(on_completed),
        }
    }

    /// Override the polling cadence (tests use paused-clock intervals).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// The currently tracked job, if any.
    pub fn current(&self) -> Option<Job> {
        self.state_tx.borrow().clone()
    }

    /// Watch the tracked job. Receivers see every applied update, including
    /// the `None` written by cancel/clear.
    pub fn subscribe(&self) -> watch::Receiver<Option<Job>> {
        self.state_tx.subscribe()
    }

    /// Whether a poll task is armed: a non-null, non-terminal job is tracked.
    pub fn polling_active(&self) -> bool {
        self.state_tx
            .borrow()
            .as_ref()
            .is_some_and(|job| !job.is_terminal())
    }

    /// Submit `file` for server-side parse/validate and start tracking the
    /// returned job.
    ///
    /// On failure nothing changes: the previous job (if any) stays tracked
    /// and armed. An empty payload is rejected before any network call.
    pub async fn create_job(&self, name: &str, file: Vec<u8>) -> Result<Job, ApiError> {
        if file.is_empty() {
            return Err(ApiError::EmptyUpload);
        }
        let job = self.api.create_job(name, file).await?;

        // Supersede whatever was tracked before; its poll task (if any)
        // notices the bump and exits without another read.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_replace(Some(job.clone()));

        if job.status.is_terminal() {
            // Born terminal: never arm polling, but a completed job still
            // owes the caller its notification.
            if job.status == JobStatus::Completed {
                (self.on_completed)();
            }
        } else {
            self.spawn_poll_task(job.id.clone(), generation);
        }
        Ok(job)
    }

    /// Best-effort cancel: asks the server to stop the tracked job, and
    /// clears local tracking immediately regardless of what the server says.
    /// Safe to call with no active job.
    pub fn cancel_job(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let previous = self.state_tx.send_replace(None);
        let Some(job) = previous else { return };
        if job.is_terminal() {
            return;
        }
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            if let Err(e) = api.cancel_job(&job.id).await {
                tracing::warn!(job_id = %job.id, error = %e, "server-side cancel failed");
            }
        });
    }

    /// Drop local tracking without contacting the server (e.g. the caller is
    /// navigating away). No-op when nothing is tracked.
    pub fn clear_job(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state_tx.send_replace(None);
    }

    fn spawn_poll_task(&self, id: JobId, generation: u64) {
        let api = Arc::clone(&self.api);
        let state_tx = self.state_tx.clone();
        let current_generation = Arc::clone(&self.generation);
        let on_completed = Arc::clone(&self.on_completed);
        let poll_interval = self.poll_interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            // The next tick is only armed after the previous read settles;
            // reads for one job are never issued concurrently.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval's first tick fires immediately; the first read
            // belongs one full interval after arming.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if current_generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(job_id = %id, "job superseded or cleared; poll task exiting");
                    return;
                }
                match api.get_job(&id).await {
                    Ok(job) => {
                        if current_generation.load(Ordering::SeqCst) != generation {
                            // The job was cancelled/cleared while this read
                            // was in flight; the response is stale.
                            tracing::debug!(job_id = %id, "discarding stale poll response");
                            return;
                        }
                        let status = job.status;
                        state_tx.send_replace(Some(job));
                        if status.is_terminal() {
                            if status == JobStatus::Completed {
                                on_completed();
                            }
                            tracing::debug!(job_id = %id, status = status.as_str(), "job terminal; polling stopped");
                            return;
                        }
                    }
                    Err(e) => {
                        // Transient-failure tolerant: keep the last known
                        // state and retry on the next tick.
                        tracing::warn!(job_id = %id, error = %e, "poll read failed");
                    }
                }
            }
        });
    }
}
