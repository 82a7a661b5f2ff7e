//! Keeps a dashboard snapshot current while change notifications arrive.
//!
//! Every notification triggers a full re-read and re-aggregation; the worker
//! holds no per-row state of its own.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, TryRecvError};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use invoicedash_events::{ChangeFeed, Subscription};

use crate::change::InvoiceChange;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::snapshot::DashboardSnapshot;
use crate::source::InvoiceSource;

const TICK: Duration = Duration::from_millis(250);

/// Handle to control and join the background worker.
#[derive(Debug)]
struct WorkerHandle {
    shutdown: mpsc::Sender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    fn shutdown(mut self) {
        let _ = self.shutdown.send(());
        if let Some(j) = self.join.take() {
            let _ = j.join();
        }
    }
}

#[derive(Debug)]
struct Shared {
    snapshot: RwLock<DashboardSnapshot>,
    generation: AtomicU64,
}

impl Shared {
    /// Swap in a fresh snapshot, then bump the generation. A poisoned lock is
    /// recovered so the published generation always matches the stored snapshot.
    fn publish(&self, snapshot: DashboardSnapshot) {
        let mut guard = match self.snapshot.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("dashboard snapshot lock poisoned; recovering");
                poisoned.into_inner()
            }
        };
        *guard = snapshot;
        drop(guard);
        self.generation.fetch_add(1, Ordering::Release);
    }
}

/// A dashboard snapshot refreshed from a change feed.
#[derive(Debug)]
pub struct LiveDashboard {
    shared: Arc<Shared>,
    worker: WorkerHandle,
}

impl LiveDashboard {
    /// Load the initial snapshot and start refreshing on each notification.
    ///
    /// The subscription is taken before the first load so a change landing in
    /// between is not missed.
    pub fn spawn<S, F>(source: S, feed: &F, config: DashboardConfig) -> Result<Self, DashboardError>
    where
        S: InvoiceSource + 'static,
        F: ChangeFeed<InvoiceChange> + ?Sized,
    {
        let subscription = feed.subscribe();
        let initial = DashboardSnapshot::load(&source, &config)?;

        let shared = Arc::new(Shared {
            snapshot: RwLock::new(initial),
            generation: AtomicU64::new(0),
        });

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let worker_shared = Arc::clone(&shared);
        let join = thread::Builder::new()
            .name("invoicedash-live".to_string())
            .spawn(move || worker_loop(subscription, shutdown_rx, &source, &config, &worker_shared))?;

        Ok(Self {
            shared,
            worker: WorkerHandle {
                shutdown: shutdown_tx,
                join: Some(join),
            },
        })
    }

    /// The most recently computed snapshot.
    pub fn current(&self) -> DashboardSnapshot {
        match self.shared.snapshot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of refreshes completed since spawn (the initial load is 0).
    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    /// Block until at least `generation` refreshes happened or `timeout` elapses.
    pub fn wait_for_generation(&self, generation: u64, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.generation() < generation {
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(5));
        }
        true
    }

    /// Request graceful shutdown and wait for the worker to stop.
    pub fn shutdown(self) {
        self.worker.shutdown();
    }
}

fn worker_loop<S>(
    subscription: Subscription<InvoiceChange>,
    shutdown_rx: mpsc::Receiver<()>,
    source: &S,
    config: &DashboardConfig,
    shared: &Shared,
) where
    S: InvoiceSource,
{
    loop {
        match shutdown_rx.try_recv() {
            Ok(()) | Err(TryRecvError::Disconnected) => break,
            Err(TryRecvError::Empty) => {}
        }

        match subscription.recv_timeout(TICK) {
            Ok(change) => {
                debug!(
                    invoice_id = %change.invoice_id(),
                    change = change.kind(),
                    "invoice changed; re-aggregating"
                );
                match DashboardSnapshot::load(source, config) {
                    Ok(snapshot) => {
                        shared.publish(snapshot);
                    }
                    Err(err) => {
                        warn!(error = %err, "dashboard refresh failed; keeping previous snapshot");
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}
