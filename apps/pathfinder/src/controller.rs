//! Application state controller.
//!
//! Owns the single `AppState` and is the only thing that mutates it. Accepts
//! two user actions (`submit`, `reset`) and the analyzer's asynchronous
//! outcome. At most one analysis is in flight per controller.
//!
//! Every entry into `Analyzing` and every reset bumps a generation counter.
//! A completion carries the generation it was started with and is dropped if
//! the counter has moved on, so a reset during `Analyzing` is never
//! overwritten by the abandoned call.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::analysis::Analyzer;
use crate::errors::{AnalysisFailed, FailureCause, InputError};
use crate::models::{AnalysisRequest, CareerAnalysis};
use crate::state::AppState;

/// Result of a `submit` call.
#[derive(Debug)]
pub enum Submission {
    /// Moved to `Analyzing`; the call runs on `task`.
    Started { generation: u64, task: JoinHandle<()> },
    /// A call is already in flight; nothing was sent.
    AlreadyAnalyzing,
    /// Showing results or an error; reset first.
    NotIdle,
    /// Blank resume or interests; state unchanged.
    Rejected(InputError),
}

impl Submission {
    pub fn is_started(&self) -> bool {
        matches!(self, Submission::Started { .. })
    }

    /// The spawned call, if one was started.
    pub fn into_task(self) -> Option<JoinHandle<()>> {
        match self {
            Submission::Started { task, .. } => Some(task),
            _ => None,
        }
    }
}

struct Shared {
    analyzer: Arc<dyn Analyzer>,
    timeout: Duration,
    /// Current generation. Held while publishing so check-and-set is atomic.
    generation: Mutex<u64>,
    state_tx: watch::Sender<AppState>,
}

/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct AnalysisController {
    shared: Arc<Shared>,
}

impl AnalysisController {
    /// Every analyzer call is bounded by `timeout`.
    pub fn new(analyzer: Arc<dyn Analyzer>, timeout: Duration) -> Self {
        let (state_tx, _) = watch::channel(AppState::Idle);
        Self {
            shared: Arc::new(Shared {
                analyzer,
                timeout,
                generation: Mutex::new(0),
                state_tx,
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.shared.state_tx.borrow().clone()
    }

    /// Receiver that observes every transition.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.shared.state_tx.subscribe()
    }

    /// Starts an analysis from `Idle`.
    ///
    /// The transition to `Analyzing` happens before this returns; the call
    /// itself runs on a spawned task. Must be called within a tokio runtime.
    pub fn submit(
        &self,
        resume_text: impl Into<String>,
        interests_text: impl Into<String>,
    ) -> Submission {
        let mut generation = self.lock_generation();

        match &*self.shared.state_tx.borrow() {
            AppState::Idle => {}
            AppState::Analyzing => {
                debug!("Submit ignored: analysis already in flight");
                return Submission::AlreadyAnalyzing;
            }
            other => {
                debug!("Submit ignored in {} state", other.label());
                return Submission::NotIdle;
            }
        }

        let request = match AnalysisRequest::new(resume_text, interests_text) {
            Ok(request) => request,
            Err(e) => {
                warn!("Submit rejected: {e}");
                return Submission::Rejected(e);
            }
        };

        *generation += 1;
        let started = *generation;
        self.shared.state_tx.send_replace(AppState::Analyzing);
        drop(generation);
        info!("Analysis {started} started");

        let controller = self.clone();
        let task = tokio::spawn(async move {
            let outcome = controller.run(&request).await;
            controller.complete(started, outcome);
        });

        Submission::Started {
            generation: started,
            task,
        }
    }

    /// Returns to `Idle`, discarding any analysis or error.
    ///
    /// From `Analyzing` this abandons the in-flight call; its result will be
    /// ignored. Returns `false` if already idle.
    pub fn reset(&self) -> bool {
        let mut generation = self.lock_generation();

        let previous = {
            let state = self.shared.state_tx.borrow();
            if matches!(*state, AppState::Idle) {
                return false;
            }
            state.label()
        };

        *generation += 1;
        self.shared.state_tx.send_replace(AppState::Idle);
        info!("Reset from {previous} state");
        true
    }

    async fn run(&self, request: &AnalysisRequest) -> Result<CareerAnalysis, AnalysisFailed> {
        let timeout = self.shared.timeout;
        match tokio::time::timeout(timeout, self.shared.analyzer.analyze(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(FailureCause::Timeout(timeout).into()),
        }
    }

    /// Applies an outcome if `started` is still the current generation.
    fn complete(&self, started: u64, outcome: Result<CareerAnalysis, AnalysisFailed>) -> bool {
        let generation = self.lock_generation();
        if *generation != started {
            debug!(
                "Discarding stale outcome of analysis {started} (current generation {})",
                *generation
            );
            return false;
        }

        let next = match outcome {
            Ok(analysis) => {
                info!("Analysis {started} succeeded");
                AppState::Results(analysis)
            }
            Err(e) => {
                error!("Analysis {started} failed: {:?}", e.cause());
                AppState::Error(e.user_message().to_string())
            }
        };
        self.shared.state_tx.send_replace(next);
        true
    }

    fn lock_generation(&self) -> MutexGuard<'_, u64> {
        self.shared
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
