use std::sync::mpsc;
use std::sync::{atomic::AtomicBool, Arc};

use crate::train::progress::ProgressStats;

/// Configuration for a `train_online` run.
///
/// # Fields
/// - `steps`: number of single-sample updates to perform
/// - `report_every`: window size for progress logging; `0` reports only once
///   at the end
/// - `progress_tx`: optional channel sender, one `ProgressStats` per window.
///   If the receiver is dropped the loop stops early.
/// - `stop_flag`: optional atomic flag; when set to `true` from another
///   thread the loop stops before the next step.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub steps: usize,
    pub report_every: usize,
    pub progress_tx: Option<mpsc::Sender<ProgressStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` reporting every 100 steps, with no progress
    /// channel and no stop flag.
    pub fn new(steps: usize) -> Self {
        TrainConfig {
            steps,
            report_every: 100,
            progress_tx: None,
            stop_flag: None,
        }
    }

    pub fn report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    pub fn progress_tx(mut self, tx: mpsc::Sender<ProgressStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }
}
