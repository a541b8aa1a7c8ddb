//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages and collecting per-stage
//! sizes for diagnostics.

use std::time::{Duration, Instant};

pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_SIMILARITY: &str = "similarity";
pub const STAGE_CENTRALITY: &str = "centrality";
pub const STAGE_RELEVANCE: &str = "relevance";
pub const STAGE_SELECT: &str = "select";

/// Every stage, in execution order
pub const STAGES: [&str; 5] = [
    STAGE_TOKENIZE,
    STAGE_SIMILARITY,
    STAGE_CENTRALITY,
    STAGE_RELEVANCE,
    STAGE_SELECT,
];

/// Measurements for one completed stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageReport {
    /// Wall-clock time spent in the stage
    pub elapsed: Duration,
    /// Number of items the stage produced (sentences, matrix cells, picks)
    pub items: usize,
}

impl StageReport {
    pub fn new(elapsed: Duration, items: usize) -> Self {
        Self { elapsed, items }
    }
}

/// Simple stopwatch for stage timing
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Receives stage boundary notifications
///
/// Both methods default to no-ops so implementors only override what they
/// need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records every completed stage, in order
#[derive(Debug, Clone, Default)]
pub struct StageRecorder {
    pub reports: Vec<(&'static str, StageReport)>,
}

impl StageRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of completed stages in order
    pub fn stages(&self) -> Vec<&'static str> {
        self.reports.iter().map(|(name, _)| *name).collect()
    }

    /// Report for a stage, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Total time across recorded stages
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageRecorder {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
