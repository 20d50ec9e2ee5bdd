//! Capture-session storage seam.
//!
//! Provides:
//! - A typed repository trait for swing analyses and session summaries
//! - An in-memory repository for tests and single-process use
//! - The capture-session service that records swings and recomputes summaries
//!
//! The scoring engine never touches a repository; the service receives one
//! explicitly and owns the store-then-recompute sequence.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::metrics::analytics::session::{
    aggregate_with, SessionSummary, DEFAULT_WAGGLE_FLOOR_MPH,
};
use crate::metrics::analytics::swing_analysis::CbSwingAnalysis;
use crate::storage::config::EngineConfig;

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("Duplicate analysis: {0}")]
    DuplicateAnalysis(Uuid),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Persistence for per-swing analyses and their session summaries.
pub trait SwingAnalysisRepository: Send + Sync {
    /// Store an analysis under a session. Analyses are write-once.
    fn insert(&self, session_id: Uuid, analysis: CbSwingAnalysis) -> Result<(), StoreError>;

    /// Store an analysis, then summarize the session and save the summary,
    /// all as one step. No other write may land between the three.
    fn insert_and_summarize(
        &self,
        session_id: Uuid,
        analysis: CbSwingAnalysis,
        summarize: &dyn Fn(&[CbSwingAnalysis]) -> SessionSummary,
    ) -> Result<SessionSummary, StoreError>;

    /// Re-summarize a session from its stored analyses and save the result
    /// as one step. None when the session has no analyses.
    fn resummarize(
        &self,
        session_id: Uuid,
        summarize: &dyn Fn(&[CbSwingAnalysis]) -> SessionSummary,
    ) -> Result<Option<SessionSummary>, StoreError>;

    /// All analyses for a session in insertion order; empty if none.
    fn list_for_session(&self, session_id: Uuid) -> Result<Vec<CbSwingAnalysis>, StoreError>;

    /// Stored summary for a session, if one was saved.
    fn summary(&self, session_id: Uuid) -> Result<Option<SessionSummary>, StoreError>;
}

#[derive(Debug, Default)]
struct SessionRecords {
    analyses: Vec<CbSwingAnalysis>,
    summary: Option<SessionSummary>,
}

impl SessionRecords {
    fn push(&mut self, analysis: CbSwingAnalysis) -> Result<(), StoreError> {
        if self.analyses.iter().any(|a| a.id == analysis.id) {
            return Err(StoreError::DuplicateAnalysis(analysis.id));
        }
        self.analyses.push(analysis);
        Ok(())
    }
}

/// Repository held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemorySwingStore {
    sessions: RwLock<HashMap<Uuid, SessionRecords>>,
}

impl InMemorySwingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with at least one stored record.
    pub fn session_count(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }
}

impl SwingAnalysisRepository for InMemorySwingStore {
    fn insert(&self, session_id: Uuid, analysis: CbSwingAnalysis) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().map_err(|_| StoreError::LockPoisoned)?;
        sessions.entry(session_id).or_default().push(analysis)
    }

    fn insert_and_summarize(
        &self,
        session_id: Uuid,
        analysis: CbSwingAnalysis,
        summarize: &dyn Fn(&[CbSwingAnalysis]) -> SessionSummary,
    ) -> Result<SessionSummary, StoreError> {
        let mut sessions = self.sessions.write().map_err(|_| StoreError::LockPoisoned)?;
        let records = sessions.entry(session_id).or_default();

        records.push(analysis)?;
        let summary = summarize(&records.analyses);
        records.summary = Some(summary.clone());
        Ok(summary)
    }

    fn resummarize(
        &self,
        session_id: Uuid,
        summarize: &dyn Fn(&[CbSwingAnalysis]) -> SessionSummary,
    ) -> Result<Option<SessionSummary>, StoreError> {
        let mut sessions = self.sessions.write().map_err(|_| StoreError::LockPoisoned)?;
        let Some(records) = sessions.get_mut(&session_id) else {
            return Ok(None);
        };
        if records.analyses.is_empty() {
            return Ok(None);
        }

        let summary = summarize(&records.analyses);
        records.summary = Some(summary.clone());
        Ok(Some(summary))
    }

    fn list_for_session(&self, session_id: Uuid) -> Result<Vec<CbSwingAnalysis>, StoreError> {
        let sessions = self.sessions.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(sessions
            .get(&session_id)
            .map(|r| r.analyses.clone())
            .unwrap_or_default())
    }

    fn summary(&self, session_id: Uuid) -> Result<Option<SessionSummary>, StoreError> {
        let sessions = self.sessions.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(sessions.get(&session_id).and_then(|r| r.summary.clone()))
    }
}

/// Records swings into capture sessions and keeps summaries current.
pub struct CaptureSessionService<R: SwingAnalysisRepository> {
    repository: R,
    waggle_floor_mph: f32,
}

impl<R: SwingAnalysisRepository> CaptureSessionService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            waggle_floor_mph: DEFAULT_WAGGLE_FLOOR_MPH,
        }
    }

    /// Service using the configured waggle floor, matching
    /// `SwingAnalyzer::summarize` for the same config.
    pub fn from_config(repository: R, config: &EngineConfig) -> Self {
        Self::new(repository).with_waggle_floor(config.session.waggle_floor_mph)
    }

    /// Override the waggle floor used for summaries.
    pub fn with_waggle_floor(mut self, waggle_floor_mph: f32) -> Self {
        self.waggle_floor_mph = waggle_floor_mph;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Store a swing analysis and return the recomputed session summary.
    pub fn record_swing(
        &self,
        session_id: Uuid,
        analysis: CbSwingAnalysis,
    ) -> Result<SessionSummary, StoreError> {
        let floor = self.waggle_floor_mph;
        self.repository.insert_and_summarize(session_id, analysis, &|all: &[CbSwingAnalysis]| {
            aggregate_with(all, floor)
        })
    }

    /// Full recompute of a session summary from every stored analysis.
    pub fn recompute(&self, session_id: Uuid) -> Result<SessionSummary, StoreError> {
        let floor = self.waggle_floor_mph;
        self.repository
            .resummarize(session_id, &|all: &[CbSwingAnalysis]| aggregate_with(all, floor))?
            .ok_or(StoreError::SessionNotFound(session_id))
    }

    /// Stored summary, failing if the session has never been summarized.
    pub fn summary(&self, session_id: Uuid) -> Result<SessionSummary, StoreError> {
        self.repository
            .summary(session_id)?
            .ok_or(StoreError::SessionNotFound(session_id))
    }
}
