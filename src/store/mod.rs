//! Trace repository used by collaborators that feed the batch engine.
//!
//! The proof core never touches this store; it exists as the seam between
//! the engine and whatever layer records per-period scores. Records are
//! keyed by agent and listed in insertion order, with an explicit lifecycle
//! (construct at startup, `flush` on teardown) instead of an implicit
//! shared collection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::batch::Period;
use crate::hash::{hash, Hash};
use crate::ser::{push_framed, push_u64};

/// One recorded batch of scored periods for an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceRecord {
    /// Deterministic identifier derived from the record commitment.
    pub trace_id: String,
    pub agent_id: String,
    /// Recording time, Unix seconds.
    pub recorded_at: u64,
    /// Commitment over the agent id and period data.
    pub commitment: Hash,
    pub periods: Vec<Period>,
}

impl TraceRecord {
    /// Builds a record, deriving its commitment and identifier.
    pub fn new(agent_id: &str, recorded_at: u64, periods: Vec<Period>) -> Self {
        let mut bytes = Vec::new();
        push_framed(&mut bytes, agent_id.as_bytes());
        push_u64(&mut bytes, recorded_at);
        for period in &periods {
            push_u64(&mut bytes, u64::from(period.score));
            push_u64(&mut bytes, period.timestamp);
        }
        let commitment = hash(&bytes);
        let trace_id = format!("tr_{}", &commitment.to_hex()[..24]);
        Self {
            trace_id,
            agent_id: agent_id.to_owned(),
            recorded_at,
            commitment,
            periods,
        }
    }
}

/// Aggregate view over every period recorded for one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorSummary {
    /// Number of periods across all records.
    pub period_count: usize,
    /// Mean score across all periods, floored.
    pub average_score: u32,
    pub start_timestamp: u64,
    pub end_timestamp: u64,
}

/// Repository abstraction over trace storage.
pub trait TraceStore {
    /// Stores a record under its agent.
    fn put(&mut self, record: TraceRecord);
    /// Records for an agent in insertion order.
    fn list(&self, agent_id: &str) -> Vec<&TraceRecord>;
    /// Looks up a record by trace id.
    fn get(&self, trace_id: &str) -> Option<&TraceRecord>;

    /// Every period recorded for an agent, ordered by timestamp; the shape
    /// consumed by the batch proof generators.
    fn collect_periods(&self, agent_id: &str) -> Vec<Period> {
        let mut periods: Vec<Period> = self
            .list(agent_id)
            .iter()
            .flat_map(|record| record.periods.iter().copied())
            .collect();
        periods.sort_by_key(|period| period.timestamp);
        periods
    }

    /// Aggregate behavioral summary for an agent; `None` when no periods
    /// are recorded.
    fn behavior_summary(&self, agent_id: &str) -> Option<BehaviorSummary> {
        let periods = self.collect_periods(agent_id);
        let first = periods.first()?;
        let last = periods.last()?;
        let total: u64 = periods.iter().map(|p| u64::from(p.score)).sum();
        Some(BehaviorSummary {
            period_count: periods.len(),
            average_score: (total / periods.len() as u64) as u32,
            start_timestamp: first.timestamp,
            end_timestamp: last.timestamp,
        })
    }
}

/// Process-local trace store.
#[derive(Debug, Default)]
pub struct InMemoryTraceStore {
    records: HashMap<String, TraceRecord>,
    by_agent: HashMap<String, Vec<String>>,
}

impl InMemoryTraceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every stored record.
    pub fn flush(&mut self) {
        self.records.clear();
        self.by_agent.clear();
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TraceStore for InMemoryTraceStore {
    fn put(&mut self, record: TraceRecord) {
        self.by_agent
            .entry(record.agent_id.clone())
            .or_default()
            .push(record.trace_id.clone());
        self.records.insert(record.trace_id.clone(), record);
    }

    fn list(&self, agent_id: &str) -> Vec<&TraceRecord> {
        self.by_agent
            .get(agent_id)
            .map(|ids| ids.iter().filter_map(|id| self.records.get(id)).collect())
            .unwrap_or_default()
    }

    fn get(&self, trace_id: &str) -> Option<&TraceRecord> {
        self.records.get(trace_id)
    }
}
