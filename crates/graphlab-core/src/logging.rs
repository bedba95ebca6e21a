use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::graph::VertexId;

/// One vertex visit, stamped with when it happened
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitEntry {
    pub timestamp: DateTime<Utc>,
    pub step: usize,
    pub vertex: VertexId,
}

impl VisitEntry {
    pub fn new(step: usize, vertex: VertexId) -> Self {
        Self {
            timestamp: Utc::now(),
            step,
            vertex,
        }
    }
}

pub trait Loggable {
    fn record_visit(&mut self, vertex: VertexId);
    fn visits(&self) -> &[VisitEntry];
}

/// Ordered record of the visits an algorithm made
///
/// Feed it from any visit callback; a renderer can replay the entries
/// as a timed highlight animation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitLog {
    entries: Vec<VisitEntry>,
}

impl VisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited vertices in order
    pub fn order(&self) -> Vec<VertexId> {
        self.entries.iter().map(|e| e.vertex).collect()
    }

    /// Time between the first and the last visit
    pub fn span(&self) -> Duration {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => last.timestamp - first.timestamp,
            _ => Duration::zero(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Loggable for VisitLog {
    fn record_visit(&mut self, vertex: VertexId) {
        let step = self.entries.len();
        self.entries.push(VisitEntry::new(step, vertex));
    }

    fn visits(&self) -> &[VisitEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_log_records_in_order() {
        let mut log = VisitLog::new();
        let a = VertexId::new();
        let b = VertexId::new();

        log.record_visit(a);
        log.record_visit(b);

        assert_eq!(log.len(), 2);
        assert_eq!(log.order(), vec![a, b]);
        assert_eq!(log.visits()[1].step, 1);
        assert!(log.span() >= Duration::zero());
    }

    #[test]
    fn test_empty_log() {
        let mut log = VisitLog::new();
        assert!(log.is_empty());
        assert_eq!(log.span(), Duration::zero());

        log.record_visit(VertexId::new());
        log.clear();
        assert!(log.is_empty());
    }
}
