//! Type pairs and the deduplicating work-list.

use std::{
    collections::{HashSet, VecDeque},
    fmt,
};

use serde::Serialize;

use crate::TraversalOrder;

/// The unit of code generation: one routine converting `source` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypePair {
    pub source: String,
    pub destination: String,
}

impl TypePair {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Pending pairs plus every pair ever enqueued.
///
/// A pair is accepted at most once per run, so popping never yields
/// the same pair twice even when it is rediscovered after processing.
#[derive(Debug)]
pub struct WorkList {
    order: TraversalOrder,
    pending: VecDeque<TypePair>,
    seen: HashSet<TypePair>,
}

impl WorkList {
    pub fn new(order: TraversalOrder) -> Self {
        Self {
            order,
            pending: VecDeque::new(),
            seen: HashSet::new(),
        }
    }

    /// Enqueue a pair unless it was seen before. Returns whether it was added.
    pub fn push(&mut self, pair: TypePair) -> bool {
        if self.seen.contains(&pair) {
            return false;
        }
        self.seen.insert(pair.clone());
        self.pending.push_back(pair);
        true
    }

    pub fn pop(&mut self) -> Option<TypePair> {
        match self.order {
            TraversalOrder::Lifo => self.pending.pop_back(),
            TraversalOrder::Fifo => self.pending.pop_front(),
        }
    }

    pub fn has_seen(&self, pair: &TypePair) -> bool {
        self.seen.contains(pair)
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[cfg(test)]
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
