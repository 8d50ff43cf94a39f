//! Mutable state of one generation run.

use std::collections::HashMap;

use chrono::Local;
use serde::Serialize;

use crate::{
    Diagnostic, DiagnosticSink, GeneratedUnit, GeneratorConfig, Routine, SymbolTable,
    TraversalOrder, TypePair, WorkList, diagnostic::Phase,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalState {
    /// Root pair enqueued, nothing processed
    Seeded,
    /// At least one pair taken from the work-list
    Draining,
    /// Work-list exhausted
    Done,
}

/// Work-list, symbol table, routines and diagnostics owned by a single run.
#[derive(Debug)]
pub struct EmissionSession {
    state: TraversalState,
    worklist: WorkList,
    symbols: SymbolTable,
    routines: Vec<Routine>,
    diagnostics: Vec<Diagnostic>,
    /// Source type -> destination of the first routine taking it
    overloads: HashMap<String, String>,
}

impl EmissionSession {
    pub fn new(root: TypePair, order: TraversalOrder) -> Self {
        let mut worklist = WorkList::new(order);
        worklist.push(root);
        Self {
            state: TraversalState::Seeded,
            worklist,
            symbols: SymbolTable::new(),
            routines: Vec::new(),
            diagnostics: Vec::new(),
            overloads: HashMap::new(),
        }
    }

    pub fn state(&self) -> TraversalState {
        self.state
    }

    /// Take the next pair, moving to `Done` once the work-list is empty.
    pub fn next_pair(&mut self) -> Option<TypePair> {
        let pair = self.worklist.pop();
        self.state = match pair {
            Some(_) => TraversalState::Draining,
            None => TraversalState::Done,
        };
        pair
    }

    /// Enqueue an implied pair. Returns `false` if it was already seen.
    pub fn enqueue(&mut self, pair: &TypePair) -> bool {
        if self.worklist.has_seen(pair) {
            return false;
        }
        self.worklist.push(pair.clone())
    }

    /// Record that `pair` gets a routine, warning when its source type
    /// already has one (`transform(S)` overloads would clash).
    pub fn claim_overload(&mut self, pair: &TypePair) {
        match self.overloads.get(&pair.source) {
            Some(first) if first != &pair.destination => {
                let message = format!(
                    "transform({}) is generated for both '{}' and '{}'; the overloads clash",
                    pair.source, first, pair.destination
                );
                tracing::warn!("{}", message);
                self.diagnostics
                    .report(Diagnostic::warning(Phase::Traverse, message).at(&pair.source));
            }
            Some(_) => {}
            None => {
                self.overloads
                    .insert(pair.source.clone(), pair.destination.clone());
            }
        }
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn diagnostics_mut(&mut self) -> &mut Vec<Diagnostic> {
        &mut self.diagnostics
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn push_routine(&mut self, routine: Routine) {
        self.routines.push(routine);
    }

    /// Assemble the compilation unit.
    pub fn finish(self, config: &GeneratorConfig) -> GeneratedUnit {
        GeneratedUnit {
            package: config.package.clone(),
            class_name: config.class_name.clone(),
            generated_at: config.timestamp.then(|| Local::now().to_rfc2822()),
            imports: self.symbols.imports(),
            routines: self.routines,
            diagnostics: self.diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let mut session = EmissionSession::new(TypePair::new("a.A", "b.A"), TraversalOrder::Lifo);
        assert_eq!(session.state(), TraversalState::Seeded);

        assert_eq!(session.next_pair(), Some(TypePair::new("a.A", "b.A")));
        assert_eq!(session.state(), TraversalState::Draining);

        assert!(session.enqueue(&TypePair::new("a.B", "b.B")));
        assert!(!session.enqueue(&TypePair::new("a.A", "b.A")));
        assert!(session.next_pair().is_some());
        assert_eq!(session.next_pair(), None);
        assert_eq!(session.state(), TraversalState::Done);
    }

    #[test]
    fn test_overload_clash_warns_once_per_extra_destination() {
        let mut session = EmissionSession::new(TypePair::new("a.A", "b.A"), TraversalOrder::Lifo);
        session.claim_overload(&TypePair::new("a.A", "b.A"));
        session.claim_overload(&TypePair::new("a.B", "b.B"));
        assert!(session.diagnostics_mut().is_empty());

        session.claim_overload(&TypePair::new("a.A", "b.Other"));
        let diagnostics = session.diagnostics_mut();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("'b.A' and 'b.Other'"));
    }

    #[test]
    fn test_finish_without_timestamp() {
        let config = GeneratorConfig {
            timestamp: false,
            ..GeneratorConfig::default()
        };
        let mut session = EmissionSession::new(TypePair::new("a.A", "b.A"), TraversalOrder::Lifo);
        session.symbols_mut().display("b.A");
        let unit = session.finish(&config);
        assert_eq!(unit.generated_at, None);
        assert_eq!(unit.imports, vec!["b.A"]);
        assert_eq!(unit.class_name, "JaxbTransformer");
    }
}
