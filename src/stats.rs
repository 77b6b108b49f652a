//! Session bookkeeping for the encode driver.
//!
//! `SessionLog` tracks the traversal currently in progress and folds finished
//! traversals into running aggregates. `EncodeStats` is the frozen result
//! written into the container header.

use serde::Serialize;

/// Aggregate over every session of one encode run. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeStats {
    /// Number of sessions with at least one move.
    pub sessions: u32,
    /// Move count of the shortest session.
    pub shortest: u32,
    /// Move count of the longest session.
    pub longest: u32,
    /// Move labels of the shortest session, in play order.
    pub shortest_labels: Vec<String>,
}

impl EncodeStats {
    /// Print a human-readable summary to stderr.
    pub fn report(&self) {
        eprintln!(
            "Sessions: {} (shortest {} moves, longest {} moves)",
            self.sessions, self.shortest, self.longest
        );
        if !self.shortest_labels.is_empty() {
            eprintln!("Shortest session: {}", self.shortest_labels.join(" "));
        }
    }
}

/// Mutable tracker threaded through the encode loop. Local to one run, never
/// shared.
#[derive(Debug, Default)]
pub struct SessionLog {
    sessions: u32,
    shortest: Option<u32>,
    longest: u32,
    shortest_labels: Vec<String>,
    current_moves: u32,
    current_labels: Vec<String>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one applied move in the session under way.
    pub fn record(&mut self, label: String) {
        self.current_moves += 1;
        self.current_labels.push(label);
    }

    /// Moves recorded in the session under way.
    pub fn current_len(&self) -> u32 {
        self.current_moves
    }

    /// Close the session under way. Zero-move sessions contribute nothing.
    pub fn boundary(&mut self) {
        if self.current_moves == 0 {
            return;
        }
        self.sessions += 1;
        self.longest = self.longest.max(self.current_moves);
        // Strict minimum, so the earliest minimal session's labels survive.
        if self.shortest.map_or(true, |s| self.current_moves < s) {
            self.shortest = Some(self.current_moves);
            self.shortest_labels = std::mem::take(&mut self.current_labels);
        } else {
            self.current_labels.clear();
        }
        self.current_moves = 0;
    }

    /// Close any open session and freeze the aggregates.
    pub fn finish(mut self) -> EncodeStats {
        self.boundary();
        EncodeStats {
            sessions: self.sessions,
            shortest: self.shortest.unwrap_or(0),
            longest: self.longest,
            shortest_labels: self.shortest_labels,
        }
    }
}
