//! Serves recorded outcomes back to replaying adapters.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Outcome, Port};

/// Queues of recorded outcomes, one per port and method.
///
/// Separate queues mean a replay only has to call each method in the
/// recorded order, not interleave `get`, `set` and `generate` exactly as
/// the recording did.
pub struct CassetteReplayer {
    pending: HashMap<(Port, String), VecDeque<(u64, Outcome)>>,
}

impl CassetteReplayer {
    /// Queues every interaction of `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut pending: HashMap<(Port, String), VecDeque<(u64, Outcome)>> = HashMap::new();
        for interaction in &cassette.interactions {
            pending
                .entry((interaction.port, interaction.method.clone()))
                .or_default()
                .push_back((interaction.seq, interaction.output.clone()));
        }
        Self { pending }
    }

    /// Number of outcomes not yet served for `port::method`.
    #[must_use]
    pub fn remaining(&self, port: Port, method: &str) -> usize {
        self.pending.get(&(port, method.to_string())).map_or(0, VecDeque::len)
    }

    /// Takes the next recorded outcome for `port::method`.
    ///
    /// # Panics
    ///
    /// Panics with `Cassette exhausted` when the cassette has no further
    /// outcome for the call, listing what it still holds.
    pub fn next_outcome(&mut self, port: Port, method: &str) -> Outcome {
        let next = self
            .pending
            .get_mut(&(port, method.to_string()))
            .and_then(VecDeque::pop_front);
        match next {
            Some((_seq, outcome)) => outcome,
            None => panic!(
                "Cassette exhausted: no recorded {port}::{method} call left. Still queued: [{}]",
                self.describe_pending()
            ),
        }
    }

    fn describe_pending(&self) -> String {
        let mut queued: Vec<String> = self
            .pending
            .iter()
            .filter_map(|((port, method), queue)| {
                queue.front().map(|(seq, _)| format!("{port}::{method} x{} from seq {seq}", queue.len()))
            })
            .collect();
        queued.sort();
        queued.join(", ")
    }
}
