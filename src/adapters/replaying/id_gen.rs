//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use super::replay_call;
use crate::cassette::format::Port;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::GenerateError;
use crate::generator::{ClientId, GenerationOptions};
use crate::ports::IdGenerator;

/// Replays recorded identifiers from a cassette.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a replaying ID generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate(&self, _options: &GenerationOptions) -> Result<ClientId, GenerateError> {
        replay_call(&self.replayer, Port::IdGen, "generate").map_err(GenerateError::Recorded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::make_replayer;
    use crate::cassette::format::Outcome;

    #[test]
    fn replays_ids_in_order() {
        let gen = ReplayingIdGenerator::new(make_replayer(vec![
            (Port::IdGen, "generate", Outcome::ok("id-001")),
            (Port::IdGen, "generate", Outcome::ok("id-002")),
        ]));
        let options = GenerationOptions::default();
        assert_eq!(gen.generate(&options).unwrap(), "id-001");
        assert_eq!(gen.generate(&options).unwrap(), "id-002");
    }

    #[test]
    fn replays_recorded_errors() {
        let gen = ReplayingIdGenerator::new(make_replayer(vec![(
            Port::IdGen,
            "generate",
            Outcome::err("letters and numbers are both disabled"),
        )]));
        let err = gen.generate(&GenerationOptions::default()).unwrap_err();
        assert!(err.to_string().contains("both disabled"));
    }
}
