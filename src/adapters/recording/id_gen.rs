//! Recording adapter for the `IdGenerator` port.

use std::sync::{Arc, Mutex};

use super::record_call;
use crate::cassette::format::Port;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::GenerateError;
use crate::generator::{ClientId, GenerationOptions};
use crate::ports::IdGenerator;

/// Records generator calls while delegating to an inner implementation.
pub struct RecordingIdGenerator {
    inner: Box<dyn IdGenerator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingIdGenerator {
    /// Wraps `inner`, recording into `recorder`.
    #[must_use]
    pub fn new(inner: Box<dyn IdGenerator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl IdGenerator for RecordingIdGenerator {
    fn generate(&self, options: &GenerationOptions) -> Result<ClientId, GenerateError> {
        let result = self.inner.generate(options);
        record_call(&self.recorder, Port::IdGen, "generate", options, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveIdGenerator;
    use crate::cassette::format::{Cassette, Outcome};

    #[test]
    fn records_options_and_generated_id() {
        let dir = std::env::temp_dir().join("clientid_rec_id_gen_test");
        let path = dir.join("id_gen.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test", "abc")));

        let id = {
            let gen = RecordingIdGenerator::new(Box::new(LiveIdGenerator::new()), Arc::clone(&recorder));
            gen.generate(&GenerationOptions::new().with_length(12)).unwrap()
        };

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        let interaction = &cassette.interactions[0];
        assert_eq!(interaction.port, Port::IdGen);
        assert_eq!(interaction.method, "generate");
        assert_eq!(interaction.input["length"], 12);
        assert_eq!(interaction.output, Outcome::ok(id));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn records_generation_errors() {
        let dir = std::env::temp_dir().join("clientid_rec_id_gen_err_test");
        let path = dir.join("id_gen.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test", "abc")));

        {
            let gen = RecordingIdGenerator::new(Box::new(LiveIdGenerator::new()), Arc::clone(&recorder));
            let options = GenerationOptions::new().with_letters(false).with_numbers(false);
            assert!(gen.generate(&options).is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();
        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(
            cassette.interactions[0].output,
            Outcome::err(GenerateError::EmptyAlphabet.to_string())
        );

        let _ = std::fs::remove_dir_all(&dir);
    }
}
