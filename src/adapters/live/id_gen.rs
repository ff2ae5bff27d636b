//! Live adapter for the `IdGenerator` port.

use crate::error::GenerateError;
use crate::generator::{generate_client_id, ClientId, GenerationOptions};
use crate::ports::IdGenerator;

/// Live ID generator sampling from the thread-local RNG.
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate(&self, options: &GenerationOptions) -> Result<ClientId, GenerateError> {
        generate_client_id(options)
    }
}
