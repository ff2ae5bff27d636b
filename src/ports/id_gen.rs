//! ID generator port for producing client identifiers.

use crate::error::GenerateError;
use crate::generator::{ClientId, GenerationOptions};

/// Generates client identifiers.
///
/// The installer calls through this trait rather than the free
/// [`generate_client_id`](crate::generator::generate_client_id) so that
/// tests and cassette playback can observe or substitute generation.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier shaped by `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options describe an empty alphabet or a
    /// zero length.
    fn generate(&self, options: &GenerationOptions) -> Result<ClientId, GenerateError>;
}
