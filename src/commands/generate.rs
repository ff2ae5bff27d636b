//! `clientid generate` command.

use crate::generator::{generate_client_id, GenerationOptions};

/// Generates an identifier without reading or writing any store.
///
/// # Errors
///
/// Returns an error string for a zero length or when both character
/// classes are disabled.
pub fn run(length: usize, letters: bool, numbers: bool) -> Result<String, String> {
    let options =
        GenerationOptions::new().with_length(length).with_letters(letters).with_numbers(numbers);
    generate_client_id(&options).map_err(|e| e.to_string())
}
