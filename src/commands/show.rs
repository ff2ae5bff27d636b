//! `clientid show` command.

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::install::ClientIdInstaller;

/// Printed when the store holds no identifier.
pub const NOT_INSTALLED: &str = "No client id installed.";

/// Returns the stored identifier, or a notice when there is none.
///
/// # Errors
///
/// Returns an error string if the store cannot be read.
pub fn run_with_context(ctx: &ServiceContext, settings: &Settings) -> Result<String, String> {
    let current = ClientIdInstaller::with_key(ctx, settings.key.as_str())
        .current()
        .map_err(|e| format!("Failed to read client id: {e}"))?;
    Ok(current.unwrap_or_else(|| NOT_INSTALLED.to_string()))
}
