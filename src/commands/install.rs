//! `clientid install` command.

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::install::ClientIdInstaller;

/// Returns the installed identifier, creating it on first use.
///
/// # Errors
///
/// Returns an error string if the store or the generator fails.
pub fn run_with_context(ctx: &ServiceContext, settings: &Settings) -> Result<String, String> {
    ClientIdInstaller::with_key(ctx, settings.key.as_str())
        .install()
        .map_err(|e| format!("Failed to install client id: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::{LiveIdGenerator, MemoryStore};
    use crate::ports::Store;

    #[test]
    fn installs_under_configured_key() {
        let ctx = ServiceContext::new(Box::new(MemoryStore::new()), Box::new(LiveIdGenerator::new()));
        let settings = Settings::default().with_overrides(None, Some("tabId".into()));

        let id = run_with_context(&ctx, &settings).unwrap();

        assert_eq!(ctx.store.get("tabId").unwrap(), Some(id));
    }

    #[test]
    fn second_run_prints_same_id() {
        let ctx = ServiceContext::new(Box::new(MemoryStore::new()), Box::new(LiveIdGenerator::new()));
        let settings = Settings::default();

        let first = run_with_context(&ctx, &settings).unwrap();
        let second = run_with_context(&ctx, &settings).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn corrupt_store_is_reported() {
        let dir = std::env::temp_dir().join("clientid_cmd_install_corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("store.json");
        std::fs::write(&path, "{oops").unwrap();
        let settings = Settings::default().with_overrides(Some(path), None);
        let ctx = ServiceContext::live(&settings);

        let err = run_with_context(&ctx, &settings).unwrap_err();
        assert!(err.starts_with("Failed to install client id"));
        assert!(err.contains("corrupt"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
