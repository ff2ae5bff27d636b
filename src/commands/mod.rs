//! Command dispatch and handlers.

pub mod generate;
pub mod install;
pub mod show;

use tracing::{info, warn};

use crate::cassette::session::RecordingSession;
use crate::cli::{Command, StoreArgs};
use crate::config::Settings;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler and print its output.
///
/// When `CLIENTID_RECORD` is set to a directory, store and generator
/// interactions are recorded to per-port cassettes beneath it.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let output = match command {
        Command::Generate { length, no_letters, no_numbers } => {
            generate::run(*length, !*no_letters, !*no_numbers)?
        }
        Command::Install(args) => with_context(args, install::run_with_context)?,
        Command::Show(args) => with_context(args, show::run_with_context)?,
    };
    println!("{output}");
    Ok(())
}

/// Builds the context for a store-backed command, runs it, and finishes
/// any recording session afterwards, even when the command failed.
fn with_context<F>(args: &StoreArgs, handler: F) -> Result<String, String>
where
    F: FnOnce(&ServiceContext, &Settings) -> Result<String, String>,
{
    let settings = Settings::from_env().with_overrides(args.store.clone(), args.key.clone());

    let (ctx, session) = if let Some(root) = &settings.record_dir {
        let (ctx, session) = ServiceContext::recording_at(&settings, root)?;
        info!(dir = %session.output_dir().display(), "recording port interactions");
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&settings), None)
    };

    run_then_finish(ctx, session, |ctx| handler(ctx, &settings))
}

/// Runs `handler`, then saves the recording. A failed save is logged and
/// never replaces the handler's own result.
fn run_then_finish<F>(
    ctx: ServiceContext,
    session: Option<RecordingSession>,
    handler: F,
) -> Result<String, String>
where
    F: FnOnce(&ServiceContext) -> Result<String, String>,
{
    let result = handler(&ctx);

    if let Some(session) = session {
        // Recording adapters hold the recorders until the context is gone.
        drop(ctx);
        if let Err(e) = finish_recording(session) {
            warn!(error = %e, "failed to save recording");
            eprintln!("Warning: recording not saved: {e}");
        }
    }

    result
}

fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    info!(dir = %output_dir.display(), "recording saved");
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
