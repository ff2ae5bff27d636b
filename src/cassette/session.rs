//! Recording session managing per-port cassette recorders.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::warn;

use super::format::Port;
use super::recorder::CassetteRecorder;

/// Suffixes tried before giving up on a session directory name.
const MAX_DIR_ATTEMPTS: u32 = 100;

/// One recorder per port, writing `<port>.cassette.yaml` into a fresh
/// subdirectory of the chosen root.
pub struct RecordingSession {
    /// Recorder for store interactions.
    pub store: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for ID generator interactions.
    pub id_gen: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Starts a session writing under `<root>/<timestamp>-<pid>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if no session directory can be created.
    pub fn new(root: &Path) -> Result<Self, String> {
        let stem = format!(
            "{}-{}",
            Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f"),
            std::process::id()
        );
        let output_dir = claim_dir(root, &stem)?;
        let commit = get_commit_hash();

        let make_recorder = |port: Port| -> Arc<Mutex<CassetteRecorder>> {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{stem}-{port}"), commit.as_str())))
        };

        Ok(Self {
            store: make_recorder(Port::Store),
            id_gen: make_recorder(Port::IdGen),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes every port's cassette and returns the output directory.
    ///
    /// Recording adapters holding a recorder must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a file cannot be
    /// written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: Port) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.store, Port::Store)?;
        finish_one(self.id_gen, Port::IdGen)?;

        Ok(self.output_dir)
    }
}

/// Creates `<root>/<stem>`, or `<root>/<stem>-<n>` if another session
/// already took the name.
fn claim_dir(root: &Path, stem: &str) -> Result<PathBuf, String> {
    std::fs::create_dir_all(root)
        .map_err(|e| format!("Failed to create cassette directory {}: {e}", root.display()))?;

    for attempt in 0..MAX_DIR_ATTEMPTS {
        let dir = if attempt == 0 { root.join(stem) } else { root.join(format!("{stem}-{attempt}")) };
        match std::fs::create_dir(&dir) {
            Ok(()) => return Ok(dir),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(format!("Failed to create cassette directory {}: {e}", dir.display()))
            }
        }
    }
    Err(format!("No free cassette directory for {stem} under {}", root.display()))
}

/// Current git commit hash, or `"unknown"` outside a repository.
fn get_commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    if let Some(h) = hash {
        h
    } else {
        warn!("could not get git commit hash, using 'unknown'");
        "unknown".to_string()
    }
}
