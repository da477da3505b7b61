//! Settings hot-reload.
//!
//! Watches the settings file's directory and reports changes to that file.
//! The host polls [`SettingsWatcher::poll`] from its event loop and calls
//! [`BoxEngine::apply_settings`](crate::engine::BoxEngine::apply_settings)
//! with the reloaded settings.

use crate::error::SettingsResult;
use crate::settings::EngineSettings;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use tracing::{debug, warn};

pub use crate::settings::default_settings_path;

/// What happened to the settings file
#[derive(Debug)]
pub enum SettingsEvent {
    /// File was modified and reloaded successfully
    Changed(EngineSettings),
    /// File was deleted
    Deleted,
    /// File changed but could not be loaded, or the watcher failed
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Start watching `path`. The file's parent directory must exist.
    pub fn new(path: PathBuf) -> SettingsResult<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), "Watching settings file");

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending file events; returns the most recent one that concerns
    /// the settings file, if any.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(e) = self.classify(&event) {
                        latest = Some(e);
                    }
                }
                Ok(Err(e)) => latest = Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("Settings watcher channel disconnected");
                    break;
                }
            }
        }
        latest
    }

    fn classify(&self, event: &Event) -> Option<SettingsEvent> {
        let file_name = self.path.file_name()?;
        if !event.paths.iter().any(|p| p.file_name() == Some(file_name)) {
            return None;
        }
        match event.kind {
            EventKind::Remove(_) => Some(SettingsEvent::Deleted),
            EventKind::Create(_) | EventKind::Modify(_) => {
                Some(match EngineSettings::load_from(&self.path) {
                    Ok(settings) => SettingsEvent::Changed(settings),
                    Err(e) => SettingsEvent::Error(e.to_string()),
                })
            }
            _ => None,
        }
    }
}
