//! Preference file watcher for live reload.
//!
//! Watches the preference file's directory and reports changes to the file
//! so the application can re-read it and call
//! [`Settings::reload`](crate::Settings::reload). Editors often save in
//! bursts, so events are debounced.

use crate::error::{Result, SettingsError};
use notify::{Config as NotifyConfig, Event, PollWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

/// The watched preference file changed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceChangeEvent {
    /// Canonical path of the preference file.
    pub path: PathBuf,
}

/// Watches a preference file and queues change events.
pub struct PreferenceWatcher {
    /// Kept alive to keep watching.
    _watcher: Box<dyn Watcher + Send>,
    event_receiver: Receiver<PreferenceChangeEvent>,
}

impl std::fmt::Debug for PreferenceWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceWatcher").finish_non_exhaustive()
    }
}

/// Shared state of one event handler.
#[derive(Clone)]
struct HandlerState {
    filename: OsString,
    canonical_path: PathBuf,
    debounce_delay: Duration,
    tx: Sender<PreferenceChangeEvent>,
    last_event_time: Arc<Mutex<Option<Instant>>>,
}

impl HandlerState {
    fn handle(&self, result: std::result::Result<Event, notify::Error>) {
        let Ok(event) = result else {
            return;
        };

        // Create covers editors and our own atomic rename-into-place saves.
        if !matches!(
            event.kind,
            notify::EventKind::Modify(_) | notify::EventKind::Create(_)
        ) {
            return;
        }

        let matches_file = event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|f| f == self.filename));
        if !matches_file {
            return;
        }

        if !self.debounce() {
            log::trace!("Debouncing preference change event");
            return;
        }

        let change = PreferenceChangeEvent {
            path: self.canonical_path.clone(),
        };
        log::info!("Preference file changed: {}", change.path.display());
        if let Err(e) = self.tx.send(change) {
            log::error!("Failed to send preference change event: {}", e);
        }
    }

    /// True when enough time has passed since the last delivered event.
    fn debounce(&self) -> bool {
        let now = Instant::now();
        let mut last = self.last_event_time.lock();
        match *last {
            Some(last_time) if now.duration_since(last_time) < self.debounce_delay => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}

impl PreferenceWatcher {
    /// Start watching `path`.
    ///
    /// Uses the platform's native watcher and falls back to polling every
    /// 500 ms when the native backend is unavailable.
    ///
    /// # Errors
    /// Fails if the file does not exist or neither backend can watch its directory.
    pub fn new(path: &Path, debounce_delay_ms: u64) -> Result<Self> {
        if !path.exists() {
            return Err(SettingsError::InvalidPath {
                path: path.to_path_buf(),
                reason: "preference file not found",
            });
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let filename = canonical
            .file_name()
            .ok_or_else(|| SettingsError::InvalidPath {
                path: canonical.clone(),
                reason: "path has no file name",
            })?
            .to_os_string();
        let parent_dir = canonical
            .parent()
            .ok_or_else(|| SettingsError::InvalidPath {
                path: canonical.clone(),
                reason: "path has no parent directory",
            })?
            .to_path_buf();

        let (tx, rx) = channel();
        let state = HandlerState {
            filename,
            canonical_path: canonical.clone(),
            debounce_delay: Duration::from_millis(debounce_delay_ms),
            tx,
            last_event_time: Arc::new(Mutex::new(None)),
        };

        let mut watcher = Self::create_watcher(state)?;
        watcher
            .watch(&parent_dir, RecursiveMode::NonRecursive)
            .map_err(SettingsError::watch)?;

        log::info!("Preference hot reload: watching {}", canonical.display());

        Ok(Self {
            _watcher: watcher,
            event_receiver: rx,
        })
    }

    fn create_watcher(state: HandlerState) -> Result<Box<dyn Watcher + Send>> {
        let fallback_state = state.clone();

        match notify::recommended_watcher(move |res: notify::Result<Event>| state.handle(res)) {
            Ok(w) => {
                log::debug!("Preference watcher: using native backend");
                Ok(Box::new(w))
            }
            Err(e) => {
                log::warn!(
                    "Preference watcher: native backend unavailable ({}); falling back to PollWatcher",
                    e
                );
                let poll_watcher = PollWatcher::new(
                    move |res: notify::Result<Event>| fallback_state.handle(res),
                    NotifyConfig::default().with_poll_interval(Duration::from_millis(500)),
                )
                .map_err(SettingsError::watch)?;
                Ok(Box::new(poll_watcher))
            }
        }
    }

    /// Next pending change event, without blocking.
    pub fn try_recv(&self) -> Option<PreferenceChangeEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Wait up to `timeout` for the next change event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<PreferenceChangeEvent> {
        self.event_receiver.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::EventKind;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_watcher_creation_with_existing_file() {
        let temp_dir: TempDir = TempDir::new().expect("Failed to create temp dir");
        let path: PathBuf = temp_dir.path().join("preferences.yaml");
        fs::write(&path, "fontsize: \"12\"\n").expect("Failed to write preferences");

        let result = PreferenceWatcher::new(&path, 100);
        assert!(result.is_ok(), "watcher should start on an existing file");
    }

    #[test]
    fn test_watcher_creation_with_nonexistent_file() {
        let temp_dir: TempDir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("preferences.yaml");
        let result = PreferenceWatcher::new(&path, 100);
        assert!(matches!(result, Err(SettingsError::InvalidPath { .. })));
    }

    #[test]
    fn test_no_initial_events() {
        let temp_dir: TempDir = TempDir::new().expect("Failed to create temp dir");
        let path: PathBuf = temp_dir.path().join("preferences.yaml");
        fs::write(&path, "fontsize: \"12\"\n").expect("Failed to write preferences");

        let watcher = PreferenceWatcher::new(&path, 100).expect("Failed to create watcher");
        assert!(watcher.try_recv().is_none());
    }

    #[test]
    fn test_file_change_detection() {
        let temp_dir: TempDir = TempDir::new().expect("Failed to create temp dir");
        let path: PathBuf = temp_dir.path().join("preferences.yaml");
        fs::write(&path, "fontsize: \"12\"\n").expect("Failed to write preferences");

        let watcher = PreferenceWatcher::new(&path, 50).expect("Failed to create watcher");
        std::thread::sleep(Duration::from_millis(100));

        fs::write(&path, "fontsize: \"14\"\n").expect("Failed to write preferences");

        // Delivery timing is platform-dependent; only check the event shape.
        if let Some(event) = watcher.recv_timeout(Duration::from_millis(700)) {
            assert!(event.path.ends_with("preferences.yaml"));
        }
    }

    fn handler_state(
        debounce_delay: Duration,
    ) -> (HandlerState, Receiver<PreferenceChangeEvent>) {
        let (tx, rx) = channel();
        let state = HandlerState {
            filename: OsString::from("preferences.yaml"),
            canonical_path: PathBuf::from("/tmp/vimterm/preferences.yaml"),
            debounce_delay,
            tx,
            last_event_time: Arc::new(Mutex::new(None)),
        };
        (state, rx)
    }

    fn event(kind: EventKind, path: &str) -> notify::Result<Event> {
        Ok(Event::new(kind).add_path(PathBuf::from(path)))
    }

    fn modify_event(path: &str) -> notify::Result<Event> {
        event(EventKind::Modify(ModifyKind::Any), path)
    }

    #[test]
    fn test_handler_ignores_other_files() {
        let (state, rx) = handler_state(Duration::ZERO);
        state.handle(modify_event("/tmp/vimterm/preferences.yaml.tmp"));
        state.handle(modify_event("/tmp/vimterm/defaults.yaml"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_handler_ignores_removal() {
        let (state, rx) = handler_state(Duration::ZERO);
        state.handle(event(
            EventKind::Remove(RemoveKind::File),
            "/tmp/vimterm/preferences.yaml",
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_handler_sends_event_for_preference_file() {
        let (state, rx) = handler_state(Duration::ZERO);
        state.handle(modify_event("/tmp/vimterm/preferences.yaml"));

        let event = rx.try_recv().expect("change to the preference file must be sent");
        assert_eq!(event.path, PathBuf::from("/tmp/vimterm/preferences.yaml"));
    }

    #[test]
    fn test_handler_create_counts_as_change() {
        let (state, rx) = handler_state(Duration::ZERO);
        state.handle(event(
            EventKind::Create(CreateKind::File),
            "/elsewhere/preferences.yaml",
        ));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_debounce_drops_rapid_events() {
        let (tx, _rx) = channel();
        let state = HandlerState {
            filename: OsString::from("preferences.yaml"),
            canonical_path: PathBuf::from("/tmp/preferences.yaml"),
            debounce_delay: Duration::from_secs(60),
            tx,
            last_event_time: Arc::new(Mutex::new(None)),
        };
        assert!(state.debounce());
        assert!(!state.debounce());
    }

    #[test]
    fn test_debug_impl() {
        let temp_dir: TempDir = TempDir::new().expect("Failed to create temp dir");
        let path: PathBuf = temp_dir.path().join("preferences.yaml");
        fs::write(&path, "fontsize: \"12\"\n").expect("Failed to write preferences");

        let watcher = PreferenceWatcher::new(&path, 100).expect("Failed to create watcher");
        assert!(format!("{:?}", watcher).contains("PreferenceWatcher"));
    }
}
