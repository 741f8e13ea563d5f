//! Application driver: resolves settings from the CLI options and runs the
//! selected command.

use crate::cli::{Commands, RuntimeOptions};
use crate::report::SettingsReport;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use vimterm_settings::{PrefValue, PreferenceFile, PreferenceWatcher, ResourceDefaults, Settings};

/// Debounce for preference file change events.
const WATCH_DEBOUNCE_MS: u64 = 200;

/// Run the command selected on the command line.
pub fn run(options: RuntimeOptions) -> Result<()> {
    let defaults = load_defaults(options.defaults.as_deref())?;
    let mut prefs = open_preferences(options.prefs.as_deref())?;

    match options.command {
        Commands::Show { watch } => {
            let mut settings = Settings::new(&defaults, &prefs);
            print_report(&settings, &prefs)?;
            if watch {
                watch_preferences(&mut prefs, &mut settings)?;
            }
            Ok(())
        }
        Commands::Set { key, value } => {
            let stored = parse_pref_value(&value);
            log::info!("Setting preference {} = {:?}", key, stored);
            prefs.set(key, stored);
            prefs
                .save()
                .with_context(|| format!("Failed to save {}", prefs.path().display()))
        }
        Commands::Unset { key } => {
            if prefs.values_mut().remove(&key).is_none() {
                log::warn!("Preference {} is not set", key);
                return Ok(());
            }
            prefs
                .save()
                .with_context(|| format!("Failed to save {}", prefs.path().display()))
        }
    }
}

/// Interpret a command-line value the way a settings screen would store it.
pub fn parse_pref_value(raw: &str) -> PrefValue {
    match raw {
        "true" => PrefValue::Bool(true),
        "false" => PrefValue::Bool(false),
        _ => PrefValue::Str(raw.to_string()),
    }
}

fn load_defaults(path: Option<&Path>) -> Result<ResourceDefaults> {
    match path {
        Some(path) => ResourceDefaults::from_file(path)
            .with_context(|| format!("Failed to load defaults from {}", path.display())),
        None => Ok(ResourceDefaults::default()),
    }
}

fn open_preferences(path: Option<&Path>) -> Result<PreferenceFile> {
    match path {
        Some(path) => PreferenceFile::open(path)
            .with_context(|| format!("Failed to open preference file {}", path.display())),
        None => Ok(PreferenceFile::load_or_default()),
    }
}

fn print_report(settings: &Settings, prefs: &PreferenceFile) -> Result<()> {
    let report = SettingsReport::new(settings, Some(prefs.path()));
    print!("{}", report.to_yaml()?);
    Ok(())
}

/// Re-resolve and print the settings on every change until interrupted.
fn watch_preferences(prefs: &mut PreferenceFile, settings: &mut Settings) -> Result<()> {
    // The watcher needs an existing file to resolve its directory.
    if !prefs.path().exists() {
        prefs.save().context("Failed to create preference file")?;
    }

    let watcher = PreferenceWatcher::new(prefs.path(), WATCH_DEBOUNCE_MS)
        .context("Failed to watch preference file")?;

    loop {
        if watcher.recv_timeout(Duration::from_secs(1)).is_none() {
            continue;
        }
        match prefs.reload() {
            Ok(()) => {
                settings.reload(prefs);
                println!("---");
                print_report(settings, prefs)?;
            }
            Err(e) => log::warn!("Keeping previous settings: {}", e),
        }
    }
}
