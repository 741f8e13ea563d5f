use std::fs;
use tempfile::TempDir;
use vimterm::app::{parse_pref_value, run};
use vimterm::cli::{Commands, RuntimeOptions};
use vimterm::report::{DerivedValues, SettingsReport};
use vimterm_settings::schemes::{BLACK, WHITE};
use vimterm_settings::{
    ColorScheme, MemoryPreferences, PrefValue, PreferenceFile, PreferenceSource,
    ResourceDefaults, Settings,
};

fn options(command: Commands, prefs: &std::path::Path) -> RuntimeOptions {
    RuntimeOptions {
        command,
        prefs: Some(prefs.to_path_buf()),
        defaults: None,
        log_level: None,
    }
}

#[test]
fn test_parse_pref_value() {
    assert_eq!(parse_pref_value("true"), PrefValue::Bool(true));
    assert_eq!(parse_pref_value("false"), PrefValue::Bool(false));
    assert_eq!(parse_pref_value("14"), PrefValue::Str("14".to_string()));
    assert_eq!(parse_pref_value("/bin/zsh"), PrefValue::Str("/bin/zsh".to_string()));
}

#[test]
fn test_set_and_unset_write_preference_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("preferences.yaml");

    run(options(
        Commands::Set {
            key: "fontsize".to_string(),
            value: "14".to_string(),
        },
        &path,
    ))
    .expect("set");
    run(options(
        Commands::Set {
            key: "zoombottom".to_string(),
            value: "true".to_string(),
        },
        &path,
    ))
    .expect("set");

    let file = PreferenceFile::open(&path).expect("open");
    assert_eq!(file.get_string("fontsize", ""), "14");
    assert!(file.get_bool("zoombottom", false));

    run(options(
        Commands::Unset {
            key: "fontsize".to_string(),
        },
        &path,
    ))
    .expect("unset");

    let file = PreferenceFile::open(&path).expect("open");
    assert!(!file.values().contains("fontsize"));
    assert!(file.values().contains("zoombottom"));
}

#[test]
fn test_show_fails_on_malformed_preference_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("preferences.yaml");
    fs::write(&path, "fontsize: [\n").expect("write");

    let err = run(options(Commands::Show { watch: false }, &path))
        .expect_err("malformed file must be reported");
    assert!(format!("{err:#}").contains("preferences.yaml"));
}

#[test]
fn test_show_with_missing_defaults_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut opts = options(
        Commands::Show { watch: false },
        &temp_dir.path().join("preferences.yaml"),
    );
    opts.defaults = Some(temp_dir.path().join("defaults.yaml"));

    assert!(run(opts).is_err());
}

#[test]
fn test_report_includes_derived_values() {
    let prefs: MemoryPreferences = [("color", "0"), ("backaction", "4")].into_iter().collect();
    let settings = Settings::new(&ResourceDefaults::default(), &prefs);

    let derived = DerivedValues::from_settings(&settings);
    assert_eq!(derived.color_scheme, ColorScheme::new(0, BLACK, 7, WHITE));
    assert!(derived.back_key_sends_character);
    assert_eq!(derived.back_key_character, 9);

    let yaml = SettingsReport::new(&settings, None)
        .to_yaml()
        .expect("render");
    assert!(yaml.contains("back_key_action: sends_tab"));
    assert!(yaml.contains("back_key_character: 9"));
    assert!(!yaml.contains("preference_file"));
}
