//! Loading into the process environment.
//!
//! Responsibilities:
//! - Test the free `load_from_*` functions that write to `std::env`.
//! - Test that guards read variables already exported by the process.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::{EnvLoader, load_from_directory, load_from_file, load_from_string};
use crate::loader::options::LoadOptions;

const MOOD: &str = "_ENVCASCADE_TEST_MOOD";
const COLOR: &str = "_ENVCASCADE_TEST_COLOR";
const SHADE: &str = "_ENVCASCADE_TEST_SHADE";

#[test]
#[serial]
fn test_load_from_string_writes_process_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars_unset([MOOD, COLOR], || {
        let text = format!("{MOOD} = happy\nif {MOOD} is happy\n\t{COLOR} = yellow\n");
        load_from_string(&text, LoadOptions::default(), "<test>").unwrap();

        assert_eq!(std::env::var(MOOD).as_deref(), Ok("happy"));
        assert_eq!(std::env::var(COLOR).as_deref(), Ok("yellow"));
    });
}

#[test]
#[serial]
fn test_exported_variable_drives_guard() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([(MOOD, Some("sad")), (COLOR, None::<&str>)], || {
        let text = format!(
            "if {MOOD} is happy\n\t{COLOR} = yellow\nif {MOOD} isnt happy\n\t{COLOR} = blue\n"
        );
        load_from_string(&text, LoadOptions::default(), "<test>").unwrap();

        assert_eq!(std::env::var(COLOR).as_deref(), Ok("blue"));
    });
}

#[test]
#[serial]
fn test_load_from_directory_into_process_env() {
    let _lock = env_lock().lock().unwrap();
    let temp = TempDir::new().unwrap();
    let sub = temp.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(temp.path().join(".env"), format!("{COLOR} = magenta\n")).unwrap();
    fs::write(
        sub.join(".env"),
        format!("if {COLOR} is magenta\n\t{SHADE} = light\n"),
    )
    .unwrap();

    temp_env::with_vars_unset([COLOR, SHADE], || {
        load_from_directory(&sub, LoadOptions::default()).unwrap();

        assert_eq!(std::env::var(COLOR).as_deref(), Ok("magenta"));
        assert_eq!(std::env::var(SHADE).as_deref(), Ok("light"));
    });
}

#[test]
#[serial]
fn test_load_from_file_with_prefix_strip() {
    let _lock = env_lock().lock().unwrap();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app.env");
    fs::write(&path, format!("app.{COLOR} = teal\nignored = 1\n")).unwrap();

    let options = LoadOptions {
        prefix: Some("app.".to_string()),
        strip_prefix: true,
        ..Default::default()
    };

    temp_env::with_vars_unset([COLOR, "ignored"], || {
        load_from_file(&path, options).unwrap();

        assert_eq!(std::env::var(COLOR).as_deref(), Ok("teal"));
        assert!(std::env::var_os("ignored").is_none());
    });
}

#[test]
#[serial]
fn test_default_loader_targets_process_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var_unset(SHADE, || {
        EnvLoader::default()
            .with_initial_var(SHADE, "dark")
            .load_from_string("", "<empty>")
            .unwrap();

        assert_eq!(std::env::var(SHADE).as_deref(), Ok("dark"));
    });
}

#[test]
#[serial]
fn test_nul_value_is_skipped_without_panicking() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars_unset([MOOD, COLOR], || {
        let text = format!("{MOOD} = a\0b\n{COLOR} = plain\n");
        load_from_string(&text, LoadOptions::default(), "<test>").unwrap();

        assert!(std::env::var_os(MOOD).is_none());
        assert_eq!(std::env::var(COLOR).as_deref(), Ok("plain"));
    });
}

#[test]
#[serial]
fn test_prefix_equal_to_whole_key_is_skipped_when_stripping() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars_unset([COLOR, "x"], || {
        let options = LoadOptions {
            prefix: Some("app.x".to_string()),
            strip_prefix: true,
            ..Default::default()
        };
        let text = format!("app.x = 1\napp.x{COLOR} = teal\n");
        load_from_string(&text, options, "<test>").unwrap();

        assert_eq!(std::env::var(COLOR).as_deref(), Ok("teal"));
        assert!(std::env::var_os("x").is_none());
    });
}
