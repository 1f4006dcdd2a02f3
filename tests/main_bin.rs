//! Integration tests that lock main-binary behavior over real files.

use std::fs;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

const PALETTE_JSON: &str = r##"{
    "wallpaper": "/home/user/Pictures/dunes.png",
    "special": {"background": "#11121d", "foreground": "#c8c8d0"},
    "colors": {
        "color0": "#11121d", "color1": "#c34864", "color2": "#56a36c",
        "color3": "#c7b36b", "color4": "#5a70a8", "color5": "#9b66a8",
        "color6": "#5aa8a0", "color7": "#c8c8d0"
    }
}"##;

const CONFIG_JSON: &str = r##"{
    "default_server_name": "matrix.org",
    "settingDefaults": {
        "custom_themes": [
            {"name": "pywal-element", "is_dark": false, "colors": {"accent-color": "#stale"}},
            {"name": "other", "is_dark": true}
        ]
    }
}
"##;

struct Fixture {
    dir: TempDir,
    palette: std::path::PathBuf,
    config: std::path::PathBuf,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().expect("create temp dir");
    let palette = dir.path().join("colors.json");
    let config = dir.path().join("config.json");
    fs::write(&palette, PALETTE_JSON).expect("write palette fixture");
    fs::write(&config, CONFIG_JSON).expect("write config fixture");
    Fixture { dir, palette, config }
}

fn run_binary(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_pywal-element");
    Command::new(bin)
        .args(args)
        .env_remove("PYWAL_ELEMENT_PALETTE")
        .env_remove("PYWAL_ELEMENT_CONFIG")
        .output()
        .expect("run pywal-element")
}

#[test]
fn main_patches_config_and_writes_backup() {
    let fx = fixture();
    let output = run_binary(&[
        "--palette",
        fx.palette.to_str().expect("utf-8 path"),
        "--config",
        fx.config.to_str().expect("utf-8 path"),
        "--verbose",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let backup = fx.dir.path().join(".backup.config.json");
    let backup_bytes = fs::read(&backup).expect("backup exists");
    assert_eq!(backup_bytes, CONFIG_JSON.as_bytes());

    let patched: Value =
        serde_json::from_str(&fs::read_to_string(&fx.config).expect("read patched config"))
            .expect("patched config is valid JSON");
    let themes = patched["settingDefaults"]["custom_themes"]
        .as_array()
        .expect("custom_themes is a list");
    assert_eq!(themes.len(), 2, "stale entry replaced, not duplicated");
    assert_eq!(themes[0]["name"], "other");
    assert_eq!(themes[1]["name"], "pywal-element");
    assert_eq!(themes[1]["is_dark"], true);
    assert_eq!(themes[1]["colors"]["accent-color"], "#56a36c");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("backup written"));
    assert!(stderr.contains("config updated"));
}

#[test]
fn main_dry_run_prints_and_writes_nothing() {
    let fx = fixture();
    let output = run_binary(&[
        "--palette",
        fx.palette.to_str().expect("utf-8 path"),
        "--config",
        fx.config.to_str().expect("utf-8 path"),
        "--dry-run",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"pywal-element\""));
    assert!(stdout.contains("\"accent-color\": \"#56a36c\""));

    let config = fs::read_to_string(&fx.config).expect("read config");
    assert_eq!(config, CONFIG_JSON, "config untouched");
    assert!(!fx.dir.path().join(".backup.config.json").exists());
}

#[test]
fn main_fails_cleanly_on_missing_palette() {
    let fx = fixture();
    let output = run_binary(&[
        "--palette",
        "/definitely/not/here/colors.json",
        "--config",
        fx.config.to_str().expect("utf-8 path"),
    ]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load palette"));

    let config = fs::read_to_string(&fx.config).expect("read config");
    assert_eq!(config, CONFIG_JSON, "config untouched on failure");
}

#[test]
fn main_fails_cleanly_on_unmapped_slot() {
    let fx = fixture();
    let map = fx.dir.path().join("map.json");
    fs::write(&map, r#"{"accent-color": "color12"}"#).expect("write map fixture");

    let output = run_binary(&[
        "--palette",
        fx.palette.to_str().expect("utf-8 path"),
        "--config",
        fx.config.to_str().expect("utf-8 path"),
        "--map",
        map.to_str().expect("utf-8 path"),
    ]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("color12"));
    assert!(!fx.dir.path().join(".backup.config.json").exists());
}
