//! CLI smoke tests against the built binary.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn docdex(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docdex"));
    cmd.current_dir(dir);
    cmd
}

fn write_block(dir: &Path) -> std::path::PathBuf {
    let file = dir.join("all_0.js");
    fs::write(
        &file,
        r#"var searchData=
[
  ['read_754',['read',['../structns_1_1reader.html#a85ea',1,'ns::reader::read()']]],
  ['reset_755',['reset',['../structns_1_1reader.html#a2c1',1,'ns::reader::reset']]]
];
"#,
    )
    .unwrap();
    file
}

#[test]
fn test_init_creates_settings() {
    let temp = TempDir::new().unwrap();

    let output = docdex(temp.path()).arg("init").output().unwrap();
    assert!(output.status.success());

    let config_path = temp.path().join(".docdex/settings.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("version = 1"));
    assert!(content.contains("[search]"));

    // A second init without --force must refuse to overwrite.
    let output = docdex(temp.path()).arg("init").output().unwrap();
    assert!(!output.status.success());

    let output = docdex(temp.path()).args(["init", "--force"]).output().unwrap();
    assert!(output.status.success());
}

#[test]
fn test_search_text_output() {
    let temp = TempDir::new().unwrap();
    let block = write_block(temp.path());

    let output = docdex(temp.path())
        .args(["search", "re", "--source"])
        .arg(&block)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Found 2 record(s)"));
    assert!(stdout.contains("read"));
    assert!(stdout.contains("reset"));
}

#[test]
fn test_search_no_match_exits_not_found() {
    let temp = TempDir::new().unwrap();
    let block = write_block(temp.path());

    let output = docdex(temp.path())
        .args(["search", "zzz", "--source"])
        .arg(&block)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_search_json_envelope() {
    let temp = TempDir::new().unwrap();
    let block = write_block(temp.path());

    let output = docdex(temp.path())
        .args(["search", "read", "--json", "--source"])
        .arg(&block)
        .output()
        .unwrap();

    assert!(output.status.success());
    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["type"], "result");
    assert_eq!(envelope["status"], "success");
    assert_eq!(envelope["code"], "OK");
    assert_eq!(envelope["meta"]["schema_version"], "1.0.0");
    assert_eq!(envelope["meta"]["query"], "read");

    let data = envelope["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "read_754");
    assert_eq!(data[0]["label"], "read");
    assert_eq!(data[0]["targets"][0]["locator"], "../structns_1_1reader.html#a85ea");
    assert_eq!(data[0]["targets"][0]["kind"], 1);
}

#[test]
fn test_show_record_by_id() {
    let temp = TempDir::new().unwrap();
    let block = write_block(temp.path());

    let output = docdex(temp.path())
        .args(["show", "reset_755", "--source"])
        .arg(&block)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("reset"));

    let output = docdex(temp.path())
        .args(["show", "absent_1", "--source"])
        .arg(&block)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_stats_json() {
    let temp = TempDir::new().unwrap();
    let block = write_block(temp.path());

    let output = docdex(temp.path())
        .args(["stats", "--json", "--source"])
        .arg(&block)
        .output()
        .unwrap();

    assert!(output.status.success());
    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["data"]["records"], 2);
    assert_eq!(envelope["data"]["targets"], 2);
    assert_eq!(envelope["data"]["sources"].as_array().unwrap().len(), 1);
}

#[test]
fn test_bad_source_exit_code() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("dup.js");
    fs::write(
        &file,
        "[['a_1',['a',['x.html',1,'ns']]],['a_1',['a',['y.html',1,'ns']]]]",
    )
    .unwrap();

    let output = docdex(temp.path())
        .args(["search", "a", "--source"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let output = docdex(temp.path())
        .args(["search", "a", "--json", "--source"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["type"], "error");
    assert_eq!(envelope["code"], "DUPLICATE_ID");
}

#[test]
fn test_missing_sources_is_config_error() {
    let temp = TempDir::new().unwrap();

    let output = docdex(temp.path()).args(["search", "read"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no index sources configured"));
}

#[test]
fn test_config_command_shows_active_settings() {
    let temp = TempDir::new().unwrap();

    let config_dir = temp.path().join(".docdex");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("settings.toml"),
        "[search]\nlimit = 7\n",
    )
    .unwrap();

    let output = docdex(temp.path()).arg("config").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("limit = 7"));
    assert!(stdout.contains("version = 1"));
}

#[test]
fn test_configured_sources_resolve_against_workspace_root() {
    let temp = TempDir::new().unwrap();
    write_block(temp.path());

    let config_dir = temp.path().join(".docdex");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("settings.toml"),
        "[index]\nsources = [\"all_0.js\"]\n",
    )
    .unwrap();

    // Run from a subdirectory: the source path still resolves via the
    // workspace root where .docdex lives.
    let subdir = temp.path().join("nested");
    fs::create_dir(&subdir).unwrap();

    let output = docdex(&subdir).args(["search", "read"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("read_754"));
}
