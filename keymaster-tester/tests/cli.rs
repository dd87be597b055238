use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "keymaster-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_games_writes_output() {
    let exe = env!("CARGO_BIN_EXE_keymaster-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-games", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available games"));
    assert!(content.contains("melvor_idle"));
    assert!(content.contains("wingspan_expansions_owned"));
}

#[test]
fn cli_json_report_covers_selected_games() {
    let exe = env!("CARGO_BIN_EXE_keymaster-tester");
    let output_path = temp_path("json");
    let output = Command::new(exe)
        .args([
            "--games",
            "digseum,splitgate",
            "--report",
            "json",
            "--samples",
            "3",
            "--seed",
            "42",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let games = report.as_array().expect("array of games");
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["slug"], "digseum");
    assert_eq!(games[1]["samples"].as_array().map(Vec::len), Some(3));
    assert!(games.iter().all(|game| game["passed"] == true));
}

#[test]
fn cli_options_file_gates_content() {
    let exe = env!("CARGO_BIN_EXE_keymaster-tester");
    let options_path = temp_path("options");
    std::fs::write(&options_path, r#"{ "melvor_idle_dlc_owned": [] }"#).expect("write options");
    let output_path = temp_path("gated");
    let output = Command::new(exe)
        .args(["--games", "melvor_idle", "--report", "json", "--options"])
        .arg(&options_path)
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report[0]["objective_templates"], 7);
}

#[test]
fn cli_rejects_unknown_dlc() {
    let exe = env!("CARGO_BIN_EXE_keymaster-tester");
    let options_path = temp_path("bad-options");
    std::fs::write(&options_path, r#"{ "melvor_idle_dlc_owned": ["Township II"] }"#)
        .expect("write options");
    let output = Command::new(exe)
        .args(["--games", "melvor_idle", "--options"])
        .arg(&options_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Township II"));
}

#[test]
fn cli_rejects_unknown_game() {
    let exe = env!("CARGO_BIN_EXE_keymaster-tester");
    let output = Command::new(exe)
        .args(["--games", "tetris"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tetris"));
}
