use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "qsim-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn run_single(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_single_run"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("run single_run")
}

#[test]
fn single_run_prints_json_report() {
    let output = run_single(&["--sim-time-secs", "20", "--lambda", "250", "--seed", "3"]);
    assert!(
        output.status.success(),
        "single_run failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let v: Value = serde_json::from_str(stdout.trim()).expect("parse report json");
    assert_eq!(v.get("buffer").and_then(Value::as_i64), Some(-1));
    assert_eq!(v.get("lost").and_then(Value::as_u64), Some(0));
    let rho = v.get("rho").and_then(Value::as_f64).expect("rho");
    assert!((rho - 0.5).abs() < 1e-12);
    let tx = v.get("transmitted").and_then(Value::as_u64).expect("tx");
    let rx = v.get("received").and_then(Value::as_u64).expect("rx");
    assert_eq!(tx, rx);
    assert!(rx > 0);
}

#[test]
fn single_run_is_reproducible_for_a_seed() {
    let args = ["--sim-time-secs", "10", "--lambda", "400", "--buffer", "5", "--seed", "17"];
    let a = run_single(&args);
    let b = run_single(&args);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn single_run_appends_csv() {
    let dir = unique_temp_dir("single-run-csv");
    let csv = dir.join("run.csv");
    for _ in 0..2 {
        let output = run_single(&[
            "--sim-time-secs",
            "5",
            "--buffer",
            "10",
            "--csv",
            csv.to_str().unwrap(),
        ]);
        assert!(output.status.success());
    }

    let raw = fs::read_to_string(&csv).expect("read csv");
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ticks,Tx,Rx,lost"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn single_run_rejects_invalid_parameters() {
    let output = run_single(&["--lambda", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lambda"), "stderr={stderr}");

    let output = run_single(&["--buffer", "-5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("buffer capacity"), "stderr={stderr}");
}
