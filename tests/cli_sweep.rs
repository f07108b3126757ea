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

fn write_file(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn sweep_runs_json_spec_and_writes_one_row_per_run() {
    let dir = unique_temp_dir("sweep-spec");
    let spec = write_file(
        &dir,
        "sweep.json",
        r#"
{
    "sim_time_secs": 5,
    "packet_bits": 2000,
    "link_bps": 1000000,
    "buffers": [-1, 10],
    "load": { "kind": "lambdas", "values": [100, 300, 600] },
    "repetitions": 2,
    "base_seed": 7
}
        "#,
    );
    let csv = dir.join("out.csv");

    let output = Command::new(env!("CARGO_BIN_EXE_sweep"))
        .args([
            "--spec",
            spec.to_str().unwrap(),
            "--csv",
            csv.to_str().unwrap(),
        ])
        .output()
        .expect("run sweep");
    assert!(
        output.status.success(),
        "sweep failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let progress: Vec<&str> = stdout.lines().filter(|l| l.starts_with("run=")).collect();
    assert_eq!(progress.len(), 12);
    assert!(progress[0].contains("seed=7"));
    assert!(progress[11].contains("seed=18"));

    let raw = fs::read_to_string(&csv).expect("read csv");
    assert_eq!(raw.lines().count(), 1 + 12);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn sweep_rejects_unknown_preset() {
    let output = Command::new(env!("CARGO_BIN_EXE_sweep"))
        .args(["--preset", "does-not-exist"])
        .output()
        .expect("run sweep");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown preset"));
}

#[test]
fn sweep_requires_preset_or_spec() {
    let output = Command::new(env!("CARGO_BIN_EXE_sweep"))
        .output()
        .expect("run sweep");
    assert!(!output.status.success());
}
