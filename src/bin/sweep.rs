//! 参数扫描
//!
//! 运行内置实验或 JSON 描述的实验，每次运行追加一行到 CSV。

use clap::Parser;
use qsim_rs::report::{CsvReporter, SweepSpec, run_sweep};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sweep", about = "参数扫描：多组参数、多次重复，结果写入 CSV")]
struct Args {
    /// 内置实验：question2 / question4 / quick
    #[arg(long, conflicts_with = "spec")]
    preset: Option<String>,
    /// JSON 实验描述文件
    #[arg(long)]
    spec: Option<PathBuf>,
    /// 输出 CSV 文件（追加）
    #[arg(long, default_value = "sweep.csv")]
    csv: PathBuf,
    /// 覆盖实验描述中的基础种子
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut spec = match (&args.preset, &args.spec) {
        (Some(name), _) => SweepSpec::preset(name).unwrap_or_else(|| {
            eprintln!("error: unknown preset {name:?}");
            std::process::exit(2);
        }),
        (None, Some(path)) => {
            let raw = fs::read_to_string(path).expect("read sweep spec");
            serde_json::from_str(&raw).expect("parse sweep spec")
        }
        (None, None) => {
            eprintln!("error: one of --preset or --spec is required");
            std::process::exit(2);
        }
    };
    if let Some(seed) = args.seed {
        spec.base_seed = seed;
    }

    let reporter = CsvReporter::new(&args.csv);
    let result = run_sweep(&spec, |run, report| {
        reporter.append(report)?;
        println!(
            "run={} rep={} seed={} lambda={:.3} K={} rho={:.3} E[N]={:.6} E[T]={:.6} P_IDLE={:.6} P_LOSS={:.6}",
            run.run_index,
            run.repetition,
            run.seed,
            report.lambda,
            report.buffer,
            report.rho,
            report.mean_queue_len,
            report.mean_sojourn_secs,
            report.p_idle,
            report.p_loss,
        );
        Ok(())
    });

    match result {
        Ok(n) => eprintln!("wrote {n} rows to {}", args.csv.display()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}
