//! 单次仿真
//!
//! 按命令行参数运行一次 M/D/1(/K) 仿真，把报告以 JSON 打印到 stdout，
//! 可选地追加到 CSV 文件。

use clap::Parser;
use qsim_rs::report::CsvReporter;
use qsim_rs::sim::{BufferCapacity, SimulationEngine, SimulationParameters};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "single-run", about = "单服务台队列仿真：运行一次并输出统计报告")]
struct Args {
    /// 仿真时长（秒）
    #[arg(long, default_value_t = 600.0)]
    sim_time_secs: f64,
    /// 平均到达率（packet/秒）
    #[arg(long, default_value_t = 250.0)]
    lambda: f64,
    /// 包长（bit）
    #[arg(long, default_value_t = 2000.0)]
    packet_bits: f64,
    /// 链路速率（bit/秒）
    #[arg(long, default_value_t = 1e6)]
    link_bps: f64,
    /// 缓冲区容量（packet），-1 表示无限
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    buffer: i64,
    /// 每个 tick 对应的秒数
    #[arg(long, default_value_t = 1.0)]
    secs_per_tick: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// 追加结果到 CSV 文件
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let buffer = BufferCapacity::try_from(args.buffer).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });
    let params = SimulationParameters::new(
        args.sim_time_secs,
        args.lambda,
        args.packet_bits,
        args.link_bps,
        buffer,
    )
    .with_secs_per_tick(args.secs_per_tick);

    let mut engine = SimulationEngine::seeded(args.seed);
    let report = engine.run(&params).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });

    if let Some(path) = &args.csv {
        CsvReporter::new(path)
            .append(&report)
            .expect("append csv row");
    }

    println!(
        "{}",
        serde_json::to_string(&report).expect("serialize report")
    );
}
