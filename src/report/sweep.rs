//! 参数扫描
//!
//! 描述一组实验（缓冲区容量 × 负载 × 重复次数），展开成逐次运行的参数，
//! 每次运行使用独立的引擎和种子。

use serde::{Deserialize, Serialize};
use tracing::info;

use super::ReportError;
use crate::net::RunReport;
use crate::sim::{BufferCapacity, SimulationEngine, SimulationParameters};

// 浮点步进时用来吸收舍入误差
const STEP_EPS: f64 = 1e-9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSpec {
    pub sim_time_secs: f64,
    pub packet_bits: f64,
    pub link_bps: f64,
    #[serde(default = "default_secs_per_tick")]
    pub secs_per_tick: f64,
    /// 缓冲区容量列表，-1 表示无限
    pub buffers: Vec<BufferCapacity>,
    pub load: LoadSpec,
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    #[serde(default)]
    pub base_seed: u64,
}

fn default_secs_per_tick() -> f64 {
    1.0
}

fn default_repetitions() -> u32 {
    1
}

/// 负载描述
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadSpec {
    /// 显式给出 λ
    Lambdas { values: Vec<f64> },
    /// λ 从 start 到 stop（含）按 step 递增
    LambdaRange { start: f64, stop: f64, step: f64 },
    /// ρ 从 start 到 stop（不含）按 step 递增，λ = ρ·C/L
    RhoRange { start: f64, stop: f64, step: f64 },
}

/// 一次运行的位置信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRun {
    pub run_index: usize,
    pub repetition: u32,
    pub seed: u64,
    pub params: SimulationParameters,
}

impl SweepSpec {
    /// 内置实验
    pub fn preset(name: &str) -> Option<SweepSpec> {
        let spec = match name {
            "question2" => SweepSpec {
                sim_time_secs: 600.0,
                packet_bits: 2000.0,
                link_bps: 1e6,
                secs_per_tick: 1e-6,
                buffers: vec![BufferCapacity::Unbounded],
                // 0.2..=0.9
                load: LoadSpec::RhoRange {
                    start: 0.2,
                    stop: 0.95,
                    step: 0.1,
                },
                repetitions: 10,
                base_seed: 0,
            },
            "question4" => SweepSpec {
                sim_time_secs: 600.0,
                packet_bits: 2000.0,
                link_bps: 1e6,
                secs_per_tick: 1.0,
                buffers: vec![
                    BufferCapacity::Packets(10),
                    BufferCapacity::Packets(25),
                    BufferCapacity::Packets(50),
                ],
                load: LoadSpec::RhoRange {
                    start: 0.5,
                    stop: 1.55,
                    step: 0.1,
                },
                repetitions: 10,
                base_seed: 0,
            },
            "quick" => SweepSpec {
                sim_time_secs: 1200.0,
                packet_bits: 2000.0,
                link_bps: 1e6,
                secs_per_tick: 1e-5,
                buffers: vec![
                    BufferCapacity::Unbounded,
                    BufferCapacity::Packets(10),
                    BufferCapacity::Packets(25),
                    BufferCapacity::Packets(50),
                ],
                load: LoadSpec::LambdaRange {
                    start: 100.0,
                    stop: 1000.0,
                    step: 100.0,
                },
                repetitions: 1,
                base_seed: 0,
            },
            _ => return None,
        };
        Some(spec)
    }

    /// 负载对应的 λ 列表
    pub fn lambdas(&self) -> Result<Vec<f64>, ReportError> {
        let lambdas = match &self.load {
            LoadSpec::Lambdas { values } => values.clone(),
            LoadSpec::LambdaRange { start, stop, step } => {
                check_step(*step)?;
                let n = ((stop - start) / step + STEP_EPS).floor() + 1.0;
                (0..n.max(0.0) as usize)
                    .map(|i| start + i as f64 * step)
                    .collect()
            }
            LoadSpec::RhoRange { start, stop, step } => {
                check_step(*step)?;
                let n = ((stop - start) / step - STEP_EPS).ceil();
                (0..n.max(0.0) as usize)
                    .map(|i| (start + i as f64 * step) * self.link_bps / self.packet_bits)
                    .collect()
            }
        };
        if lambdas.is_empty() {
            return Err(ReportError::InvalidSweep("load produces no lambda".into()));
        }
        Ok(lambdas)
    }

    /// 按 (缓冲区, λ) 顺序展开参数；每组参数都先校验。
    pub fn points(&self) -> Result<Vec<SimulationParameters>, ReportError> {
        if self.buffers.is_empty() {
            return Err(ReportError::InvalidSweep("no buffer capacity given".into()));
        }
        let lambdas = self.lambdas()?;
        let mut points = Vec::with_capacity(self.buffers.len() * lambdas.len());
        for &buffer in &self.buffers {
            for &lambda in &lambdas {
                let p = SimulationParameters::new(
                    self.sim_time_secs,
                    lambda,
                    self.packet_bits,
                    self.link_bps,
                    buffer,
                )
                .with_secs_per_tick(self.secs_per_tick);
                p.validate()?;
                points.push(p);
            }
        }
        Ok(points)
    }

    /// 所有运行（参数点 × 重复），种子为 `base_seed + run_index`
    pub fn runs(&self) -> Result<Vec<SweepRun>, ReportError> {
        let points = self.points()?;
        let mut runs = Vec::with_capacity(points.len() * self.repetitions as usize);
        for params in points {
            for repetition in 0..self.repetitions {
                let run_index = runs.len();
                runs.push(SweepRun {
                    run_index,
                    repetition,
                    seed: self.base_seed.wrapping_add(run_index as u64),
                    params,
                });
            }
        }
        Ok(runs)
    }
}

fn check_step(step: f64) -> Result<(), ReportError> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(ReportError::InvalidSweep(format!(
            "step must be finite and > 0, got {step}"
        )))
    }
}

/// 依次执行所有运行，每个报告交给 `sink`。返回运行次数。
pub fn run_sweep<F>(spec: &SweepSpec, mut sink: F) -> Result<usize, ReportError>
where
    F: FnMut(&SweepRun, &RunReport) -> Result<(), ReportError>,
{
    let runs = spec.runs()?;
    info!(runs = runs.len(), "开始参数扫描");
    for run in &runs {
        let mut engine = SimulationEngine::seeded(run.seed);
        let report = engine.run(&run.params)?;
        sink(run, &report)?;
    }
    Ok(runs.len())
}
