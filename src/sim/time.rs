//! 仿真时间类型
//!
//! 定义连续仿真时间（tick）及其与秒之间的换算。

use std::cmp::Ordering;
use std::ops::{Add, Sub};

/// 仿真时间（内部单位 tick，连续实数）。
#[derive(Debug, Clone, Copy, Default)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);
    pub const INFINITY: SimTime = SimTime(f64::INFINITY);

    pub fn ticks(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

// 时间值只来自有限参数的加法，因此用 total_cmp 给出全序即可。
impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;

    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl Sub for SimTime {
    type Output = f64;

    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

/// 时间刻度：每个 tick 对应多少秒。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    secs_per_tick: f64,
}

impl TimeScale {
    /// 1 tick == 1 秒
    pub const SECONDS: TimeScale = TimeScale { secs_per_tick: 1.0 };

    /// 调用方负责保证 `secs_per_tick` 有限且为正（见 `SimulationParameters::validate`）。
    pub fn new(secs_per_tick: f64) -> Self {
        Self { secs_per_tick }
    }

    pub fn secs_per_tick(&self) -> f64 {
        self.secs_per_tick
    }

    /// 秒 -> tick 时长
    pub fn ticks(&self, secs: f64) -> f64 {
        secs / self.secs_per_tick
    }

    /// 秒 -> 绝对仿真时间
    pub fn at_secs(&self, secs: f64) -> SimTime {
        SimTime(self.ticks(secs))
    }

    /// tick 时长 -> 秒
    pub fn secs(&self, ticks: f64) -> f64 {
        ticks * self.secs_per_tick
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::SECONDS
    }
}
