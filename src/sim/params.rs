//! 仿真参数
//!
//! 单次仿真运行的参数集合、缓冲区容量以及参数校验。

use serde::{Deserialize, Serialize};

use super::time::TimeScale;

/// 参数不合法。在任何仿真状态被修改之前返回。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite and > 0, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} = {value} ticks is not representable; use a larger secs_per_tick")]
    TicksOverflow { field: &'static str, value: f64 },

    #[error("buffer capacity must be >= 0 or -1 (unbounded), got {0}")]
    NegativeBuffer(i64),
}

/// 缓冲区容量（单位：packet，不含正在服务的 packet）。
///
/// 外部表示为有符号整数，`-1` 表示无限缓冲。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum BufferCapacity {
    Unbounded,
    Packets(usize),
}

impl BufferCapacity {
    pub const UNBOUNDED_SENTINEL: i64 = -1;

    /// 当前排队长度为 `occupancy` 时，新到达的 packet 能否入队。
    pub fn admits(&self, occupancy: usize) -> bool {
        match *self {
            BufferCapacity::Unbounded => true,
            BufferCapacity::Packets(k) => occupancy < k,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, BufferCapacity::Unbounded)
    }
}

impl TryFrom<i64> for BufferCapacity {
    type Error = ConfigError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            Self::UNBOUNDED_SENTINEL => Ok(BufferCapacity::Unbounded),
            k if k >= 0 => Ok(BufferCapacity::Packets(
                usize::try_from(k).unwrap_or(usize::MAX),
            )),
            k => Err(ConfigError::NegativeBuffer(k)),
        }
    }
}

impl From<BufferCapacity> for i64 {
    fn from(cap: BufferCapacity) -> i64 {
        match cap {
            BufferCapacity::Unbounded => BufferCapacity::UNBOUNDED_SENTINEL,
            BufferCapacity::Packets(k) => i64::try_from(k).unwrap_or(i64::MAX),
        }
    }
}

impl std::fmt::Display for BufferCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferCapacity::Unbounded => write!(f, "inf"),
            BufferCapacity::Packets(k) => write!(f, "{k}"),
        }
    }
}

/// 单次运行参数。时间单位为秒，速率单位为 1/秒。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// 仿真时长 T（秒）
    pub sim_time_secs: f64,
    /// 到达率 λ（packet/秒）
    pub lambda: f64,
    /// 包长 L（bit）
    pub packet_bits: f64,
    /// 链路速率 C（bit/秒）
    pub link_bps: f64,
    /// 缓冲区容量 K
    pub buffer: BufferCapacity,
    /// 每个 tick 对应的秒数
    #[serde(default = "default_secs_per_tick")]
    pub secs_per_tick: f64,
}

fn default_secs_per_tick() -> f64 {
    TimeScale::SECONDS.secs_per_tick()
}

impl SimulationParameters {
    pub fn new(
        sim_time_secs: f64,
        lambda: f64,
        packet_bits: f64,
        link_bps: f64,
        buffer: BufferCapacity,
    ) -> Self {
        Self {
            sim_time_secs,
            lambda,
            packet_bits,
            link_bps,
            buffer,
            secs_per_tick: default_secs_per_tick(),
        }
    }

    pub fn with_secs_per_tick(mut self, secs_per_tick: f64) -> Self {
        self.secs_per_tick = secs_per_tick;
        self
    }

    /// 校验所有前置条件；任何一项不满足都直接返回错误，不做截断修正。
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("sim_time_secs", self.sim_time_secs),
            ("lambda", self.lambda),
            ("packet_bits", self.packet_bits),
            ("link_bps", self.link_bps),
            ("secs_per_tick", self.secs_per_tick),
        ];
        for (field, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        // 换算成 tick 后也必须有限，否则仿真结束条件永远不会成立
        let scale = self.time_scale();
        let derived = [
            ("sim_time_secs", scale.ticks(self.sim_time_secs)),
            ("service_secs", scale.ticks(self.service_secs())),
        ];
        for (field, value) in derived {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::TicksOverflow { field, value });
            }
        }
        Ok(())
    }

    /// 利用率 ρ = λ·L/C
    pub fn utilization(&self) -> f64 {
        self.lambda * self.packet_bits / self.link_bps
    }

    /// 每个 packet 的服务时间 L/C（秒）
    pub fn service_secs(&self) -> f64 {
        self.packet_bits / self.link_bps
    }

    pub fn time_scale(&self) -> TimeScale {
        TimeScale::new(self.secs_per_tick)
    }
}
