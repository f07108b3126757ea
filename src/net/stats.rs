//! 统计信息
//!
//! 把 (时间, 排队长度, 完成的 packet, 是否丢包) 观测序列积分成
//! 时间平均与计数平均指标。

use serde::{Deserialize, Serialize};

use super::packet::Packet;
use crate::sim::{BufferCapacity, SimTime, SimulationParameters};

/// 单次运行的统计累加器
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatisticsAccumulator {
    last_observed: Option<SimTime>,
    /// 排队长度对时间的积分（packet·tick）
    queue_time: f64,
    sojourn_sum: f64,
    idle_time: f64,
    lost: u64,
    transmitted: u64,
    received: u64,
}

/// `finalize` 的结果。E[T] 以 tick 为单位。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimates {
    pub mean_queue_len: f64,
    pub mean_sojourn_ticks: f64,
    pub p_idle: f64,
    pub p_loss: f64,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 记录一次观测。
    ///
    /// `queue_len` 是本时刻状态变化*之前*的排队长度：它代表上一个事件到本事件之间
    /// 一直成立的状态（右连续阶梯函数积分）。
    pub fn update(
        &mut self,
        at: SimTime,
        queue_len: usize,
        completed: Option<&Packet>,
        was_lost: bool,
    ) {
        let delta = match self.last_observed {
            Some(last) => at - last,
            None => 0.0,
        };
        assert!(
            delta >= 0.0,
            "observation at {:?} precedes previous observation {:?}",
            at,
            self.last_observed
        );

        if queue_len == 0 {
            self.idle_time += delta;
        } else {
            self.queue_time += queue_len as f64 * delta;
        }

        if let Some(pkt) = completed {
            let sojourn = pkt
                .sojourn()
                .unwrap_or_else(|| panic!("completed packet {:?} has no departure", pkt.id()));
            self.sojourn_sum += sojourn;
            self.received += 1;
            self.transmitted += 1;
        }

        // 丢弃的 packet 也算一次发送尝试
        if was_lost {
            self.lost += 1;
            self.transmitted += 1;
        }

        self.last_observed = Some(at);
    }

    pub fn transmitted(&self) -> u64 {
        self.transmitted
    }

    pub fn received(&self) -> u64 {
        self.received
    }

    pub fn lost(&self) -> u64 {
        self.lost
    }

    pub fn idle_time(&self) -> f64 {
        self.idle_time
    }

    pub fn queue_time(&self) -> f64 {
        self.queue_time
    }

    pub fn last_observed(&self) -> Option<SimTime> {
        self.last_observed
    }

    /// 计算估计量；没有样本的比值退化为 0。
    pub fn finalize(&self, total_ticks: f64) -> Estimates {
        let ratio = |num: f64, den: f64| if den > 0.0 { num / den } else { 0.0 };
        Estimates {
            mean_queue_len: ratio(self.queue_time, total_ticks),
            mean_sojourn_ticks: ratio(self.sojourn_sum, self.received as f64),
            p_idle: ratio(self.idle_time, total_ticks),
            p_loss: ratio(self.lost as f64, self.transmitted as f64),
        }
    }

    /// 生成带参数的完整报告。
    pub fn report(&self, params: &SimulationParameters) -> RunReport {
        let scale = params.time_scale();
        let total_ticks = scale.ticks(params.sim_time_secs);
        let est = self.finalize(total_ticks);
        RunReport {
            ticks: total_ticks,
            secs_per_tick: scale.secs_per_tick(),
            transmitted: self.transmitted,
            received: self.received,
            lost: self.lost,
            lambda: params.lambda,
            buffer: params.buffer,
            rho: params.utilization(),
            mean_queue_len: est.mean_queue_len,
            mean_sojourn_secs: scale.secs(est.mean_sojourn_ticks),
            p_idle: est.p_idle,
            p_loss: est.p_loss,
        }
    }
}

/// 单次运行的最终报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub ticks: f64,
    pub secs_per_tick: f64,
    pub transmitted: u64,
    pub received: u64,
    pub lost: u64,
    pub lambda: f64,
    pub buffer: BufferCapacity,
    pub rho: f64,
    /// E[N]
    pub mean_queue_len: f64,
    /// E[T]（秒）
    pub mean_sojourn_secs: f64,
    pub p_idle: f64,
    pub p_loss: f64,
}
