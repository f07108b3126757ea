//! 仿真引擎
//!
//! 持有共享 FIFO 队列，按"下一事件"推进时间，驱动到达过程、服务过程和统计累加器，
//! 完成一次仿真运行。

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use super::params::{ConfigError, SimulationParameters};
use super::time::SimTime;
use crate::net::{Packet, RunReport, StatisticsAccumulator};
use crate::process::{ArrivalProcess, ServiceProcess, UniformSource};
use crate::queue::{DropTailQueue, PacketQueue};

/// 单服务台排队系统的离散事件仿真引擎
#[derive(Debug)]
pub struct SimulationEngine<U = ChaCha8Rng> {
    queue: DropTailQueue,
    arrivals: ArrivalProcess<U>,
    server: ServiceProcess,
    stats: StatisticsAccumulator,
}

impl SimulationEngine<ChaCha8Rng> {
    /// 使用固定种子的 ChaCha8 随机源
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<U: UniformSource> SimulationEngine<U> {
    pub fn new(rng: U) -> Self {
        Self {
            queue: DropTailQueue::unbounded(),
            arrivals: ArrivalProcess::new(rng),
            server: ServiceProcess::default(),
            stats: StatisticsAccumulator::new(),
        }
    }

    /// 最近一次运行的累加器
    pub fn stats(&self) -> &StatisticsAccumulator {
        &self.stats
    }

    /// 执行一次完整仿真并返回报告。
    pub fn run(&mut self, params: &SimulationParameters) -> Result<RunReport, ConfigError> {
        self.run_observed(params, |_| {})
    }

    /// 同 `run`，每个完成服务的 packet 都会交给 `on_departure`。
    #[tracing::instrument(
        skip(self, params, on_departure),
        fields(lambda = params.lambda, buffer = %params.buffer, sim_time_secs = params.sim_time_secs)
    )]
    pub fn run_observed<F>(
        &mut self,
        params: &SimulationParameters,
        mut on_departure: F,
    ) -> Result<RunReport, ConfigError>
    where
        F: FnMut(&Packet),
    {
        params.validate()?;

        let scale = params.time_scale();
        let horizon = scale.at_secs(params.sim_time_secs);
        self.queue.reset(params.buffer);
        self.arrivals.setup(params.lambda, scale);
        self.server.setup(params.packet_bits, params.link_bps, scale);
        self.stats.reset();

        info!(
            rho = params.utilization(),
            horizon = ?horizon,
            service_ticks = self.server.service_ticks(),
            "▶️  开始运行仿真"
        );

        let mut now = SimTime::ZERO;
        let mut event_count: u64 = 0;
        loop {
            // 状态变化之前的排队长度，代表上一段区间的取值
            let queue_len = self.queue.len();
            let lost = self.arrivals.arrival(now, &mut self.queue);
            let completed = self.server.service(now, &mut self.queue);
            self.stats.update(now, queue_len, completed.as_ref(), lost);
            if let Some(pkt) = completed.as_ref() {
                on_departure(pkt);
            }
            event_count += 1;

            let next = self.next_event_time();
            trace!(now = ?now, next = ?next, queue_len = self.queue.len(), lost, "事件处理完成");

            if next > horizon {
                // 补上最后一个事件到仿真结束之间的区间
                self.stats.update(horizon, self.queue.len(), None, false);
                break;
            }
            now = next;
        }

        let report = self.stats.report(params);
        debug!(
            queue_len = self.queue.len(),
            in_service = self.server.in_service().is_some(),
            "结束时系统状态"
        );
        info!(
            total_events = event_count,
            transmitted = report.transmitted,
            received = report.received,
            lost = report.lost,
            "✅ 仿真完成"
        );
        Ok(report)
    }

    /// 下一次到达与（服务台忙时的）下一次服务完成中较早者
    fn next_event_time(&self) -> SimTime {
        let next_arrival = self.arrivals.next_arrival();
        if self.server.is_idle(&self.queue) {
            next_arrival
        } else {
            next_arrival.min(self.server.next_service())
        }
    }
}
