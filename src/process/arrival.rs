//! 到达过程
//!
//! 泊松到达：间隔服从参数为 λ 的指数分布，用逆变换 −ln(1−U)/λ 抽样。
//! 新 packet 交给 DropTail 队列入队，队列已满则丢弃。

use tracing::{debug, trace};

use super::uniform::UniformSource;
use crate::net::{Packet, PacketId};
use crate::queue::PacketQueue;
use crate::sim::{SimTime, TimeScale};

#[derive(Debug)]
pub struct ArrivalProcess<U> {
    rng: U,
    lambda: f64,
    scale: TimeScale,
    next_arrival: SimTime,
    next_id: PacketId,
}

impl<U: UniformSource> ArrivalProcess<U> {
    /// 未调用 `setup` 之前不会产生任何到达。
    pub fn new(rng: U) -> Self {
        Self {
            rng,
            lambda: 0.0,
            scale: TimeScale::SECONDS,
            next_arrival: SimTime::INFINITY,
            next_id: PacketId::default(),
        }
    }

    /// 为新的一次运行重置状态：第一个到达发生在时间 0。
    ///
    /// `lambda` 必须已通过参数校验（有限且 > 0）。
    pub fn setup(&mut self, lambda: f64, scale: TimeScale) {
        self.lambda = lambda;
        self.scale = scale;
        self.next_arrival = SimTime::ZERO;
        self.next_id = PacketId::default();
    }

    pub fn next_arrival(&self) -> SimTime {
        self.next_arrival
    }

    /// 处理 `now` 时刻的到达。
    ///
    /// 到达时间未到时什么也不做并返回 `false`；否则生成 packet 尝试入队，
    /// 无论是否入队都抽样下一次到达。返回本次 packet 是否被丢弃。
    pub fn arrival<Q: PacketQueue + ?Sized>(&mut self, now: SimTime, queue: &mut Q) -> bool {
        if now < self.next_arrival {
            return false;
        }

        let pkt = Packet::new(self.next_id.bump(), now);
        let lost = match queue.enqueue(pkt) {
            Ok(()) => {
                trace!(now = ?now, queue_len = queue.len(), "packet 入队");
                false
            }
            Err(dropped) => {
                debug!(pkt_id = ?dropped.id(), now = ?now, capacity = %queue.capacity(), "队列已满，丢弃 packet");
                true
            }
        };

        let gap = self.interarrival_secs();
        self.next_arrival = now + self.scale.ticks(gap);
        lost
    }

    fn interarrival_secs(&mut self) -> f64 {
        let u = self.rng.next_uniform();
        -(1.0 - u).ln() / self.lambda
    }
}
