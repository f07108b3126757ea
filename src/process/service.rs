//! 服务过程
//!
//! 单服务台，固定服务时间 L/C；一次只服务一个 packet。

use tracing::{debug, trace};

use crate::net::Packet;
use crate::queue::PacketQueue;
use crate::sim::{SimTime, TimeScale};

#[derive(Debug, Default)]
pub struct ServiceProcess {
    /// 每个 packet 的服务时间（tick）
    service_ticks: f64,
    in_service: Option<Packet>,
    next_service: SimTime,
}

impl ServiceProcess {
    pub fn new(packet_bits: f64, link_bps: f64, scale: TimeScale) -> Self {
        let mut server = Self::default();
        server.setup(packet_bits, link_bps, scale);
        server
    }

    /// 计算服务时间并清空服务台。
    pub fn setup(&mut self, packet_bits: f64, link_bps: f64, scale: TimeScale) {
        self.service_ticks = scale.ticks(packet_bits / link_bps);
        self.in_service = None;
        self.next_service = SimTime::ZERO;
    }

    pub fn service_ticks(&self) -> f64 {
        self.service_ticks
    }

    pub fn next_service(&self) -> SimTime {
        self.next_service
    }

    pub fn in_service(&self) -> Option<&Packet> {
        self.in_service.as_ref()
    }

    /// 队列为空且服务台空闲
    pub fn is_idle<Q: PacketQueue + ?Sized>(&self, queue: &Q) -> bool {
        queue.is_empty() && self.in_service.is_none()
    }

    /// 处理 `now` 时刻的服务事件，返回本次完成服务的 packet。
    ///
    /// 先结束当前服务，再从队列取下一个，这样恰好在 `now` 完成的 packet
    /// 能让出服务台给同一时刻开始服务的 packet。
    pub fn service<Q: PacketQueue + ?Sized>(
        &mut self,
        now: SimTime,
        queue: &mut Q,
    ) -> Option<Packet> {
        let mut completed = None;
        if now >= self.next_service {
            if let Some(mut pkt) = self.in_service.take() {
                pkt.mark_departure(now);
                debug!(pkt_id = ?pkt.id(), now = ?now, sojourn = ?pkt.sojourn(), "服务完成");
                completed = Some(pkt);
            }
        }

        if self.in_service.is_none() {
            if let Some(mut pkt) = queue.dequeue() {
                pkt.mark_service_start(now);
                self.next_service = now + self.service_ticks;
                trace!(
                    pkt_id = ?pkt.id(),
                    now = ?now,
                    next_service = ?self.next_service,
                    "开始服务"
                );
                self.in_service = Some(pkt);
            }
        }

        completed
    }
}
