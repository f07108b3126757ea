//! 数据包类型
//!
//! 一个 packet 记录一次到达的时间线：到达、开始服务、离开。
//! 后两个时间戳只能写一次，重复写入或逆序写入视为逻辑错误并直接 panic。

use super::id::PacketId;
use crate::sim::SimTime;

/// 数据包
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    id: PacketId,
    arrival: SimTime,
    service_start: Option<SimTime>,
    departure: Option<SimTime>,
}

impl Packet {
    pub fn new(id: PacketId, arrival: SimTime) -> Self {
        Self {
            id,
            arrival,
            service_start: None,
            departure: None,
        }
    }

    pub fn id(&self) -> PacketId {
        self.id
    }

    pub fn arrival(&self) -> SimTime {
        self.arrival
    }

    pub fn service_start(&self) -> Option<SimTime> {
        self.service_start
    }

    pub fn departure(&self) -> Option<SimTime> {
        self.departure
    }

    /// 离开队列、进入服务台
    pub fn mark_service_start(&mut self, at: SimTime) {
        assert!(
            self.service_start.is_none(),
            "packet {:?}: service start already set",
            self.id
        );
        assert!(
            at >= self.arrival,
            "packet {:?}: service start {:?} before arrival {:?}",
            self.id,
            at,
            self.arrival
        );
        self.service_start = Some(at);
    }

    /// 服务完成
    pub fn mark_departure(&mut self, at: SimTime) {
        assert!(
            self.departure.is_none(),
            "packet {:?}: departure already set",
            self.id
        );
        let start = self
            .service_start
            .unwrap_or_else(|| panic!("packet {:?}: departure before service start", self.id));
        assert!(
            at >= start,
            "packet {:?}: departure {:?} before service start {:?}",
            self.id,
            at,
            start
        );
        self.departure = Some(at);
    }

    /// 排队时延 = 开始服务 - 到达（tick）
    pub fn queueing_delay(&self) -> Option<f64> {
        self.service_start.map(|s| s - self.arrival)
    }

    /// 逗留时间 = 离开 - 到达（tick）
    pub fn sojourn(&self) -> Option<f64> {
        self.departure.map(|d| d - self.arrival)
    }
}
