//! 队列策略（Queue disciplines）
//!
//! 目前只提供 FIFO 的 DropTail（尾丢弃）队列，容量以 packet 个数计。

use crate::net::Packet;
use crate::sim::BufferCapacity;

mod drop_tail;

pub use drop_tail::DropTailQueue;

/// Packet 队列抽象
pub trait PacketQueue: std::fmt::Debug {
    /// 入队：成功返回 Ok；若被丢弃则返回 Err(pkt)
    fn enqueue(&mut self, pkt: Packet) -> Result<(), Packet>;
    /// 出队：按队列策略返回下一个 packet
    fn dequeue(&mut self) -> Option<Packet>;

    fn len(&self) -> usize;
    fn capacity(&self) -> BufferCapacity;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
