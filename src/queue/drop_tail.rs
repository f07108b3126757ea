//! DropTail（尾丢弃）队列
//!
//! 当排队长度已达到容量 K 时，直接丢弃新到达的 packet。

use std::collections::VecDeque;

use crate::net::Packet;
use crate::sim::BufferCapacity;

use super::PacketQueue;

#[derive(Debug)]
pub struct DropTailQueue {
    capacity: BufferCapacity,
    q: VecDeque<Packet>,
}

impl DropTailQueue {
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            capacity,
            q: VecDeque::new(),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(BufferCapacity::Unbounded)
    }

    /// 清空队列并设置新的容量（每次运行开始时调用）。
    pub fn reset(&mut self, capacity: BufferCapacity) {
        self.q.clear();
        self.capacity = capacity;
    }
}

impl PacketQueue for DropTailQueue {
    fn enqueue(&mut self, pkt: Packet) -> Result<(), Packet> {
        if !self.capacity.admits(self.q.len()) {
            return Err(pkt);
        }
        self.q.push_back(pkt);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<Packet> {
        self.q.pop_front()
    }

    fn len(&self) -> usize {
        self.q.len()
    }

    fn capacity(&self) -> BufferCapacity {
        self.capacity
    }
}
