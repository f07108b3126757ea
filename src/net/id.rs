//! 标识符类型
//!
//! 定义 packet 的唯一标识符。

/// Packet 标识符：单次运行内单调递增。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PacketId(pub u64);

impl PacketId {
    /// 返回当前 id，并把自身推进到下一个。
    pub fn bump(&mut self) -> PacketId {
        let id = *self;
        self.0 = self.0.wrapping_add(1);
        id
    }
}
