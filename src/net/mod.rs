//! 数据包与统计模块
//!
//! 此模块包含 packet 及其标识符，以及单次运行的统计累加器。

// 子模块声明
mod id;
mod packet;
mod stats;

// 重新导出公共接口
pub use id::PacketId;
pub use packet::Packet;
pub use stats::{Estimates, RunReport, StatisticsAccumulator};
