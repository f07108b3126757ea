//! 事件产生过程
//!
//! 到达过程与服务过程：由引擎在每个事件时刻驱动，通过引用操作引擎持有的队列。

mod arrival;
mod service;
mod uniform;

pub use arrival::ArrivalProcess;
pub use service::ServiceProcess;
pub use uniform::UniformSource;
