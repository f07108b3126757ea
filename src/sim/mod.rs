//! 仿真核心模块
//!
//! 此模块包含仿真时间、运行参数以及下一事件推进的仿真引擎。

// 子模块声明
mod engine;
mod params;
mod time;

// 重新导出公共接口
pub use engine::SimulationEngine;
pub use params::{BufferCapacity, ConfigError, SimulationParameters};
pub use time::{SimTime, TimeScale};
