//! 均匀随机数来源
//!
//! 到达过程只需要 [0, 1) 上的均匀抽样；抽象成 trait 以便测试时注入固定序列。

use rand::Rng;

/// [0, 1) 上的均匀随机数来源
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}
