//! 仿真时间类型
//!
//! 定义仿真时间及其单位转换。时间以整数纳秒存储，保证事件排序是全序的。

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// 仿真时间（纳秒）。既表示时刻，也表示时长。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// 由秒（浮点）换算，四舍五入到纳秒。
    ///
    /// 负数、NaN 或无穷大属于调用方的编程错误，直接 panic。
    pub fn from_secs_f64(s: f64) -> SimTime {
        assert!(
            s.is_finite() && s >= 0.0,
            "simulation duration must be finite and non-negative, got {s}"
        );
        // `as` 对超出 u64 范围的值做饱和截断
        SimTime((s * NANOS_PER_SEC).round() as u64)
    }

    /// 同 `from_secs_f64`，但正无穷饱和为 `u64::MAX`（随机抽样可能溢出为无穷大）。
    pub fn from_secs_f64_saturating(s: f64) -> SimTime {
        if s == f64::INFINITY {
            SimTime(u64::MAX)
        } else {
            SimTime::from_secs_f64(s)
        }
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SEC
    }

    pub fn saturating_add(self, d: SimTime) -> SimTime {
        SimTime(self.0.saturating_add(d.0))
    }

    pub fn saturating_sub(self, d: SimTime) -> SimTime {
        SimTime(self.0.saturating_sub(d.0))
    }
}
