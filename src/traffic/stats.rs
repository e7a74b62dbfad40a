//! 统计信息
//!
//! 单次运行的被动累加器，以及运行结束后的派生指标。

use serde::{Deserialize, Serialize};

/// 一次运行中累积的原始统计（只追加）。
#[derive(Debug, Default)]
pub struct RunStats {
    pub wait_times: Vec<f64>,
    pub queue_length_samples: Vec<usize>,
    pub vehicles_passed: u64,
}

impl RunStats {
    pub fn record_departure(&mut self, wait_secs: f64) {
        self.wait_times.push(wait_secs);
        self.vehicles_passed = self.vehicles_passed.saturating_add(1);
    }

    pub fn record_queue_length(&mut self, len: usize) {
        self.queue_length_samples.push(len);
    }

    /// 清空已累积的统计（预热结束时使用）
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn finish(self) -> RunResult {
        RunResult {
            wait_times: self.wait_times,
            queue_length_samples: self.queue_length_samples,
            vehicles_passed: self.vehicles_passed,
        }
    }
}

/// 单次运行结果，运行结束后不再变化。等待时间单位为秒。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub wait_times: Vec<f64>,
    pub queue_length_samples: Vec<usize>,
    pub vehicles_passed: u64,
}

impl RunResult {
    /// 平均等待时间；没有车辆通过时为 0
    pub fn average_wait(&self) -> f64 {
        if self.wait_times.is_empty() {
            0.0
        } else {
            self.wait_times.iter().sum::<f64>() / self.wait_times.len() as f64
        }
    }

    /// 最大排队长度；没有采样时为 0
    pub fn max_queue_length(&self) -> usize {
        self.queue_length_samples.iter().copied().max().unwrap_or(0)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            average_wait: self.average_wait(),
            max_queue_length: self.max_queue_length(),
            vehicles_passed: self.vehicles_passed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub average_wait: f64,
    pub max_queue_length: usize,
    pub vehicles_passed: u64,
}

/// 多次重复运行的汇总。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateResult {
    pub runs: usize,
    /// 各次运行平均等待时间的均值
    pub average_wait: f64,
    /// 各次运行最大排队长度的最大值
    pub max_queue_length: usize,
    pub total_vehicles_passed: u64,
}

impl AggregateResult {
    pub fn from_runs<'a>(runs: impl IntoIterator<Item = &'a RunResult>) -> Self {
        let mut agg = AggregateResult::default();
        let mut wait_sum = 0.0;
        for run in runs {
            let s = run.summary();
            agg.runs += 1;
            wait_sum += s.average_wait;
            agg.max_queue_length = agg.max_queue_length.max(s.max_queue_length);
            agg.total_vehicles_passed = agg.total_vehicles_passed.saturating_add(s.vehicles_passed);
        }
        if agg.runs > 0 {
            agg.average_wait = wait_sum / agg.runs as f64;
        }
        agg
    }
}
