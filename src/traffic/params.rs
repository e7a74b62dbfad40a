//! 场景参数与校验

use crate::sim::SimTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 参数错误：在构造场景、启动任何进程之前返回。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{name} must be a positive, finite duration in seconds (got {value})")]
    NonPositiveDuration { name: &'static str, value: f64 },
    #[error("{name} must be a non-negative, finite time in seconds (got {value})")]
    NegativeTime { name: &'static str, value: f64 },
    #[error("{name} rounds to zero at nanosecond resolution (got {value} s)")]
    BelowResolution { name: &'static str, value: f64 },
    #[error("number of runs must be at least 1")]
    ZeroRuns,
}

/// 正的有限时长，且换算到纳秒后不为零
fn positive(name: &'static str, value: f64) -> Result<(), ParamError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ParamError::NonPositiveDuration { name, value });
    }
    if SimTime::from_secs_f64(value) == SimTime::ZERO {
        return Err(ParamError::BelowResolution { name, value });
    }
    Ok(())
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParamError::NegativeTime { name, value })
    }
}

/// 一次运行的全部参数（单位：秒）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// 车辆到达间隔的均值（指数分布）
    pub arrival_mean_interval: f64,
    pub green: f64,
    pub yellow: f64,
    pub red: f64,
    /// 绿灯期间两辆车放行之间的间隔
    pub service: f64,
    /// 仿真总时长
    pub horizon: f64,
}

impl ScenarioParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        positive("arrival_mean_interval", self.arrival_mean_interval)?;
        positive("green", self.green)?;
        positive("yellow", self.yellow)?;
        positive("red", self.red)?;
        positive("service", self.service)?;
        non_negative("horizon", self.horizon)
    }

    pub fn with_horizon(self, horizon: f64) -> Self {
        Self { horizon, ..self }
    }

    pub fn timing(&self) -> SignalTiming {
        SignalTiming {
            red: SimTime::from_secs_f64(self.red),
            yellow: SimTime::from_secs_f64(self.yellow),
            green: SimTime::from_secs_f64(self.green),
            service: SimTime::from_secs_f64(self.service),
        }
    }

    pub fn horizon_time(&self) -> SimTime {
        SimTime::from_secs_f64(self.horizon)
    }
}

/// 换算为仿真时间后的信号配时。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalTiming {
    pub red: SimTime,
    pub yellow: SimTime,
    pub green: SimTime,
    pub service: SimTime,
}
