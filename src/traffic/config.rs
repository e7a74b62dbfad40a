//! 场景文件（scenarios.json）
//!
//! 列出要运行的场景；单个场景缺省的重复参数依次回落到文件 defaults 与命令行取值。

use serde::{Deserialize, Serialize};

use super::params::ScenarioParams;
use super::scenario::RepeatOpts;

/// 原程序每个场景都运行 3600 秒
pub const DEFAULT_MEASUREMENT_S: f64 = 3600.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub schema_version: u32,
    #[serde(default)]
    pub defaults: Option<RepeatDefaults>,
    pub scenarios: Vec<ScenarioSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepeatDefaults {
    #[serde(default)]
    pub runs: Option<usize>,
    #[serde(default)]
    pub warmup_s: Option<f64>,
    #[serde(default)]
    pub measurement_s: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    pub arrival_mean_interval_s: f64,
    pub green_s: f64,
    pub yellow_s: f64,
    pub red_s: f64,
    pub service_s: f64,
    #[serde(default)]
    pub runs: Option<usize>,
    #[serde(default)]
    pub warmup_s: Option<f64>,
    #[serde(default)]
    pub measurement_s: Option<f64>,
}

impl ScenarioSpec {
    fn new(name: &str, arrival: f64, green: f64, yellow: f64, red: f64, service: f64) -> Self {
        Self {
            name: name.to_string(),
            arrival_mean_interval_s: arrival,
            green_s: green,
            yellow_s: yellow,
            red_s: red,
            service_s: service,
            runs: None,
            warmup_s: None,
            measurement_s: None,
        }
    }

    /// 信号与到达参数；horizon 由重复参数决定，这里先置 0
    pub fn params(&self) -> ScenarioParams {
        ScenarioParams {
            arrival_mean_interval: self.arrival_mean_interval_s,
            green: self.green_s,
            yellow: self.yellow_s,
            red: self.red_s,
            service: self.service_s,
            horizon: 0.0,
        }
    }

    /// 按 场景 > 文件 defaults > `fallback` 的优先级确定重复参数
    pub fn repeat_opts(
        &self,
        defaults: Option<&RepeatDefaults>,
        fallback: &RepeatOpts,
    ) -> RepeatOpts {
        let d = defaults.cloned().unwrap_or_default();
        RepeatOpts {
            runs: self.runs.or(d.runs).unwrap_or(fallback.runs),
            warmup: self.warmup_s.or(d.warmup_s).unwrap_or(fallback.warmup),
            measurement: self
                .measurement_s
                .or(d.measurement_s)
                .unwrap_or(fallback.measurement),
            warmup_policy: fallback.warmup_policy,
        }
    }
}

impl ScenarioFile {
    /// 内置的四个场景：基线、高流量、更快放行、更长绿灯
    pub fn builtin() -> Self {
        Self {
            schema_version: 1,
            defaults: None,
            scenarios: vec![
                ScenarioSpec::new("baseline", 10.0, 30.0, 3.0, 50.0, 1.5),
                ScenarioSpec::new("heavy_traffic", 20.0, 30.0, 3.0, 50.0, 1.5),
                ScenarioSpec::new("faster_service", 10.0, 30.0, 3.0, 50.0, 1.0),
                ScenarioSpec::new("longer_green", 10.0, 40.0, 3.0, 50.0, 1.5),
            ],
        }
    }
}
