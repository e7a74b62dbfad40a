//! 场景运行与重复实验
//!
//! 每次运行都新建仿真器、队列与统计，启动到达进程和信号进程后运行到 horizon。

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::arrival::ArrivalProcess;
use super::config::DEFAULT_MEASUREMENT_S;
use super::params::{ParamError, ScenarioParams, non_negative};
use super::signal::SignalCycle;
use super::stats::{AggregateResult, RunResult};
use super::world::{IntersectionWorld, ResetStats};
use crate::sim::{SimTime, Simulator};
use crate::trace::{TraceEventKind, TraceLogger};

/// 一次运行的完整产出
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub result: RunResult,
    pub trace: Option<TraceLogger>,
    /// 运行结束时队列里仍在等待的车辆数
    pub queued_at_end: usize,
}

/// 单次运行的装配器
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    params: ScenarioParams,
    trace: bool,
    reset_stats_at: Option<SimTime>,
}

impl ScenarioRunner {
    pub fn new(params: ScenarioParams) -> Self {
        Self {
            params,
            trace: false,
            reset_stats_at: None,
        }
    }

    /// 记录结构化运行轨迹
    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// 在给定时刻清空统计（用于丢弃预热期数据）
    pub fn reset_stats_at(mut self, at: Option<SimTime>) -> Self {
        self.reset_stats_at = at;
        self
    }

    #[tracing::instrument(level = "debug", skip(self, rng), fields(horizon = self.params.horizon))]
    pub fn run<R: Rng + Send + 'static>(&self, rng: R) -> Result<ScenarioOutcome, ParamError> {
        self.params.validate()?;

        let horizon = self.params.horizon_time();
        let mut sim = Simulator::default();
        let mut world = if self.trace {
            IntersectionWorld::with_trace()
        } else {
            IntersectionWorld::new()
        };
        if let Some(t) = world.trace.as_mut() {
            t.push(0, TraceEventKind::Meta { params: self.params });
        }

        if let Some(at) = self.reset_stats_at {
            sim.schedule(at, ResetStats);
        }
        sim.spawn(ArrivalProcess::new(self.params.arrival_mean_interval, rng)?);
        sim.spawn(SignalCycle::new(self.params.timing()));

        sim.run_until(horizon, &mut world);

        let outcome = ScenarioOutcome {
            queued_at_end: world.queue.len(),
            result: world.stats.finish(),
            trace: world.trace,
        };
        debug!(
            vehicles_passed = outcome.result.vehicles_passed,
            queued_at_end = outcome.queued_at_end,
            "运行结束"
        );
        Ok(outcome)
    }
}

/// 用给定随机源运行一次场景
pub fn run_scenario<R: Rng + Send + 'static>(
    params: &ScenarioParams,
    rng: R,
) -> Result<RunResult, ParamError> {
    ScenarioRunner::new(*params).run(rng).map(|o| o.result)
}

/// 用固定种子运行一次场景，结果可复现
pub fn run_scenario_seeded(params: &ScenarioParams, seed: u64) -> Result<RunResult, ParamError> {
    run_scenario(params, ChaCha8Rng::seed_from_u64(seed))
}

/// 预热期统计的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarmupPolicy {
    /// 预热与测量时长相加为一个 horizon，预热期统计保留在结果中
    #[default]
    Accumulate,
    /// 预热结束时清空统计
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatOpts {
    pub runs: usize,
    pub warmup: f64,
    pub measurement: f64,
    pub warmup_policy: WarmupPolicy,
}

impl Default for RepeatOpts {
    fn default() -> Self {
        Self {
            runs: 1,
            warmup: 0.0,
            measurement: DEFAULT_MEASUREMENT_S,
            warmup_policy: WarmupPolicy::Accumulate,
        }
    }
}

impl RepeatOpts {
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.runs == 0 {
            return Err(ParamError::ZeroRuns);
        }
        non_negative("warmup", self.warmup)?;
        non_negative("measurement", self.measurement)
    }

    pub fn horizon(&self) -> f64 {
        self.warmup + self.measurement
    }
}

#[derive(Debug, Clone)]
pub struct RepeatedResult {
    pub aggregate: AggregateResult,
    pub runs: Vec<RunResult>,
}

/// 重复运行同一场景并汇总。
///
/// 每次重复从主随机源取一个新种子，各次相互独立；`seed` 为 `None` 时主随机源取自系统熵。
pub fn run_repeated(
    params: &ScenarioParams,
    opts: &RepeatOpts,
    seed: Option<u64>,
) -> Result<RepeatedResult, ParamError> {
    opts.validate()?;
    let params = params.with_horizon(opts.horizon());
    params.validate()?;

    let reset_at = match opts.warmup_policy {
        WarmupPolicy::Accumulate => None,
        WarmupPolicy::Discard => Some(SimTime::from_secs_f64(opts.warmup)),
    };
    let runner = ScenarioRunner::new(params).reset_stats_at(reset_at);

    let mut master = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    info!(
        runs = opts.runs,
        warmup = opts.warmup,
        measurement = opts.measurement,
        policy = ?opts.warmup_policy,
        "开始重复实验"
    );

    let mut runs = Vec::with_capacity(opts.runs);
    for i in 0..opts.runs {
        let run_seed = master.next_u64();
        let outcome = runner.run(ChaCha8Rng::seed_from_u64(run_seed))?;
        debug!(
            run = i,
            run_seed,
            vehicles_passed = outcome.result.vehicles_passed,
            "完成一次重复"
        );
        runs.push(outcome.result);
    }

    let aggregate = AggregateResult::from_runs(&runs);
    info!(
        average_wait = aggregate.average_wait,
        max_queue_length = aggregate.max_queue_length,
        total_vehicles_passed = aggregate.total_vehicles_passed,
        "重复实验完成"
    );
    Ok(RepeatedResult { aggregate, runs })
}
