//! 信号控制路口的交通流仿真
//!
//! 到达进程与信号周期进程共享一个车辆队列，由 `crate::sim` 的协作式调度器驱动。

mod arrival;
mod config;
mod params;
mod queue;
mod scenario;
mod signal;
mod stats;
mod world;

pub use arrival::ArrivalProcess;
pub use config::{DEFAULT_MEASUREMENT_S, RepeatDefaults, ScenarioFile, ScenarioSpec};
pub use params::{ParamError, ScenarioParams, SignalTiming};
pub use queue::VehicleQueue;
pub use scenario::{
    RepeatOpts, RepeatedResult, ScenarioOutcome, ScenarioRunner, WarmupPolicy, run_repeated,
    run_scenario, run_scenario_seeded,
};
pub use signal::{SignalCycle, SignalPhase};
pub use stats::{AggregateResult, RunResult, RunStats, RunSummary};
pub use world::{IntersectionWorld, ResetStats};
