//! 路口世界实现
//!
//! 持有一次运行内两个进程共享的状态：车辆队列、当前相位、统计与可选的轨迹。

use std::any::Any;

use tracing::{debug, trace};

use super::queue::VehicleQueue;
use super::signal::SignalPhase;
use super::stats::RunStats;
use crate::sim::{Event, SimTime, Simulator, World};
use crate::trace::{TraceEventKind, TraceLogger};

#[derive(Debug, Default)]
pub struct IntersectionWorld {
    pub queue: VehicleQueue,
    pub stats: RunStats,
    pub phase: SignalPhase,
    pub trace: Option<TraceLogger>,
}

impl IntersectionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace() -> Self {
        Self {
            trace: Some(TraceLogger::default()),
            ..Self::default()
        }
    }

    /// 从 `dyn World` 取回路口世界；世界类型不匹配是装配错误。
    pub fn from_world(world: &mut dyn World) -> &mut IntersectionWorld {
        world
            .as_any_mut()
            .downcast_mut::<IntersectionWorld>()
            .expect("world must be IntersectionWorld")
    }

    fn record(&mut self, now: SimTime, kind: TraceEventKind) {
        if let Some(t) = self.trace.as_mut() {
            t.push(now.0, kind);
        }
    }

    pub fn arrive(&mut self, now: SimTime) {
        self.queue.push(now);
        trace!(now = ?now, queue_len = self.queue.len(), "车辆到达");
        self.record(
            now,
            TraceEventKind::Arrival {
                queue_len: self.queue.len(),
            },
        );
    }

    /// 放行队首车辆并记录其等待时间；队列为空时返回 `None`。
    pub fn depart(&mut self, now: SimTime) -> Option<f64> {
        let arrival = self.queue.pop()?;
        let wait = now.saturating_sub(arrival).as_secs_f64();
        self.stats.record_departure(wait);
        trace!(now = ?now, wait_s = wait, queue_len = self.queue.len(), "车辆通过");
        self.record(
            now,
            TraceEventKind::Departure {
                arrival_ns: arrival.0,
                wait_s: wait,
                queue_len: self.queue.len(),
            },
        );
        Some(wait)
    }

    pub fn sample_queue_length(&mut self, now: SimTime) {
        let len = self.queue.len();
        self.stats.record_queue_length(len);
        debug!(now = ?now, queue_len = len, "红灯结束，排队长度采样");
        self.record(now, TraceEventKind::QueueSample { queue_len: len });
    }

    pub fn set_phase(&mut self, now: SimTime, phase: SignalPhase) {
        self.phase = phase;
        debug!(now = ?now, ?phase, queue_len = self.queue.len(), "信号相位切换");
        self.record(
            now,
            TraceEventKind::Phase {
                phase: phase.into(),
            },
        );
    }
}

impl World for IntersectionWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn on_tick(&mut self, _sim: &mut Simulator) {
        debug_assert!(self.queue.is_conserved(), "vehicle queue conservation violated");
        debug_assert_eq!(self.stats.wait_times.len() as u64, self.stats.vehicles_passed);
    }
}

/// 事件：预热结束，清空已累积的统计（队列保持不变）。
#[derive(Debug)]
pub struct ResetStats;

impl Event for ResetStats {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let w = IntersectionWorld::from_world(world);
        debug!(now = ?sim.now(), discarded = w.stats.vehicles_passed, "预热结束，清空统计");
        w.stats.reset();
        w.record(sim.now(), TraceEventKind::StatsReset);
    }
}
