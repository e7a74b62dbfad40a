//! 信号灯周期进程
//!
//! 红 → 黄 → 绿 循环，无终止状态。红灯结束时采样排队长度；绿灯期间逐辆放行，
//! 每放行一辆等待一个服务间隔。放行中的车辆不会被绿灯结束打断，
//! 队列提前清空时一次性等待绿灯剩余时间。

use super::params::SignalTiming;
use super::world::IntersectionWorld;
use crate::sim::{Process, SimTime, Simulator, Step, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalPhase {
    #[default]
    Red,
    Yellow,
    Green,
}

/// 进程的续点：下一次恢复时从哪里继续。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resume {
    EnterRed,
    RedElapsed,
    YellowElapsed,
    Serving { green_end: SimTime },
    GreenElapsed,
}

#[derive(Debug)]
pub struct SignalCycle {
    timing: SignalTiming,
    at: Resume,
}

impl SignalCycle {
    pub fn new(timing: SignalTiming) -> Self {
        Self {
            timing,
            at: Resume::EnterRed,
        }
    }
}

impl Process for SignalCycle {
    fn resume(&mut self, sim: &mut Simulator, world: &mut dyn World) -> Step {
        let now = sim.now();
        let w = IntersectionWorld::from_world(world);
        loop {
            match self.at {
                Resume::EnterRed => {
                    w.set_phase(now, SignalPhase::Red);
                    self.at = Resume::RedElapsed;
                    return Step::Wait(self.timing.red);
                }
                Resume::RedElapsed => {
                    w.sample_queue_length(now);
                    w.set_phase(now, SignalPhase::Yellow);
                    self.at = Resume::YellowElapsed;
                    return Step::Wait(self.timing.yellow);
                }
                Resume::YellowElapsed => {
                    w.set_phase(now, SignalPhase::Green);
                    self.at = Resume::Serving {
                        green_end: now.saturating_add(self.timing.green),
                    };
                }
                Resume::Serving { green_end } => {
                    if now >= green_end {
                        // 最后一辆车的服务跨过了绿灯结束时刻，直接转红
                        self.at = Resume::EnterRed;
                    } else if w.depart(now).is_some() {
                        return Step::Wait(self.timing.service);
                    } else {
                        self.at = Resume::GreenElapsed;
                        return Step::Wait(green_end.saturating_sub(now));
                    }
                }
                Resume::GreenElapsed => self.at = Resume::EnterRed,
            }
        }
    }
}
