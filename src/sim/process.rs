//! 逻辑进程
//!
//! 在事件之上实现协作式进程：进程每次被恢复时运行到下一个挂起点，
//! 返回 `Step::Wait(d)` 表示"等待 d 后再恢复"。挂起点之间不会有其他进程插入执行。

use super::event::Event;
use super::simulator::Simulator;
use super::time::SimTime;
use super::world::World;
use tracing::trace;

/// 进程编号，按 `Simulator::spawn` 调用顺序分配。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(pub u64);

/// 进程在挂起点交回控制权时给出的指令。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// 在 `now + d` 时刻再次恢复
    Wait(SimTime),
    /// 进程结束，不再被调度
    Finish,
}

impl Step {
    /// 以秒为单位的等待；负数会 panic。
    pub fn wait_secs(secs: f64) -> Step {
        Step::Wait(SimTime::from_secs_f64(secs))
    }
}

/// 逻辑进程：一个可被反复恢复的状态机，自行记录续点。
pub trait Process: Send + 'static {
    fn resume(&mut self, sim: &mut Simulator, world: &mut dyn World) -> Step;
}

/// 事件：恢复某个进程。进程本身随事件一起在队列中流转。
pub(crate) struct Resume {
    pub(crate) pid: ProcessId,
    pub(crate) process: Box<dyn Process>,
}

impl Event for Resume {
    fn label(&self) -> &'static str {
        "resume"
    }

    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let mut me = *self;
        match me.process.resume(sim, world) {
            Step::Wait(d) => {
                trace!(pid = ?me.pid, now = ?sim.now(), wait = ?d, "进程挂起");
                sim.schedule_after(d, me);
            }
            Step::Finish => {
                trace!(pid = ?me.pid, now = ?sim.now(), "进程结束");
            }
        }
    }
}
