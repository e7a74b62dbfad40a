//! 仿真器
//!
//! 定义事件驱动仿真器，维护当前时间与事件队列。

use super::event::Event;
use super::process::{Process, ProcessId, Resume};
use super::scheduled_event::{EventKey, ScheduledEvent};
use super::time::SimTime;
use super::world::World;
use std::collections::BinaryHeap;
use tracing::{debug, info, trace};

/// 事件驱动仿真器：维护当前时间与事件队列。单线程、协作式，结果只取决于调度顺序。
#[derive(Default)]
pub struct Simulator {
    now: SimTime,
    next_seq: u64,
    next_pid: u64,
    q: BinaryHeap<ScheduledEvent>,
}

impl Simulator {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 尚未执行的事件数量
    pub fn pending(&self) -> usize {
        self.q.len()
    }

    /// 调度事件在指定时间执行。`at` 早于当前时间属于编程错误。
    #[tracing::instrument(
        level = "trace",
        skip(self, ev),
        fields(event_type = std::any::type_name::<E>(), schedule_at = ?at)
    )]
    pub fn schedule<E: Event>(&mut self, at: SimTime, ev: E) {
        assert!(
            at >= self.now,
            "cannot schedule event in the past: now={:?}, at={:?}",
            self.now,
            at
        );
        let seq = self.next_seq;
        trace!(now = ?self.now, seq, "调度事件");

        self.next_seq = self.next_seq.wrapping_add(1);
        self.q.push(ScheduledEvent {
            key: EventKey { at, seq },
            ev: Box::new(ev),
        });
    }

    /// 调度事件在 `now + delay` 执行；`delay` 为零时排在本时刻已调度事件之后。
    pub fn schedule_after<E: Event>(&mut self, delay: SimTime, ev: E) {
        let at = self.now.saturating_add(delay);
        self.schedule(at, ev);
    }

    /// 启动一个逻辑进程：在当前时刻首次恢复执行。
    pub fn spawn<P: Process>(&mut self, process: P) -> ProcessId {
        let pid = ProcessId(self.next_pid);
        self.next_pid = self.next_pid.wrapping_add(1);
        debug!(?pid, process = std::any::type_name::<P>(), now = ?self.now, "启动进程");
        self.schedule(
            self.now,
            Resume {
                pid,
                process: Box::new(process),
            },
        );
        pid
    }

    /// 运行直到事件队列为空或下一个事件晚于 `until`（恰好在 `until` 的事件会被执行）。
    ///
    /// 未被执行的事件保留在队列中；挂起的进程只是不再被恢复。
    pub fn run_until(&mut self, until: SimTime, world: &mut dyn World) {
        let mut event_count = 0u64;
        while let Some(top) = self.q.peek() {
            if top.key.at > until {
                break;
            }
            let Some(item) = self.q.pop() else { break };
            event_count += 1;
            self.now = item.key.at;
            item.ev.execute(self, world);
            world.on_tick(self);
        }
        self.now = self.now.max(until);
        debug!(
            events = event_count,
            now = ?self.now,
            remaining_queue = self.q.len(),
            "run_until 结束"
        );
    }

    /// 运行所有事件直到队列为空。
    #[tracing::instrument(skip(self, world))]
    pub fn run(&mut self, world: &mut dyn World) {
        info!("开始运行仿真");
        debug!(now = ?self.now, queue_size = self.q.len(), "初始状态");

        let mut event_count = 0;
        while let Some(item) = self.q.pop() {
            event_count += 1;
            self.now = item.key.at;

            trace!(
                event_num = event_count,
                event = item.ev.label(),
                now = ?self.now,
                seq = item.key.seq,
                remaining_queue = self.q.len(),
                "执行事件"
            );

            item.ev.execute(self, world);
            world.on_tick(self);
        }

        info!(total_events = event_count, final_time = ?self.now, "仿真完成");
    }
}
