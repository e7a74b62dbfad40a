//! 调度事件
//!
//! 事件按 `(时间, 序列号)` 排序：时间早者先执行，同一时刻按调度顺序先进先出。

use super::event::Event;
use super::time::SimTime;
use std::cmp::Ordering;

/// 调度键。序列号在一个仿真器内单调递增，保证同一时刻的事件有确定顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventKey {
    pub at: SimTime,
    pub seq: u64,
}

/// 调度事件，包含调度键和事件对象。
pub struct ScheduledEvent {
    pub(crate) key: EventKey,
    pub(crate) ev: Box<dyn Event>,
}

// BinaryHeap 是 max-heap；反向比较得到最小键优先。
impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key).reverse()
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ScheduledEvent {}
