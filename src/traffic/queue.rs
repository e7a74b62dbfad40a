//! 车辆队列
//!
//! 路口前的 FIFO 队列：车辆只用到达时刻表示，尾部入队、头部出队。

use std::collections::VecDeque;

use crate::sim::SimTime;

#[derive(Debug, Default)]
pub struct VehicleQueue {
    q: VecDeque<SimTime>,
    arrived: u64,
    departed: u64,
}

impl VehicleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入队。到达时刻必须不早于队尾（到达进程是单调的）。
    pub fn push(&mut self, arrival: SimTime) {
        debug_assert!(
            self.q.back().is_none_or(|&last| last <= arrival),
            "vehicle arrivals must be non-decreasing"
        );
        self.q.push_back(arrival);
        self.arrived = self.arrived.saturating_add(1);
    }

    /// 出队：返回队首车辆的到达时刻
    pub fn pop(&mut self) -> Option<SimTime> {
        let arrival = self.q.pop_front()?;
        self.departed = self.departed.saturating_add(1);
        Some(arrival)
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// 累计到达数
    pub fn arrived(&self) -> u64 {
        self.arrived
    }

    /// 累计离开数
    pub fn departed(&self) -> u64 {
        self.departed
    }

    /// 守恒：队列长度 == 到达数 - 离开数
    pub fn is_conserved(&self) -> bool {
        self.arrived().checked_sub(self.departed()) == Some(self.q.len() as u64)
    }
}
