use serde::{Deserialize, Serialize};

use crate::traffic::{ScenarioParams, SignalPhase};

/// 信号相位（序列化用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TracePhase {
    Red,
    Yellow,
    Green,
}

impl From<SignalPhase> for TracePhase {
    fn from(p: SignalPhase) -> Self {
        match p {
            SignalPhase::Red => TracePhase::Red,
            SignalPhase::Yellow => TracePhase::Yellow,
            SignalPhase::Green => TracePhase::Green,
        }
    }
}

/// 轨迹事件类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEventKind {
    /// 运行元信息（t=0 的第一条事件）
    Meta { params: ScenarioParams },
    /// 车辆到达并入队
    Arrival { queue_len: usize },
    /// 信号进入新相位
    Phase { phase: TracePhase },
    /// 红灯结束时的排队长度采样
    QueueSample { queue_len: usize },
    /// 车辆驶离路口
    Departure {
        arrival_ns: u64,
        wait_s: f64,
        queue_len: usize,
    },
    /// 预热结束，统计被清空
    StatsReset,
}

/// 一条轨迹事件（JSON）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// 仿真时间（纳秒，和 `SimTime.0` 同口径）
    pub t_ns: u64,
    #[serde(flatten)]
    pub kind: TraceEventKind,
}

/// 一个简单的事件收集器（存内存，运行结束写 JSON 文件）
#[derive(Debug, Default)]
pub struct TraceLogger {
    pub events: Vec<TraceEvent>,
}

impl TraceLogger {
    pub fn push(&mut self, t_ns: u64, kind: TraceEventKind) {
        self.events.push(TraceEvent { t_ns, kind });
    }

    /// 各个绿灯窗口 `[开始, 结束)`（纳秒）；最后一个未结束的窗口以 `u64::MAX` 结尾。
    pub fn green_windows(&self) -> Vec<(u64, u64)> {
        let mut out = Vec::new();
        let mut open: Option<u64> = None;
        for ev in &self.events {
            if let TraceEventKind::Phase { phase } = ev.kind {
                match (phase, open) {
                    (TracePhase::Green, None) => open = Some(ev.t_ns),
                    (TracePhase::Green, Some(_)) => {}
                    (_, Some(start)) => {
                        out.push((start, ev.t_ns));
                        open = None;
                    }
                    (_, None) => {}
                }
            }
        }
        if let Some(start) = open {
            out.push((start, u64::MAX));
        }
        out
    }
}
