//! 运行轨迹记录（用于离线分析/回放）
//!
//! 用结构化 JSON 事件代替逐条打印日志；只记录，不影响仿真状态与时序。

mod types;

pub use types::{TraceEvent, TraceEventKind, TraceLogger, TracePhase};
