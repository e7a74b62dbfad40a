//! 世界 trait
//!
//! 定义仿真世界接口。

use super::simulator::Simulator;
use std::any::Any;

/// 仿真世界：由业务层实现，持有一次运行内所有进程共享的状态。
pub trait World: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// 每执行完一个事件后调用。
    fn on_tick(&mut self, _sim: &mut Simulator) {}
}
