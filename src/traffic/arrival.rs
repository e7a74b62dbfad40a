//! 车辆到达进程
//!
//! 到达间隔服从均值为 `arrival_mean_interval` 的指数分布；每次恢复时把当前时刻追加到队尾。

use rand::Rng;
use rand_distr::{Distribution, Exp};

use super::params::ParamError;
use super::world::IntersectionWorld;
use crate::sim::{Process, SimTime, Simulator, Step, World};

pub struct ArrivalProcess<R> {
    rng: R,
    interval: Exp<f64>,
    /// 首次恢复只抽取间隔，之后每次恢复都代表一辆车到达
    started: bool,
}

impl<R: Rng> ArrivalProcess<R> {
    pub fn new(mean_interval: f64, rng: R) -> Result<Self, ParamError> {
        let interval =
            Exp::new(1.0 / mean_interval).map_err(|_| ParamError::NonPositiveDuration {
                name: "arrival_mean_interval",
                value: mean_interval,
            })?;
        Ok(Self {
            rng,
            interval,
            started: false,
        })
    }

    fn next_interval(&mut self) -> SimTime {
        SimTime::from_secs_f64_saturating(self.interval.sample(&mut self.rng))
    }
}

impl<R: Rng + Send + 'static> Process for ArrivalProcess<R> {
    fn resume(&mut self, sim: &mut Simulator, world: &mut dyn World) -> Step {
        if self.started {
            IntersectionWorld::from_world(world).arrive(sim.now());
        }
        self.started = true;
        Step::Wait(self.next_interval())
    }
}
