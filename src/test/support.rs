use crate::sim::{Process, SimTime, Simulator, Step, World};
use crate::traffic::{IntersectionWorld, ScenarioParams};

/// 按给定时刻（秒，升序）依次到达的车辆
pub struct ScriptedArrivals {
    times: Vec<SimTime>,
    next: usize,
    started: bool,
}

impl ScriptedArrivals {
    pub fn new(secs: &[f64]) -> Self {
        Self {
            times: secs.iter().map(|&s| SimTime::from_secs_f64(s)).collect(),
            next: 0,
            started: false,
        }
    }
}

impl Process for ScriptedArrivals {
    fn resume(&mut self, sim: &mut Simulator, world: &mut dyn World) -> Step {
        if self.started {
            IntersectionWorld::from_world(world).arrive(sim.now());
            self.next += 1;
        }
        self.started = true;
        match self.times.get(self.next) {
            Some(&at) => Step::Wait(at.saturating_sub(sim.now())),
            None => Step::Finish,
        }
    }
}

pub fn baseline() -> ScenarioParams {
    ScenarioParams {
        arrival_mean_interval: 10.0,
        green: 30.0,
        yellow: 3.0,
        red: 50.0,
        service: 1.5,
        horizon: 3600.0,
    }
}

pub fn secs(t: f64) -> SimTime {
    SimTime::from_secs_f64(t)
}
