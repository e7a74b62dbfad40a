mod sim_time;
mod simulator;
mod support;
mod trace;
