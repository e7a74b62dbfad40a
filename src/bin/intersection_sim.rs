//! 信号路口仿真命令行
//!
//! 依次运行场景文件（或内置场景）中的每个场景，打印汇总并可选导出 CSV / 轨迹 JSON。

use clap::Parser;
use intersection_sim::export;
use intersection_sim::sim::SimTime;
use intersection_sim::traffic::{
    DEFAULT_MEASUREMENT_S, RepeatOpts, ScenarioFile, ScenarioRunner, WarmupPolicy, run_repeated,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "intersection-sim",
    about = "Discrete-event simulation of a signal-controlled intersection"
)]
struct Args {
    /// Path to scenarios.json; runs the built-in scenarios when omitted
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Master random seed; each scenario derives its own stream from it
    #[arg(long)]
    seed: Option<u64>,

    /// Default number of repetitions per scenario
    #[arg(long, default_value_t = 1)]
    runs: usize,

    /// Default warm-up duration (seconds), added to the horizon
    #[arg(long, default_value_t = 0.0)]
    warmup_s: f64,

    /// Default measurement duration (seconds)
    #[arg(long, default_value_t = DEFAULT_MEASUREMENT_S)]
    measurement_s: f64,

    /// Discard statistics collected before the warm-up ends
    #[arg(long)]
    discard_warmup: bool,

    /// Directory for <scenario>_samples.csv / <scenario>_summary.csv
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Directory for one traced run per scenario (<scenario>_trace.json)
    #[arg(long)]
    trace_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let file = match &args.scenarios {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("read scenarios.json");
            serde_json::from_str::<ScenarioFile>(&raw).expect("parse scenarios.json")
        }
        None => ScenarioFile::builtin(),
    };

    let fallback = RepeatOpts {
        runs: args.runs,
        warmup: args.warmup_s,
        measurement: args.measurement_s,
        warmup_policy: if args.discard_warmup {
            WarmupPolicy::Discard
        } else {
            WarmupPolicy::Accumulate
        },
    };

    for dir in [&args.out_dir, &args.trace_dir].into_iter().flatten() {
        fs::create_dir_all(dir).expect("create output dir");
    }

    for (i, spec) in file.scenarios.iter().enumerate() {
        let opts = spec.repeat_opts(file.defaults.as_ref(), &fallback);
        let params = spec.params();
        let seed = args.seed.map(|s| s.wrapping_add(i as u64));
        info!(scenario = %spec.name, ?params, ?opts, ?seed, "运行场景");

        let repeated = match run_repeated(&params, &opts, seed) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("scenario {}: invalid parameters: {e}", spec.name);
                std::process::exit(2);
            }
        };
        let agg = repeated.aggregate;

        println!(
            "scenario {}: average_wait={:.3} max_queue={} vehicles_passed={} runs={}",
            spec.name, agg.average_wait, agg.max_queue_length, agg.total_vehicles_passed, agg.runs
        );

        if let Some(dir) = &args.out_dir {
            if let [only] = repeated.runs.as_slice() {
                export::export_run(dir, &spec.name, only).expect("write scenario csv");
            } else {
                for (k, run) in repeated.runs.iter().enumerate() {
                    export::export_run(dir, &format!("{}_run{k}", spec.name), run)
                        .expect("write run csv");
                }
                export::export_aggregate(dir, &spec.name, &agg).expect("write aggregate csv");
            }
        }

        if let Some(dir) = &args.trace_dir {
            let rng = match seed {
                Some(s) => ChaCha8Rng::seed_from_u64(s),
                None => ChaCha8Rng::from_entropy(),
            };
            let outcome = ScenarioRunner::new(params.with_horizon(opts.horizon()))
                .trace(true)
                .reset_stats_at(match opts.warmup_policy {
                    WarmupPolicy::Accumulate => None,
                    WarmupPolicy::Discard => Some(SimTime::from_secs_f64(opts.warmup)),
                })
                .run(rng)
                .expect("parameters already validated");
            if let Some(t) = outcome.trace {
                let path = dir.join(format!("{}_trace.json", spec.name));
                let json = serde_json::to_string_pretty(&t.events).expect("serialize trace events");
                fs::write(&path, json).expect("write trace json");
                eprintln!("wrote trace events to {}", path.display());
            }
        }
    }
}
