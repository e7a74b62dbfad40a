//! 结果导出（CSV）
//!
//! 每个结果写两个表：逐样本表（`WaitTime,QueueLength`，较短的一列补空单元格；
//! 两列并不按事件对齐）和单行汇总表。

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::traffic::{AggregateResult, RunResult};

pub fn write_samples<W: Write>(mut out: W, result: &RunResult) -> io::Result<()> {
    writeln!(out, "WaitTime,QueueLength")?;
    let rows = result
        .wait_times
        .len()
        .max(result.queue_length_samples.len());
    for i in 0..rows {
        let wait = result.wait_times.get(i).map(f64::to_string).unwrap_or_default();
        let len = result
            .queue_length_samples
            .get(i)
            .map(usize::to_string)
            .unwrap_or_default();
        writeln!(out, "{wait},{len}")?;
    }
    out.flush()
}

pub fn write_summary<W: Write>(
    mut out: W,
    average_wait: f64,
    max_queue_length: usize,
    total_vehicles_passed: u64,
) -> io::Result<()> {
    writeln!(out, "AverageWaitTime,MaxQueueLength,TotalVehiclesPassed")?;
    writeln!(out, "{average_wait},{max_queue_length},{total_vehicles_passed}")?;
    out.flush()
}

pub fn write_samples_csv(path: &Path, result: &RunResult) -> io::Result<()> {
    write_samples(BufWriter::new(File::create(path)?), result)
}

pub fn write_summary_csv(
    path: &Path,
    average_wait: f64,
    max_queue_length: usize,
    total_vehicles_passed: u64,
) -> io::Result<()> {
    write_summary(
        BufWriter::new(File::create(path)?),
        average_wait,
        max_queue_length,
        total_vehicles_passed,
    )
}

fn paths(dir: &Path, prefix: &str) -> (PathBuf, PathBuf) {
    (
        dir.join(format!("{prefix}_samples.csv")),
        dir.join(format!("{prefix}_summary.csv")),
    )
}

/// 导出单次运行：`<prefix>_samples.csv` 与 `<prefix>_summary.csv`
pub fn export_run(dir: &Path, prefix: &str, result: &RunResult) -> io::Result<(PathBuf, PathBuf)> {
    let (samples, summary) = paths(dir, prefix);
    write_samples_csv(&samples, result)?;
    let s = result.summary();
    write_summary_csv(&summary, s.average_wait, s.max_queue_length, s.vehicles_passed)?;
    debug!(samples = %samples.display(), summary = %summary.display(), "导出运行结果");
    Ok((samples, summary))
}

/// 导出重复实验的汇总表 `<prefix>_summary.csv`
pub fn export_aggregate(dir: &Path, prefix: &str, agg: &AggregateResult) -> io::Result<PathBuf> {
    let (_, summary) = paths(dir, prefix);
    write_summary_csv(
        &summary,
        agg.average_wait,
        agg.max_queue_length,
        agg.total_vehicles_passed,
    )?;
    debug!(summary = %summary.display(), "导出汇总结果");
    Ok(summary)
}
