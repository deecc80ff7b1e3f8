//! JSON report types emitted by the subcommands.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use stochsim_ensemble::Pmf;

#[derive(Debug, Serialize)]
pub struct DtmcReport {
    pub n_states: usize,
    pub horizon: usize,
    pub n_episodes: usize,
    pub pmfs: Vec<PmfReport>,
    pub joint: Vec<JointReport>,
    pub conditional: Vec<ConditionalReport>,
}

/// Empirical distribution of the state at one time index.
#[derive(Debug, Serialize)]
pub struct PmfReport {
    pub index: usize,
    pub pmf: Vec<PmfEntry>,
    pub expected_value: f64,
    pub variance: f64,
}

#[derive(Debug, Serialize)]
pub struct PmfEntry {
    pub state: u32,
    pub probability: f64,
}

impl PmfReport {
    pub fn new(index: usize, pmf: &Pmf<u32>) -> Self {
        Self {
            index,
            pmf: pmf
                .iter()
                .map(|(state, probability)| PmfEntry { state, probability })
                .collect(),
            expected_value: pmf.expected_value(),
            variance: pmf.variance(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventReport {
    pub index: usize,
    pub values: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub struct JointReport {
    pub a: EventReport,
    pub b: EventReport,
    pub probability: f64,
}

#[derive(Debug, Serialize)]
pub struct ConditionalReport {
    pub event: EventReport,
    pub given: EventReport,
    pub probability: f64,
}

#[derive(Debug, Serialize)]
pub struct StockReport {
    pub horizon: usize,
    pub n_episodes: usize,
    pub initial_price: f64,
    pub u: f64,
    pub d: f64,
    pub series: Vec<StockSeries>,
}

/// Mean and standard deviation of the price at every time index for one `p`.
#[derive(Debug, Serialize)]
pub struct StockSeries {
    pub p: f64,
    pub seed: Option<u64>,
    pub mean: Vec<f64>,
    pub std_dev: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct WalkReport {
    pub p: f64,
    pub q: f64,
    pub x0: i64,
    pub n_steps: usize,
    pub n_returns: usize,
    pub mean_return_time: Option<f64>,
    pub open_excursion: usize,
    pub return_times: Vec<usize>,
    pub cumulative_average: Vec<f64>,
}

/// Writes `report` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_report<T: Serialize>(report: &T, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create report file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, report)
                .context("failed to serialise report")?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, report)
                .context("failed to serialise report")?;
            lock.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pmf_report_carries_moments() {
        let pmf = Pmf::from_samples(&[1u32, 1, 3, 3]);
        let report = PmfReport::new(2, &pmf);
        assert_eq!(report.index, 2);
        assert_eq!(report.pmf.len(), 2);
        assert_eq!(report.pmf[0].state, 1);
        assert!((report.pmf[0].probability - 0.5).abs() < 1e-12);
        assert!((report.expected_value - 2.0).abs() < 1e-12);
        assert!((report.variance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.json");
        let report = WalkReport {
            p: 0.5,
            q: 0.5,
            x0: 0,
            n_steps: 4,
            n_returns: 1,
            mean_return_time: Some(2.0),
            open_excursion: 2,
            return_times: vec![2],
            cumulative_average: vec![2.0],
        };
        write_report(&report, Some(&path)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["n_returns"], 1);
        assert_eq!(value["return_times"][0], 2);
        assert_eq!(value["mean_return_time"], 2.0);
    }

    #[test]
    fn unwritable_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let report = EventReport {
            index: 0,
            values: vec![1],
        };
        assert!(write_report(&report, Some(&path)).is_err());
    }
}
