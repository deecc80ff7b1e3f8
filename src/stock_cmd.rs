//! Stock command: sweep the multiplicative price model over several up-probabilities.

use anyhow::{Context, Result, bail};
use tracing::{debug_span, info, info_span};

use stochsim_ensemble::{Ensemble, Simulator};

use crate::cli::RunArgs;
use crate::config::StochsimConfig;
use crate::convert;
use crate::report::{StockReport, StockSeries, write_report};

/// Run the stock price sweep.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("stock").entered();

    let cfg = StochsimConfig::load(args.config.as_deref())?;
    let seed = args.seed.or(cfg.seed);
    let stock = &cfg.stock;

    if stock.p_values.is_empty() {
        bail!("stock.p_values must list at least one up-probability");
    }

    let mut series = Vec::with_capacity(stock.p_values.len());
    for (i, &p) in stock.p_values.iter().enumerate() {
        let _p = debug_span!("sweep", p).entered();
        // Each p gets its own stream so adding a value leaves the others unchanged.
        let p_seed = seed.map(|s| s.wrapping_add(i as u64));
        let rule = convert::build_stock_rule(stock, p)?;
        let ens_cfg = convert::build_ensemble_config(stock.horizon, stock.n_episodes, p_seed)?;
        let ensemble = Simulator::new(rule, ens_cfg)
            .with_context(|| format!("failed to simulate stock ensemble for p = {p}"))?
            .into_ensemble();

        let (mean, std_dev) = moments_over_time(&ensemble)?;
        if let Some(last) = mean.last() {
            info!(p, final_mean = last, "stock sweep point done");
        }
        series.push(StockSeries {
            p,
            seed: p_seed,
            mean,
            std_dev,
        });
    }

    let report = StockReport {
        horizon: stock.horizon,
        n_episodes: stock.n_episodes,
        initial_price: stock.initial_price,
        u: stock.u,
        d: stock.d,
        series,
    };
    write_report(&report, args.output.as_deref())
}

/// Mean and standard deviation of the state at each index `0..=horizon`.
fn moments_over_time(ensemble: &Ensemble<f64>) -> Result<(Vec<f64>, Vec<f64>)> {
    let len = ensemble.horizon() + 1;
    let mut mean = Vec::with_capacity(len);
    let mut std_dev = Vec::with_capacity(len);
    for n in 0..len {
        mean.push(ensemble.expected_value(n)?);
        std_dev.push(ensemble.variance(n)?.sqrt());
    }
    Ok((mean, std_dev))
}
