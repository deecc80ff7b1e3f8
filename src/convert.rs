//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use crate::config::{DtmcToml, EventToml, StockToml, ValuesToml, WalkToml};

use stochsim_chain::{CategoricalRule, MultiplicativeRule};
use stochsim_ensemble::{EnsembleConfig, Event};
use stochsim_walk::WalkConfig;

/// Builds an [`EnsembleConfig`], validating it up front.
pub fn build_ensemble_config(
    horizon: usize,
    n_episodes: usize,
    seed: Option<u64>,
) -> Result<EnsembleConfig> {
    let mut cfg = EnsembleConfig::new(horizon, n_episodes);
    if let Some(s) = seed {
        cfg = cfg.with_seed(s);
    }
    cfg.validate().context("invalid ensemble configuration")?;
    Ok(cfg)
}

/// Builds the categorical rule from the `[dtmc]` section.
pub fn build_dtmc_rule(dtmc: &DtmcToml) -> Result<CategoricalRule> {
    CategoricalRule::from_rows(
        dtmc.transition_matrix.clone(),
        dtmc.initial_distribution.clone(),
    )
    .context("invalid transition matrix or initial distribution")
}

/// Builds the multiplicative rule for one up-probability of the `[stock]` sweep.
pub fn build_stock_rule(stock: &StockToml, p: f64) -> Result<MultiplicativeRule> {
    MultiplicativeRule::new(stock.initial_price, p, stock.u, stock.d)
        .with_context(|| format!("invalid stock model parameters for p = {p}"))
}

/// Converts a TOML event into a query event; a scalar becomes a singleton set.
pub fn build_event(event: &EventToml) -> Event<u32> {
    match &event.values {
        ValuesToml::One(v) => Event::value(event.index, *v),
        ValuesToml::Many(vs) => Event::new(event.index, vs.clone()),
    }
}

/// Builds a [`WalkConfig`] from the `[walk]` section.
pub fn build_walk_config(walk: &WalkToml) -> Result<WalkConfig> {
    let cfg = WalkConfig::new()
        .with_probabilities(walk.p, walk.q)
        .with_start(walk.x0);
    cfg.validate().context("invalid random walk configuration")?;
    Ok(cfg)
}
