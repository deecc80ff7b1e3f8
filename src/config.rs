use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level stochsim configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StochsimConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Markov chain settings.
    #[serde(default)]
    pub dtmc: DtmcToml,

    /// Stock model sweep settings.
    #[serde(default)]
    pub stock: StockToml,

    /// Random walk settings.
    #[serde(default)]
    pub walk: WalkToml,
}

impl StochsimConfig {
    /// Reads a TOML file, or returns the built-in defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DtmcToml {
    #[serde(default = "default_dtmc_horizon")]
    pub horizon: usize,
    #[serde(default = "default_dtmc_n_episodes")]
    pub n_episodes: usize,
    #[serde(default = "default_transition_matrix")]
    pub transition_matrix: Vec<Vec<f64>>,
    #[serde(default = "default_initial_distribution")]
    pub initial_distribution: Vec<f64>,
    #[serde(default = "default_pmf_indices")]
    pub pmf_indices: Vec<usize>,
    #[serde(default = "default_joint")]
    pub joint: Vec<JointToml>,
    #[serde(default = "default_conditional")]
    pub conditional: Vec<ConditionalToml>,
}

impl Default for DtmcToml {
    fn default() -> Self {
        Self {
            horizon: default_dtmc_horizon(),
            n_episodes: default_dtmc_n_episodes(),
            transition_matrix: default_transition_matrix(),
            initial_distribution: default_initial_distribution(),
            pmf_indices: default_pmf_indices(),
            joint: default_joint(),
            conditional: default_conditional(),
        }
    }
}

fn default_dtmc_horizon() -> usize {
    10
}
fn default_dtmc_n_episodes() -> usize {
    10_000
}
fn default_transition_matrix() -> Vec<Vec<f64>> {
    vec![
        vec![0.1, 0.0, 0.2, 0.3, 0.4],
        vec![0.0, 0.6, 0.0, 0.4, 0.0],
        vec![0.2, 0.0, 0.0, 0.4, 0.4],
        vec![0.0, 0.4, 0.0, 0.5, 0.1],
        vec![0.6, 0.0, 0.3, 0.1, 0.0],
    ]
}
fn default_initial_distribution() -> Vec<f64> {
    vec![0.5, 0.0, 0.0, 0.0, 0.5]
}
fn default_pmf_indices() -> Vec<usize> {
    vec![2]
}
fn default_joint() -> Vec<JointToml> {
    vec![
        JointToml {
            a: EventToml::new(2, ValuesToml::One(2)),
            b: EventToml::new(4, ValuesToml::One(5)),
        },
        JointToml {
            a: EventToml::new(1, ValuesToml::Many(vec![1, 2, 3])),
            b: EventToml::new(2, ValuesToml::Many(vec![4, 5])),
        },
    ]
}
fn default_conditional() -> Vec<ConditionalToml> {
    vec![ConditionalToml {
        event: EventToml::new(7, ValuesToml::One(3)),
        given: EventToml::new(3, ValuesToml::One(4)),
    }]
}

/// Event values: a single state or a list of states.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValuesToml {
    One(u32),
    Many(Vec<u32>),
}

/// "State at `index` is in `values`".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventToml {
    pub index: usize,
    pub values: ValuesToml,
}

impl EventToml {
    fn new(index: usize, values: ValuesToml) -> Self {
        Self { index, values }
    }
}

/// Joint query over two events.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointToml {
    pub a: EventToml,
    pub b: EventToml,
}

/// Conditional query: `P(event | given)`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionalToml {
    pub event: EventToml,
    pub given: EventToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StockToml {
    #[serde(default = "default_stock_horizon")]
    pub horizon: usize,
    #[serde(default = "default_stock_n_episodes")]
    pub n_episodes: usize,
    #[serde(default = "default_initial_price")]
    pub initial_price: f64,
    #[serde(default = "default_u")]
    pub u: f64,
    #[serde(default = "default_d")]
    pub d: f64,
    #[serde(default = "default_p_values")]
    pub p_values: Vec<f64>,
}

impl Default for StockToml {
    fn default() -> Self {
        Self {
            horizon: default_stock_horizon(),
            n_episodes: default_stock_n_episodes(),
            initial_price: default_initial_price(),
            u: default_u(),
            d: default_d(),
            p_values: default_p_values(),
        }
    }
}

fn default_stock_horizon() -> usize {
    25
}
fn default_stock_n_episodes() -> usize {
    100_000
}
fn default_initial_price() -> f64 {
    1.0
}
fn default_u() -> f64 {
    0.1
}
fn default_d() -> f64 {
    0.05
}
fn default_p_values() -> Vec<f64> {
    vec![0.1, 0.3, 0.5, 0.7, 0.9]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkToml {
    #[serde(default = "default_half")]
    pub p: f64,
    #[serde(default = "default_half")]
    pub q: f64,
    #[serde(default)]
    pub x0: i64,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for WalkToml {
    fn default() -> Self {
        Self {
            p: default_half(),
            q: default_half(),
            x0: 0,
            steps: default_steps(),
        }
    }
}

fn default_half() -> f64 {
    0.5
}
fn default_steps() -> usize {
    1_000_000
}
