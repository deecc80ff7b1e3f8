//! Dtmc command: simulate a categorical Markov chain and answer the configured queries.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use stochsim_ensemble::{Ensemble, Event, Simulator};

use crate::cli::RunArgs;
use crate::config::StochsimConfig;
use crate::convert;
use crate::report::{
    ConditionalReport, DtmcReport, EventReport, JointReport, PmfReport, write_report,
};

/// Run the Markov chain pipeline.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("dtmc").entered();

    let cfg = StochsimConfig::load(args.config.as_deref())?;
    let seed = args.seed.or(cfg.seed);

    let rule = convert::build_dtmc_rule(&cfg.dtmc)?;
    let n_states = rule.n_states();
    let ens_cfg = convert::build_ensemble_config(cfg.dtmc.horizon, cfg.dtmc.n_episodes, seed)?;

    info!(
        n_states,
        horizon = ens_cfg.horizon(),
        n_episodes = ens_cfg.n_episodes(),
        "simulating Markov chain"
    );
    let ensemble = Simulator::new(rule, ens_cfg)
        .context("failed to simulate Markov chain ensemble")?
        .into_ensemble();

    let report = build_report(&ensemble, n_states, &cfg)?;
    write_report(&report, args.output.as_deref())
}

fn build_report(
    ensemble: &Ensemble<u32>,
    n_states: usize,
    cfg: &StochsimConfig,
) -> Result<DtmcReport> {
    let pmfs = cfg
        .dtmc
        .pmf_indices
        .iter()
        .map(|&n| -> Result<PmfReport> {
            let pmf = ensemble
                .pmf(n)
                .with_context(|| format!("pmf query at index {n}"))?;
            Ok(PmfReport::new(n, &pmf))
        })
        .collect::<Result<Vec<_>>>()?;

    let joint = cfg
        .dtmc
        .joint
        .iter()
        .map(|q| -> Result<JointReport> {
            let a = convert::build_event(&q.a);
            let b = convert::build_event(&q.b);
            let probability = ensemble
                .joint_probability(&a, &b)
                .context("joint probability query")?;
            info!(probability, "joint probability");
            Ok(JointReport {
                a: event_report(&a),
                b: event_report(&b),
                probability,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let conditional = cfg
        .dtmc
        .conditional
        .iter()
        .map(|q| -> Result<ConditionalReport> {
            let event = convert::build_event(&q.event);
            let given = convert::build_event(&q.given);
            let probability = ensemble
                .conditional_probability(&event, &given)
                .context("conditional probability query")?;
            info!(probability, "conditional probability");
            Ok(ConditionalReport {
                event: event_report(&event),
                given: event_report(&given),
                probability,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DtmcReport {
        n_states,
        horizon: ensemble.horizon(),
        n_episodes: ensemble.len(),
        pmfs,
        joint,
        conditional,
    })
}

fn event_report(event: &Event<u32>) -> EventReport {
    EventReport {
        index: event.index(),
        values: event.values().values().to_vec(),
    }
}
