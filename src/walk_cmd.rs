//! Walk command: estimate return times of a simple random walk.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use stochsim_ensemble::make_rng;
use stochsim_walk::estimate_return_times;

use crate::cli::WalkArgs;
use crate::config::StochsimConfig;
use crate::convert;
use crate::report::{WalkReport, write_report};

/// Run the random-walk return-time estimate.
pub fn run(args: WalkArgs) -> Result<()> {
    let _cmd = info_span!("walk").entered();

    let cfg = StochsimConfig::load(args.run.config.as_deref())?;
    let seed = args.run.seed.or(cfg.seed);
    let n_steps = args.steps.unwrap_or(cfg.walk.steps);
    let walk_cfg = convert::build_walk_config(&cfg.walk)?;

    let mut rng = make_rng(seed);

    info!(p = walk_cfg.p(), q = walk_cfg.q(), x0 = walk_cfg.x0(), n_steps, "running walk");
    let result = estimate_return_times(&walk_cfg, n_steps, &mut rng)
        .context("random walk failed")?;
    info!(n_returns = result.n_returns(), "walk finished");

    let mean_return_time = (result.n_returns() > 0).then(|| result.mean());
    let report = WalkReport {
        p: walk_cfg.p(),
        q: walk_cfg.q(),
        x0: walk_cfg.x0(),
        n_steps: result.n_steps(),
        n_returns: result.n_returns(),
        mean_return_time,
        open_excursion: result.open_excursion(),
        return_times: result.return_times().to_vec(),
        cumulative_average: result.cumulative_average().to_vec(),
    };
    write_report(&report, args.run.output.as_deref())
}
