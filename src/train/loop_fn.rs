use std::sync::atomic::Ordering;

use log::{debug, info};
use rand::RngCore;

use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::progress::ProgressStats;
use crate::train::source::SampleSource;
use crate::train::train_config::TrainConfig;

/// Runs up to `config.steps` online updates, one sample per step, and
/// returns the number of steps completed.
///
/// # Early termination
/// The loop stops before the requested step count if:
/// - `config.stop_flag` is set to `true`, **or**
/// - the `progress_tx` receiver has been dropped.
///
/// # Errors
/// The first shape error from a sample aborts the loop. That sample has not
/// been applied; earlier ones have.
pub fn train_online<S, R>(
    network: &mut Network,
    source: &mut S,
    optimizer: &Sgd,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<usize>
where
    S: SampleSource + ?Sized,
    R: RngCore,
{
    debug!(
        "online training: {} steps, learning rate {}, widths {:?}",
        config.steps,
        optimizer.learning_rate,
        network.layer_widths()
    );

    let mut completed = 0;
    let mut window = 0;
    let mut window_error = 0.0;

    while completed < config.steps {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                debug!("stop flag set after {completed} steps");
                break;
            }
        }

        let sample = source.next_sample(rng);
        let output = network.apply(&sample.input)?;
        window_error += MseLoss::loss(&output, &sample.expected)?;

        optimizer.step(network, &sample.input, &sample.expected)?;
        completed += 1;
        window += 1;

        if window == config.report_every || completed == config.steps {
            let stats = ProgressStats {
                step: completed,
                total_steps: config.steps,
                window,
                mean_squared_error: window_error / window as f64,
            };
            info!(
                "step {}/{}: mse {:.6}",
                stats.step, stats.total_steps, stats.mean_squared_error
            );

            window = 0;
            window_error = 0.0;

            if let Some(ref tx) = config.progress_tx {
                if tx.send(stats).is_err() {
                    debug!("progress receiver dropped after {completed} steps");
                    break;
                }
            }
        }
    }

    Ok(completed)
}
