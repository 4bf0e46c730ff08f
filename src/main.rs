//! Trains a network on one of the toy datasets, prints its decision map and
//! then answers point queries read from stdin.
//!
//! Run with:
//!   cargo run --release -- xor
//!   cargo run --release -- quad --steps 50000 --seed 7
//!   RUST_LOG=debug cargo run -- circ --config spec.json

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use backprop_nn::data::evaluate_grid;
use backprop_nn::{
    train_online, ActivationSpec, DatasetKind, Grid, Network, NetworkSpec, Result, Sgd, TrainConfig,
};

const DEFAULT_STEPS: usize = 20_000;
/// Shades from strongly negative to strongly positive output.
const SHADES: &[u8] = b"#%+-. .-+%@";

struct Args {
    dataset: DatasetKind,
    steps: usize,
    seed: Option<u64>,
    config: Option<String>,
}

fn usage() -> ! {
    eprintln!("Usage: backprop-nn <xor|quad|circ> [--steps N] [--seed S] [--config spec.json]");
    process::exit(2);
}

fn parse_args() -> Args {
    let mut args = env::args().skip(1);
    let dataset = match args.next().map(|s| s.parse::<DatasetKind>()) {
        Some(Ok(kind)) => kind,
        Some(Err(e)) => {
            eprintln!("{e}");
            usage();
        }
        None => DatasetKind::Xor,
    };

    let mut parsed = Args {
        dataset,
        steps: DEFAULT_STEPS,
        seed: None,
        config: None,
    };

    while let Some(flag) = args.next() {
        let value = args.next().unwrap_or_else(|| usage());
        match flag.as_str() {
            "--steps" => parsed.steps = value.parse().unwrap_or_else(|_| usage()),
            "--seed" => parsed.seed = Some(value.parse().unwrap_or_else(|_| usage())),
            "--config" => parsed.config = Some(value),
            _ => usage(),
        }
    }

    parsed
}

fn shade(value: f64) -> char {
    let clamped = value.clamp(-1.0, 1.0);
    let idx = ((clamped + 1.0) / 2.0 * (SHADES.len() - 1) as f64).round() as usize;
    SHADES[idx] as char
}

fn print_map(map: &[Vec<f64>]) {
    for row in map {
        let line: String = row.iter().map(|&v| shade(v)).collect();
        println!("{line}");
    }
}

/// Reads points until an empty line or EOF and prints the network output.
fn query_loop(network: &Network) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("Point: ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().is_empty() {
            return Ok(());
        }

        let point: std::result::Result<Vec<f64>, _> = line.split_whitespace().map(str::parse).collect();
        match point {
            Ok(point) => match network.apply(&point) {
                Ok(output) => println!("{point:?} -> {output:?}"),
                Err(e) => warn!("{e}"),
            },
            Err(e) => warn!("could not parse point: {e}"),
        }
    }
}

fn run(args: Args) -> Result<()> {
    let spec = match &args.config {
        Some(path) => NetworkSpec::load_json(path)?,
        None => NetworkSpec::new(args.dataset.layer_widths(), ActivationSpec::default()),
    };
    info!("dataset {}, spec {:?}", args.dataset, spec);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut network = spec.build(&mut rng)?;
    let config = TrainConfig::new(args.steps).report_every((args.steps / 20).max(1));
    let mut source = args.dataset;
    let done = train_online(
        &mut network,
        &mut source,
        &Sgd::new(spec.learning_rate),
        &config,
        &mut rng,
    )?;
    info!("trained for {done} steps");

    let dataset = args.dataset;
    let map = evaluate_grid(&network, &Grid::default(), |x, y| dataset.featurize(x, y))?;
    print_map(&map);

    for i in 0..network.layer_count() {
        info!("layer {i}: weights {:?}, biases {:?}", network.weights(i), network.biases(i));
    }

    query_loop(&network)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(parse_args()) {
        error!("{e}");
        process::exit(1);
    }
}
