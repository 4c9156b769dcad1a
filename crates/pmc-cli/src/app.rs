use std::io::Write;

use clap::Parser;
use pmc_matrix::{
    ComputeBackend, ComputeConfig, Operands, ResultSet, SequentialBackend, ThreadedBackend,
    WorkerSpawner, DEFAULT_DIM, DEFAULT_WORKERS,
};
use pmc_source::{MatrixSource, UniformSource, DEFAULT_HIGH, DEFAULT_LOW};
use tracing::{debug, info};

use crate::error::{CliError, Result};
use crate::report;

/// Sum, difference, and product of two random square matrices, computed on
/// a fixed pool of worker threads.
#[derive(Parser, Debug, Clone)]
#[command(name = "parallel-matrix", version, about)]
pub struct Cli {
    /// Matrix dimension (N for N x N matrices)
    #[arg(long, env = "PMC_DIM", default_value_t = DEFAULT_DIM)]
    pub dim: usize,

    /// Number of worker threads
    #[arg(long, env = "PMC_WORKERS", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Seed for the random fill; omit for a fresh seed on every run
    #[arg(long, env = "PMC_SEED")]
    pub seed: Option<u64>,

    /// Smallest random cell value
    #[arg(
        long,
        env = "PMC_LOW",
        default_value_t = DEFAULT_LOW,
        allow_negative_numbers = true
    )]
    pub low: i32,

    /// Largest random cell value (inclusive)
    #[arg(
        long,
        env = "PMC_HIGH",
        default_value_t = DEFAULT_HIGH,
        allow_negative_numbers = true
    )]
    pub high: i32,

    /// Recompute on a single thread and fail if the results differ
    #[arg(long)]
    pub verify: bool,
}

/// Run the whole program: fill, print inputs, compute, print results.
///
/// On a launch or join failure the inputs have already been written but no
/// result matrix is.
pub fn run<S: WorkerSpawner>(cli: &Cli, spawner: S, out: &mut impl Write) -> Result<()> {
    let config = ComputeConfig::new(cli.dim, cli.workers)?;
    let mut source = match cli.seed {
        Some(seed) => UniformSource::seeded(seed, cli.low, cli.high)?,
        None => UniformSource::from_entropy(cli.low, cli.high)?,
    };
    info!(
        dim = config.dim(),
        workers = config.workers(),
        seed = ?cli.seed,
        source = source.name(),
        "starting run"
    );

    let a = source.fill(config.dim());
    let b = source.fill(config.dim());
    let operands = Operands::new(a, b)?;
    report::write_inputs(out, &operands)?;

    let backend = ThreadedBackend::with_spawner(config, spawner);
    let results = backend.compute(&operands)?;
    if cli.verify {
        verify(&operands, &results)?;
    }

    report::write_results(out, &results)?;
    out.flush()?;
    info!(backend = backend.name(), "run complete");
    Ok(())
}

fn verify(operands: &Operands, results: &ResultSet) -> Result<()> {
    let expected = SequentialBackend::new().compute(operands)?;
    let pairs = [
        ("sum", &results.sum, &expected.sum),
        ("difference", &results.difference, &expected.difference),
        ("product", &results.product, &expected.product),
    ];
    for (label, got, want) in pairs {
        if got != want {
            return Err(CliError::VerificationFailed(label.to_string()));
        }
    }
    debug!("results match the sequential backend");
    Ok(())
}
