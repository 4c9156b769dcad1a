use std::any::Any;
use std::thread::{self, ScopedJoinHandle};

use tracing::debug;

use crate::backend::{ComputeBackend, Operands, ResultSet};
use crate::config::ComputeConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::partition::partition;
use crate::spawner::{OsThreadSpawner, WorkerSpawner};
use crate::worker::{compute_span, OutputSpan};

/// Multi-threaded backend.
///
/// Splits the cell space into `config.workers()` contiguous ranges, runs one
/// thread per range, and waits for all of them before assembling the result.
/// Each worker writes only its own slice of the output buffers, so no locking
/// is involved.
#[derive(Debug, Clone)]
pub struct ThreadedBackend<S = OsThreadSpawner> {
    config: ComputeConfig,
    spawner: S,
}

impl ThreadedBackend<OsThreadSpawner> {
    pub fn new(config: ComputeConfig) -> Self {
        ThreadedBackend {
            config,
            spawner: OsThreadSpawner,
        }
    }
}

impl<S: WorkerSpawner> ThreadedBackend<S> {
    /// Create a backend that launches workers through `spawner`.
    pub fn with_spawner(config: ComputeConfig, spawner: S) -> Self {
        ThreadedBackend { config, spawner }
    }

    pub fn config(&self) -> &ComputeConfig {
        &self.config
    }
}

impl Default for ThreadedBackend<OsThreadSpawner> {
    fn default() -> Self {
        Self::new(ComputeConfig::default())
    }
}

impl<S: WorkerSpawner> ComputeBackend for ThreadedBackend<S> {
    fn name(&self) -> &str {
        "threaded"
    }

    fn compute(&self, operands: &Operands) -> Result<ResultSet> {
        let dim = self.config.dim();
        if operands.dim() != dim {
            return Err(MatrixError::DimensionMismatch {
                expected: dim,
                got: operands.dim(),
            });
        }

        let items = partition(&self.config);
        let cells = self.config.cells();
        let mut sum = vec![0i32; cells];
        let mut difference = vec![0i32; cells];
        let mut product = vec![0i32; cells];

        let spans = OutputSpan::split(&items, &mut sum, &mut difference, &mut product);

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(spans.len());
            let mut launch_failure = None;

            for span in spans {
                let worker = span.item.worker;
                debug!(
                    worker,
                    start = span.item.start,
                    end = span.item.end,
                    "dispatching"
                );
                match self
                    .spawner
                    .spawn(scope, worker, move || compute_span(operands, span))
                {
                    Ok(handle) => handles.push((worker, handle)),
                    Err(source) => {
                        launch_failure = Some(MatrixError::WorkerLaunch { worker, source });
                        break;
                    }
                }
            }

            // Workers already running are always joined, even after a launch
            // failure; there is no way to stop them early.
            let joined = join_all(handles);
            match launch_failure {
                Some(err) => Err(err),
                None => joined,
            }
        })?;

        Ok(ResultSet {
            sum: Matrix::from_vec(dim, sum)?,
            difference: Matrix::from_vec(dim, difference)?,
            product: Matrix::from_vec(dim, product)?,
        })
    }
}

/// Join every handle in order, returning the first failure.
fn join_all(handles: Vec<(usize, ScopedJoinHandle<'_, ()>)>) -> Result<()> {
    let mut first_failure = None;
    for (worker, handle) in handles {
        match handle.join() {
            Ok(()) => debug!(worker, "joined"),
            Err(payload) => {
                if first_failure.is_none() {
                    first_failure = Some(MatrixError::WorkerJoin {
                        worker,
                        reason: panic_message(payload.as_ref()),
                    });
                }
            }
        }
    }
    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("worker panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("worker panicked: {}", s)
    } else {
        "worker panicked".to_string()
    }
}
