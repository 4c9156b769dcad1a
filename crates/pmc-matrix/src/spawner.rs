use std::fmt::Debug;
use std::io;
use std::thread::{self, Scope, ScopedJoinHandle};

/// Launches worker tasks as scoped threads.
///
/// Implementations must either start `task` on a new thread and return its
/// handle, or return the launch error without running `task`.
pub trait WorkerSpawner: Send + Sync + Debug {
    fn spawn<'scope, 'env, F>(
        &self,
        scope: &'scope Scope<'scope, 'env>,
        worker: usize,
        task: F,
    ) -> io::Result<ScopedJoinHandle<'scope, ()>>
    where
        F: FnOnce() + Send + 'scope;
}

/// Spawns one named OS thread per worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsThreadSpawner;

impl WorkerSpawner for OsThreadSpawner {
    fn spawn<'scope, 'env, F>(
        &self,
        scope: &'scope Scope<'scope, 'env>,
        worker: usize,
        task: F,
    ) -> io::Result<ScopedJoinHandle<'scope, ()>>
    where
        F: FnOnce() + Send + 'scope,
    {
        thread::Builder::new()
            .name(format!("pmc-worker-{}", worker))
            .spawn_scoped(scope, task)
    }
}
