use std::future::Future;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tokio::sync::{AcquireError, Semaphore};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error};

/// Used when a caller asks for a limit of zero.
pub const DEFAULT_LIMIT: usize = 100;

fn effective_limit(limit: usize) -> usize {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit
    }
}

/// A group of spawned tasks with at most `limit` of them running at once.
///
/// [`LimitGroup::spawn`] waits for a free slot before spawning, so the caller is
/// throttled instead of queueing unbounded work.
pub struct LimitGroup<T> {
    semaphore: Arc<Semaphore>,
    tasks: JoinSet<T>,
    limit: usize,
}

impl<T: Send + 'static> LimitGroup<T> {
    pub fn new(limit: usize) -> Self {
        let limit = effective_limit(limit);
        Self {
            semaphore: Arc::new(Semaphore::new(limit)),
            tasks: JoinSet::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of tasks currently holding a slot.
    pub fn in_flight(&self) -> usize {
        self.limit - self.semaphore.available_permits()
    }

    /// Waits for a slot, then spawns `fut` on the current runtime.
    pub async fn spawn<F>(&mut self, fut: F) -> Result<(), AcquireError>
    where
        F: Future<Output = T> + Send + 'static,
    {
        let permit = self.semaphore.clone().acquire_owned().await?;
        self.tasks.spawn(async move {
            let output = fut.await;
            drop(permit);
            output
        });
        Ok(())
    }

    /// Waits for every spawned task and returns the outputs in completion order.
    ///
    /// All tasks are drained even when one of them panicked; the first join error is
    /// then returned.
    pub async fn wait(mut self) -> Result<Vec<T>, JoinError> {
        let mut outputs = Vec::with_capacity(self.tasks.len());
        let mut first_error = None;

        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(output) => outputs.push(output),
                Err(e) => {
                    error!("Task in limit group failed: {}", e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(outputs),
        }
    }
}

/// Applies `f` to every item with at most `limit` futures in flight and returns the
/// outputs in input order.
pub async fn map_bounded<I, F, Fut>(items: I, limit: usize, f: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    let limit = effective_limit(limit);
    debug!("Running bounded map with limit {}", limit);
    stream::iter(items).map(f).buffered(limit).collect().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn track(current: &AtomicUsize, peak: &AtomicUsize) {
        let now = current.fetch_add(1, Ordering::SeqCst) + 1;
        peak.fetch_max(now, Ordering::SeqCst);
    }

    #[tokio::test]
    async fn test_limit_group_caps_concurrency() {
        let current = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let mut group = LimitGroup::new(3);

        for i in 0..20u64 {
            let current = current.clone();
            let peak = peak.clone();
            group
                .spawn(async move {
                    track(&current, &peak);
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    current.fetch_sub(1, Ordering::SeqCst);
                    i
                })
                .await
                .unwrap();
            assert!(group.in_flight() <= 3);
        }

        let mut outputs = group.wait().await.unwrap();
        outputs.sort_unstable();
        assert_eq!(outputs, (0..20).collect::<Vec<_>>());
        assert!(peak.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_zero_limit_uses_default() {
        let group: LimitGroup<()> = LimitGroup::new(0);
        assert_eq!(group.limit(), DEFAULT_LIMIT);
        assert!(group.wait().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wait_reports_panicked_task() {
        let mut group = LimitGroup::new(2);
        group.spawn(async { 1 }).await.unwrap();
        group
            .spawn(async {
                if true {
                    panic!("boom");
                }
                2
            })
            .await
            .unwrap();
        group.spawn(async { 3 }).await.unwrap();

        let err = group.wait().await.unwrap_err();
        assert!(err.is_panic());
    }

    #[tokio::test]
    async fn test_map_bounded_keeps_input_order() {
        let outputs = map_bounded(vec![30u64, 1, 20, 5], 4, |delay| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            delay * 2
        })
        .await;
        assert_eq!(outputs, vec![60, 2, 40, 10]);
    }

    #[tokio::test]
    async fn test_map_bounded_caps_concurrency() {
        let current = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);

        let outputs = map_bounded(0..10, 2, |i| {
            let current = &current;
            let peak = &peak;
            async move {
                track(current, peak);
                tokio::time::sleep(Duration::from_millis(2)).await;
                current.fetch_sub(1, Ordering::SeqCst);
                i
            }
        })
        .await;

        assert_eq!(outputs, (0..10).collect::<Vec<_>>());
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }
}
