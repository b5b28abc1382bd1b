//! Spaced, strictly sequential iteration.

use std::time::Duration;

/// Fixed spacing between consecutive items of a sequential run.
///
/// The delay is inserted after every item except the last, so a run over
/// `n` items spends `(n - 1) * interval` sleeping in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    interval: Duration,
}

impl Pacing {
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// No spacing at all.
    pub const fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs `f` over `items` one at a time, in order, sleeping between items.
    ///
    /// The next item is not started until the previous future has completed
    /// and the interval has elapsed. Results are returned in input order.
    pub async fn run<I, T, F, Fut, R>(&self, items: I, mut f: F) -> Vec<R>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = R>,
    {
        let mut items = items.into_iter().peekable();
        let mut out = Vec::with_capacity(items.size_hint().0);

        while let Some(item) = items.next() {
            out.push(f(item).await);

            if items.peek().is_some() && !self.interval.is_zero() {
                tokio::time::sleep(self.interval).await;
            }
        }

        out
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}
