//! Sleep strategies for retry gates.

use std::time::Duration;

/// Blocks the calling thread between attempts
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Real blocking sleep on the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSleeper;

impl Sleeper for NoopSleeper {
    fn sleep(&mut self, _duration: Duration) {}
}

// Closures double as recording stubs in tests
impl<F> Sleeper for F
where
    F: FnMut(Duration),
{
    fn sleep(&mut self, duration: Duration) {
        self(duration);
    }
}
