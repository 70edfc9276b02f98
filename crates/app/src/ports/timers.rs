//! Timer port — delays on the page's event loop.

use std::future::Future;

/// Time-based scheduling.
pub trait Timers: Clone + 'static {
    /// Resolve after `ms` milliseconds.
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;

    /// Run `task` after `ms` milliseconds without awaiting it.
    fn defer(&self, ms: u32, task: Box<dyn FnOnce()>);

    /// Resolve once the next frame has been laid out.
    fn next_frame(&self) -> impl Future<Output = ()>;
}
