//! [`Timers`] backed by `setTimeout` and `requestAnimationFrame`.

use std::future::Future;

use folio_app::ports::Timers;
use futures::channel::oneshot;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        TimeoutFuture::new(ms)
    }

    fn defer(&self, ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(ms, task).forget();
    }

    fn next_frame(&self) -> impl Future<Output = ()> {
        let (tx, rx) = oneshot::channel::<()>();
        let callback = Closure::once_into_js(move || {
            let _ = tx.send(());
        });
        let requested = web_sys::window().is_some_and(|window| {
            window
                .request_animation_frame(callback.unchecked_ref())
                .is_ok()
        });
        async move {
            if requested {
                let _ = rx.await;
            }
        }
    }
}
