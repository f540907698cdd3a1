// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` tick source.
//!
//! [`IntervalLoop`] wakes the host every `period` using the browser's
//! `setInterval` API and hands each callback the current [`HostTime`] from
//! `performance.now()`. Browsers may throttle or delay intervals in
//! background tabs; the session's [`TickTimer`] absorbs the drift, so the
//! loop only needs to wake at least as often as the active provider ticks.
//!
//! [`HostTime`]: horologium_core::time::HostTime
//! [`TickTimer`]: horologium_core::timer::TickTimer

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use horologium_core::time::{Duration, HostTime};

// Direct global bindings instead of `web_sys::Window` methods, so no
// Window object has to be fetched (and unwrapped) on every tick.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, millis: f64) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

/// A `setInterval` loop that calls back with the current [`HostTime`].
///
/// Create with [`IntervalLoop::new`], then call [`start`](Self::start) to
/// begin receiving callbacks. The interval keeps firing until
/// [`stop`](Self::stop) is called or the `IntervalLoop` is dropped.
pub struct IntervalLoop {
    inner: Rc<IntervalInner>,
}

type IntervalClosure = Closure<dyn FnMut()>;

struct IntervalInner {
    /// The JS closure registered with `setInterval`.
    ///
    /// Kept alive here for as long as the interval may fire.
    closure: RefCell<Option<IntervalClosure>>,

    /// The user-supplied callback.
    callback: RefCell<Box<dyn FnMut(HostTime)>>,

    /// The ID returned by `setInterval`, present while running.
    interval_id: Cell<Option<i32>>,

    /// Period of the running interval.
    period: Cell<Duration>,
}

impl IntervalLoop {
    /// Creates a new `IntervalLoop` that is **not yet running**.
    pub fn new(callback: impl FnMut(HostTime) + 'static) -> Self {
        Self {
            inner: Rc::new(IntervalInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                interval_id: Cell::new(None),
                period: Cell::new(Duration::ZERO),
            }),
        }
    }

    /// Starts firing every `period`.
    ///
    /// A running loop is stopped first, so this also serves to change the
    /// period when the active provider changes.
    pub fn start(&self, period: Duration) {
        self.stop();

        if self.inner.closure.borrow().is_none() {
            let inner = Rc::downgrade(&self.inner);
            let closure = Closure::wrap(Box::new(move || {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                if inner.interval_id.get().is_none() {
                    return;
                }
                inner.callback.borrow_mut()(crate::now());
            }) as Box<dyn FnMut()>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        if let Some(ref closure) = *self.inner.closure.borrow() {
            let millis = period.millis() as f64;
            let id = set_interval(closure.as_ref().unchecked_ref(), millis);
            self.inner.interval_id.set(Some(id));
            self.inner.period.set(period);
        }
    }

    /// Stops the loop. Can be restarted by calling [`start`](Self::start)
    /// again.
    pub fn stop(&self) {
        if let Some(id) = self.inner.interval_id.take() {
            clear_interval(id);
        }
    }

    /// Returns `true` if the loop is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.interval_id.get().is_some()
    }

    /// Returns the period of the running (or last started) interval.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.inner.period.get()
    }
}

impl Drop for IntervalLoop {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for IntervalLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalLoop")
            .field("running", &self.is_running())
            .field("period", &self.inner.period.get())
            .finish_non_exhaustive()
    }
}
