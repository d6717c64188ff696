//! Task spawning.
//!
//! On wasm32 futures run on the browser microtask queue. Natively there is
//! no event loop, so the future runs to completion on the spot; this keeps
//! `on_mount` fetch flows executable from ordinary tests.

use std::future::Future;

/// Spawns a future on the current thread.
#[cfg(target_arch = "wasm32")]
pub fn spawn_local<F>(future: F)
where
	F: Future<Output = ()> + 'static,
{
	wasm_bindgen_futures::spawn_local(future);
}

/// Runs the future to completion immediately. Nested spawns are queued and
/// drained by the outermost call so `block_on` is never re-entered.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_local<F>(future: F)
where
	F: Future<Output = ()> + 'static,
{
	use std::cell::{Cell, RefCell};
	use std::collections::VecDeque;
	use std::pin::Pin;

	thread_local! {
		static QUEUE: RefCell<VecDeque<Pin<Box<dyn Future<Output = ()>>>>> =
			RefCell::new(VecDeque::new());
		static DRAINING: Cell<bool> = const { Cell::new(false) };
	}

	QUEUE.with(|queue| queue.borrow_mut().push_back(Box::pin(future)));
	if DRAINING.with(Cell::get) {
		return;
	}
	DRAINING.with(|draining| draining.set(true));
	while let Some(next) = QUEUE.with(|queue| queue.borrow_mut().pop_front()) {
		futures::executor::block_on(next);
	}
	DRAINING.with(|draining| draining.set(false));
}
