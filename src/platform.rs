//! Unified platform types so view and page code compiles on both wasm32 and
//! native targets without per-call-site cfg gates.

/// A DOM event on wasm32.
#[cfg(target_arch = "wasm32")]
pub type Event = web_sys::Event;

/// Native placeholder event. Tests construct these directly when they need
/// to invoke a handler.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone)]
pub struct Event;

#[cfg(not(target_arch = "wasm32"))]
impl Event {
	/// No-op outside the browser.
	pub fn prevent_default(&self) {}
}
