//! orderdesk: a browser-based admin front end for an order-management API.
//!
//! The app is a single-page WASM client. Pages fetch their collection on
//! mount, render a filterable table, and optionally show an inline creation
//! form that posts a record and refetches. A fine-grained reactive layer
//! (signals and effects) drives re-rendering; the view tree also renders to
//! plain HTML strings, which is what the native test suite asserts against.

pub mod api;
pub mod app;
pub mod component;
pub mod components;
pub mod dom;
pub mod filters;
pub mod format;
pub mod listing;
pub mod logging;
pub mod models;
pub mod pages;
pub mod platform;
pub mod reactive;
pub mod router;
pub mod spawn;
pub mod view;

pub use api::{ApiClient, ApiError};
pub use app::App;
pub use component::Component;
pub use reactive::{Effect, Signal};
pub use router::Router;
pub use view::{ElementView, IntoView, View};

/// Browser entry point: installs the panic hook and starts the app.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	if let Err(err) = App::new().run() {
		error_log!("Gagal memulai aplikasi: {err}");
	}
}
