//! Browser history integration.
//!
//! The router owns the path signal; this module only talks to
//! `window.location` and `window.history`. Off-browser the path is always
//! `/` and pushes are dropped.

#[cfg(target_arch = "wasm32")]
mod imp {
	use wasm_bindgen::JsValue;

	/// The current `location.pathname`, `/` when unavailable.
	pub fn current_path() -> String {
		web_sys::window()
			.and_then(|window| window.location().pathname().ok())
			.unwrap_or_else(|| "/".to_string())
	}

	/// Pushes a new history entry without reloading.
	pub fn push(path: &str) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Ok(history) = window.history() {
			let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
		}
	}
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
	/// Stub: off-browser the app always starts at the root.
	pub fn current_path() -> String {
		"/".to_string()
	}

	/// Stub.
	pub fn push(_path: &str) {}
}

pub use imp::{current_path, push};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn native_path_is_root() {
		assert_eq!(current_path(), "/");
		push("/customers");
		assert_eq!(current_path(), "/");
	}
}
