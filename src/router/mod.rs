//! Exact-path client-side router.
//!
//! Routes map a literal path to a component factory; there are no path
//! parameters or prefix matches. The current path lives in a [`Signal`], so
//! the render effect that reads it through [`Router::current_path`] re-runs
//! on every navigation. An unmatched path resolves to nothing and the app
//! renders an empty outlet.

mod history;

use crate::component::Component;
use crate::reactive::Signal;
use std::rc::Rc;

type RouteFactory = Rc<dyn Fn() -> Rc<dyn Component>>;

/// The route table plus the reactive current path.
#[derive(Clone)]
pub struct Router {
	routes: Vec<(String, RouteFactory)>,
	current: Signal<String>,
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

impl Router {
	/// Creates an empty router at the browser's current path.
	pub fn new() -> Self {
		Self {
			routes: Vec::new(),
			current: Signal::new(history::current_path()),
		}
	}

	/// Registers a route. Matching is exact; later duplicates lose.
	pub fn route<C, F>(mut self, path: impl Into<String>, factory: F) -> Self
	where
		C: Component,
		F: Fn() -> C + 'static,
	{
		self.routes
			.push((path.into(), Rc::new(move || Rc::new(factory()) as Rc<dyn Component>)));
		self
	}

	/// The current path (tracked).
	pub fn current_path(&self) -> String {
		self.current.get()
	}

	/// Instantiates the component registered for `path`, if any.
	pub fn resolve(&self, path: &str) -> Option<Rc<dyn Component>> {
		self.routes
			.iter()
			.find(|(route, _)| route == path)
			.map(|(_, factory)| factory())
	}

	/// Navigates to `path`: pushes a history entry and updates the signal.
	/// Navigating to the current path is a no-op.
	pub fn push(&self, path: &str) {
		if self.current.with_untracked(|current| current == path) {
			return;
		}
		history::push(path);
		self.current.set(path.to_string());
	}

	/// Re-reads the path from the browser (popstate handling).
	pub fn sync_from_location(&self) {
		self.current.set(history::current_path());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::{ElementView, IntoView, View};
	use serial_test::serial;

	struct Stub(&'static str);

	impl Component for Stub {
		fn render(&self) -> View {
			ElementView::new("div").child(self.0).into_view()
		}

		fn name(&self) -> &'static str {
			self.0
		}
	}

	fn router() -> Router {
		Router::new()
			.route("/", || Stub("Dashboard"))
			.route("/customers", || Stub("Customers"))
	}

	#[test]
	#[serial]
	fn resolves_exact_paths_only() {
		let router = router();
		assert_eq!(router.resolve("/").map(|c| c.name()), Some("Dashboard"));
		assert_eq!(
			router.resolve("/customers").map(|c| c.name()),
			Some("Customers")
		);
		assert!(router.resolve("/customers/1").is_none());
		assert!(router.resolve("/missing").is_none());
	}

	#[test]
	#[serial]
	fn resolve_builds_a_fresh_instance_each_time() {
		let router = router();
		let a = router.resolve("/").unwrap();
		let b = router.resolve("/").unwrap();
		assert!(!Rc::ptr_eq(&a, &b));
	}

	#[test]
	#[serial]
	fn push_updates_current_path() {
		let router = router();
		assert_eq!(router.current_path(), "/");
		router.push("/customers");
		assert_eq!(router.current_path(), "/customers");
	}
}
