//! Application shell: route table, root mounting and the render loop.
//!
//! One top-level effect drives the whole UI. It reads the router's path
//! signal and whatever signals the active page reads during render, so both
//! navigation and page state changes re-render. The active page instance is
//! kept across re-renders of the same path (its signals are its state) and
//! replaced on navigation, which is what resets page state between visits.

use crate::component::Component;
use crate::components::Navbar;
use crate::dom::{self, DomError};
use crate::pages::{CustomersPage, DashboardPage, OrdersPage, ProductsPage, SummaryPage};
use crate::reactive::Effect;
use crate::router::Router;
use crate::view::{IntoView, MountError, View};
use crate::{error_log, info_log, warn_log};
use std::cell::RefCell;
use std::rc::Rc;

/// The admin front end.
pub struct App {
	router: Router,
}

impl Default for App {
	fn default() -> Self {
		Self::new()
	}
}

impl App {
	/// Builds the app with the full route table.
	pub fn new() -> Self {
		let router = Router::new()
			.route("/", DashboardPage::new)
			.route("/customers", CustomersPage::new)
			.route("/products", ProductsPage::new)
			.route("/orders", OrdersPage::new)
			.route("/summary", SummaryPage::new);
		Self { router }
	}

	/// The app router.
	pub fn router(&self) -> &Router {
		&self.router
	}

	/// The navbar plus the page outlet for the current path. An unmatched
	/// path renders the navbar over an empty outlet.
	pub fn shell(router: &Router, page: Option<&Rc<dyn Component>>) -> View {
		let outlet = match page {
			Some(page) => page.render(),
			None => View::empty(),
		};
		(Navbar::new(router.clone()).render(), outlet).into_view()
	}

	/// Mounts the app and starts the render loop. The effect is leaked so it
	/// outlives this call.
	pub fn run(self) -> Result<(), MountError> {
		let document = dom::document()?;
		let root = match document.element_by_id("app") {
			Some(element) => element,
			None => document.body().ok_or(DomError::Unavailable("body"))?,
		};

		self.listen_popstate();

		let router = self.router;
		let active: RefCell<Option<(String, Rc<dyn Component>)>> = RefCell::new(None);
		// Listener closures for the currently mounted tree only; replacing
		// them each render frees the previous tree's listeners.
		let listeners: RefCell<Vec<dom::ListenerHandle>> = RefCell::new(Vec::new());

		Effect::new(move || {
			let path = router.current_path();

			let stale = !matches!(&*active.borrow(), Some((current, _)) if *current == path);
			if stale {
				let page = router.resolve(&path);
				match &page {
					Some(page) => {
						info_log!("Navigasi ke {path} ({})", page.name());
						page.clone().on_mount();
					}
					None => warn_log!("Navigasi ke {path}: rute tidak dikenal"),
				}
				*active.borrow_mut() = page.map(|page| (path.clone(), page));
			}

			let view = Self::shell(&router, active.borrow().as_ref().map(|(_, page)| page));
			// Remounting destroys the focused input; put focus and cursor
			// back afterwards so typing into a filter field is seamless.
			let focus = dom::capture_focus();
			root.clear();
			match view.mount(&root) {
				Ok(handles) => *listeners.borrow_mut() = handles,
				Err(err) => error_log!("Gagal merender halaman {path}: {err}"),
			}
			if let Some(focus) = &focus {
				dom::restore_focus(focus);
			}
		})
		.forever();

		Ok(())
	}

	#[cfg(target_arch = "wasm32")]
	fn listen_popstate(&self) {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::prelude::Closure;

		let Some(window) = web_sys::window() else {
			return;
		};
		let router = self.router.clone();
		let closure = Closure::<dyn Fn(web_sys::Event)>::wrap(Box::new(move |_| {
			router.sync_from_location();
		}));
		let _ = window
			.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
		closure.forget();
	}

	#[cfg(not(target_arch = "wasm32"))]
	fn listen_popstate(&self) {}
}
