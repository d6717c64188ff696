//! Top navigation bar, shown on every page.

use crate::component::Component;
use crate::dom::EventType;
use crate::router::Router;
use crate::view::{ElementView, IntoView, View};

const MENU: [(&str, &str); 5] = [
	("/", "Dashboard"),
	("/customers", "Customers"),
	("/products", "Products"),
	("/orders", "Orders"),
	("/summary", "Summary"),
];

/// The menu bar. Highlights the item whose path exactly matches the current
/// one and navigates through the router instead of full page loads.
pub struct Navbar {
	router: Router,
}

impl Navbar {
	/// Builds the navbar against the app router.
	pub fn new(router: Router) -> Self {
		Self { router }
	}

	fn menu_item(&self, path: &'static str, label: &'static str) -> View {
		let active = self.router.current_path() == path;
		let class = if active {
			"border-b-2 border-yellow-300 font-semibold transition duration-200"
		} else {
			"hover:text-yellow-300 transition duration-200"
		};
		let router = self.router.clone();
		ElementView::new("li")
			.child(
				ElementView::new("a")
					.attr("href", path)
					.attr("class", class)
					.on(EventType::Click, move |event| {
						event.prevent_default();
						router.push(path);
					})
					.child(label),
			)
			.into_view()
	}
}

impl Component for Navbar {
	fn render(&self) -> View {
		ElementView::new("nav")
			.attr("class", "bg-blue-700 text-white shadow-lg")
			.child(
				ElementView::new("div")
					.attr(
						"class",
						"max-w-7xl mx-auto px-4 py-3 flex items-center justify-between",
					)
					.child(
						ElementView::new("h1")
							.attr("class", "text-lg font-semibold tracking-wide")
							.child("🧾 Order Management"),
					)
					.child(ElementView::new("ul").attr("class", "flex gap-6").children(
						MENU.map(|(path, label)| self.menu_item(path, label)),
					)),
			)
			.into_view()
	}

	fn name(&self) -> &'static str {
		"Navbar"
	}
}
