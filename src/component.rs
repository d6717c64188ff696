//! Component trait: the unit of rendering for pages and shared widgets.

use crate::view::View;
use std::rc::Rc;

/// A renderable unit of UI.
///
/// Pages implement this; the app shell holds them as `Rc<dyn Component>` and
/// re-renders through a reactive effect, so any `Signal::get` made inside
/// [`Component::render`] subscribes the whole page to that signal.
pub trait Component: 'static {
	/// Renders the component to a view tree. Must not write signals.
	fn render(&self) -> View;

	/// Called once when the component enters the tree; list views start
	/// their fetches here.
	fn on_mount(self: Rc<Self>) {}

	/// The component's name, for logging.
	fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::{ElementView, IntoView};

	struct Greeting {
		who: String,
	}

	impl Component for Greeting {
		fn render(&self) -> View {
			ElementView::new("div")
				.child(format!("Halo, {}!", self.who))
				.into_view()
		}

		fn name(&self) -> &'static str {
			"Greeting"
		}
	}

	#[test]
	fn render_through_trait_object() {
		let component: Rc<dyn Component> = Rc::new(Greeting {
			who: "Dunia".to_string(),
		});
		assert_eq!(component.render().render_to_string(), "<div>Halo, Dunia!</div>");
		assert_eq!(component.name(), "Greeting");
	}
}
