//! The view tree: a renderable description of DOM content.
//!
//! [`View`] renders two ways: [`View::render_to_string`] produces escaped
//! HTML (what the native tests assert against), and [`View::mount`] builds
//! live DOM nodes and wires event listeners on wasm32.

use crate::dom::{self, EventHandler, EventType};
use crate::platform::Event;
use std::borrow::Cow;
use std::rc::Rc;
use thiserror::Error;

/// Error raised while mounting a view into the DOM.
#[derive(Debug, Clone, Error)]
pub enum MountError {
	/// DOM access failed.
	#[error(transparent)]
	Dom(#[from] dom::DomError),
}

/// A unified representation of renderable content.
#[derive(Debug)]
pub enum View {
	/// A DOM element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// Multiple views without a wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	Empty,
}

/// A DOM element in the view tree, built fluently.
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<View>,
	is_void: bool,
	event_handlers: Vec<(EventType, EventHandler)>,
}

impl std::fmt::Debug for ElementView {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ElementView")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("event_handlers", &self.event_handlers.len())
			.finish()
	}
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			event_handlers: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Attaches an event handler.
	pub fn on(mut self, event_type: EventType, handler: impl Fn(Event) + 'static) -> Self {
		self.event_handlers.push((event_type, Rc::new(handler)));
		self
	}

	/// The tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// The attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// The child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Whether the element has no closing tag.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// The attached event handlers.
	pub fn handlers(&self) -> &[(EventType, EventHandler)] {
		&self.event_handlers
	}

	/// Invokes every handler attached for `event_type` with a fresh event.
	/// Native only; tests drive submit and click flows through this.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn fire(&self, event_type: EventType) {
		for (attached, handler) in &self.event_handlers {
			if *attached == event_type {
				handler(crate::platform::Event);
			}
		}
	}
}

impl View {
	/// Starts building an element.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view tree to an HTML string with escaping.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_inner(&mut output);
		output
	}

	fn render_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());
				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}
				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => output.push_str(&html_escape(text)),
			View::Fragment(children) => {
				for child in children {
					child.render_inner(output);
				}
			}
			View::Empty => {}
		}
	}

	/// Mounts the view under `parent`, creating DOM nodes and attaching
	/// event listeners. The returned handles own the listener closures;
	/// keeping them for exactly one mounted tree bounds listener memory
	/// across remounts.
	#[cfg(target_arch = "wasm32")]
	pub fn mount(self, parent: &dom::Element) -> Result<Vec<dom::ListenerHandle>, MountError> {
		let document = dom::document()?;
		let mut listeners = Vec::new();
		self.mount_inner(&document, parent, &mut listeners)?;
		Ok(listeners)
	}

	#[cfg(target_arch = "wasm32")]
	fn mount_inner(
		self,
		document: &dom::Document,
		parent: &dom::Element,
		listeners: &mut Vec<dom::ListenerHandle>,
	) -> Result<(), MountError> {
		match self {
			View::Element(el) => {
				let element = document.create_element(&el.tag)?;
				for (name, value) in &el.attrs {
					element.set_attribute(name, value)?;
				}
				for (event_type, handler) in &el.event_handlers {
					listeners.push(element.listen(*event_type, handler.clone()));
				}
				for child in el.children {
					child.mount_inner(document, &element, listeners)?;
				}
				parent.append_child(&element)?;
			}
			View::Text(text) => parent.append_text(&text)?,
			View::Fragment(children) => {
				for child in children {
					child.mount_inner(document, parent, listeners)?;
				}
			}
			View::Empty => {}
		}
		Ok(())
	}

	/// Mounting is a no-op off-browser.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn mount(self, _parent: &dom::Element) -> Result<Vec<dom::ListenerHandle>, MountError> {
		Ok(Vec::new())
	}

	/// Depth-first search for the first element with `tag`.
	pub fn find_element(&self, tag: &str) -> Option<&ElementView> {
		match self {
			View::Element(el) => {
				if el.tag_name() == tag {
					return Some(el);
				}
				el.child_views().iter().find_map(|child| child.find_element(tag))
			}
			View::Fragment(children) => {
				children.iter().find_map(|child| child.find_element(tag))
			}
			View::Text(_) | View::Empty => None,
		}
	}
}

/// Conversion into a [`View`].
pub trait IntoView {
	/// Converts self into a view.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(IntoView::into_view).collect())
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

impl<A: IntoView, B: IntoView> IntoView for (A, B) {
	fn into_view(self) -> View {
		View::Fragment(vec![self.0.into_view(), self.1.into_view()])
	}
}

impl<A: IntoView, B: IntoView, C: IntoView> IntoView for (A, B, C) {
	fn into_view(self) -> View {
		View::Fragment(vec![
			self.0.into_view(),
			self.1.into_view(),
			self.2.into_view(),
		])
	}
}

fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
