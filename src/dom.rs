//! Thin wrappers over `web_sys` DOM access.
//!
//! Everything here has a native counterpart that compiles to a stub, so the
//! view layer and the pages build (and test) off-browser. The stubs follow
//! the convention of the HTTP client: browser-only operations succeed
//! trivially or report unavailability instead of panicking.

use crate::platform::Event;
use std::rc::Rc;
use thiserror::Error;

/// DOM event kinds the views attach handlers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
	/// Mouse click.
	Click,
	/// Text typed into an input.
	Input,
	/// Committed value change (selects, date inputs).
	Change,
	/// Form submission.
	Submit,
}

impl EventType {
	/// The DOM event name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Click => "click",
			Self::Input => "input",
			Self::Change => "change",
			Self::Submit => "submit",
		}
	}
}

/// Handler attached to a view element.
pub type EventHandler = Rc<dyn Fn(Event) + 'static>;

/// Errors from DOM access.
#[derive(Debug, Clone, Error)]
pub enum DomError {
	/// A required browser global was missing.
	#[error("{0} not available")]
	Unavailable(&'static str),
	/// A DOM call failed.
	#[error("DOM operation failed: {0}")]
	Js(String),
}

#[cfg(target_arch = "wasm32")]
mod imp {
	use super::{DomError, EventHandler, EventType};
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::Closure;

	/// The browser document.
	pub struct Document {
		inner: web_sys::Document,
	}

	/// A DOM element handle.
	pub struct Element {
		inner: web_sys::Element,
	}

	/// Returns the current document.
	pub fn document() -> Result<Document, DomError> {
		let window = web_sys::window().ok_or(DomError::Unavailable("window"))?;
		let inner = window.document().ok_or(DomError::Unavailable("document"))?;
		Ok(Document { inner })
	}

	impl Document {
		/// Creates a detached element.
		pub fn create_element(&self, tag: &str) -> Result<Element, DomError> {
			let inner = self
				.inner
				.create_element(tag)
				.map_err(|e| DomError::Js(format!("{e:?}")))?;
			Ok(Element { inner })
		}

		/// Looks up an element by id.
		pub fn element_by_id(&self, id: &str) -> Option<Element> {
			self.inner.get_element_by_id(id).map(|inner| Element { inner })
		}

		/// The document body.
		pub fn body(&self) -> Option<Element> {
			self.inner.body().map(|body| Element { inner: body.into() })
		}
	}

	impl Element {
		/// Sets an attribute.
		pub fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
			self.inner
				.set_attribute(name, value)
				.map_err(|e| DomError::Js(format!("{e:?}")))
		}

		/// Appends a child element.
		pub fn append_child(&self, child: &Element) -> Result<(), DomError> {
			self.inner
				.append_child(&child.inner)
				.map(|_| ())
				.map_err(|e| DomError::Js(format!("{e:?}")))
		}

		/// Appends a text node.
		pub fn append_text(&self, text: &str) -> Result<(), DomError> {
			let document = self
				.inner
				.owner_document()
				.ok_or(DomError::Unavailable("owner document"))?;
			let node = document.create_text_node(text);
			self.inner
				.append_child(&node)
				.map(|_| ())
				.map_err(|e| DomError::Js(format!("{e:?}")))
		}

		/// Removes all children.
		pub fn clear(&self) {
			self.inner.set_inner_html("");
		}

		/// Attaches an event listener. The returned handle owns the closure;
		/// dropping it after the element leaves the DOM frees the listener.
		pub fn listen(&self, event_type: EventType, handler: EventHandler) -> ListenerHandle {
			let closure = Closure::<dyn Fn(web_sys::Event)>::wrap(Box::new(move |event| {
				handler(event);
			}));
			let _ = self
				.inner
				.add_event_listener_with_callback(event_type.name(), closure.as_ref().unchecked_ref());
			ListenerHandle { _closure: closure }
		}

		/// The underlying `web_sys` element.
		pub fn inner(&self) -> &web_sys::Element {
			&self.inner
		}
	}

	/// Keeps an event listener's closure alive.
	pub struct ListenerHandle {
		_closure: Closure<dyn Fn(web_sys::Event)>,
	}

	/// Marker of the focused element plus its cursor, captured before a
	/// remount so typing into a controlled input survives the re-render.
	pub struct FocusSnapshot {
		selector: String,
		selection: Option<(u32, u32)>,
	}

	/// Snapshots the focused element, keyed by id or name attribute.
	pub fn capture_focus() -> Option<FocusSnapshot> {
		let document = web_sys::window()?.document()?;
		let active = document.active_element()?;
		let selector = if active.id().is_empty() {
			let name = active.get_attribute("name")?;
			format!("[name='{name}']")
		} else {
			format!("#{}", active.id())
		};
		let selection = selection_of(&active);
		Some(FocusSnapshot { selector, selection })
	}

	/// Restores focus and cursor to the rebuilt counterpart, if it exists.
	pub fn restore_focus(snapshot: &FocusSnapshot) {
		let Some(element) = web_sys::window()
			.and_then(|window| window.document())
			.and_then(|document| document.query_selector(&snapshot.selector).ok().flatten())
		else {
			return;
		};
		if let Some(target) = element.dyn_ref::<web_sys::HtmlElement>() {
			let _ = target.focus();
		}
		if let Some((start, end)) = snapshot.selection {
			if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
				let _ = input.set_selection_range(start, end);
			} else if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
				let _ = area.set_selection_range(start, end);
			}
		}
	}

	fn selection_of(element: &web_sys::Element) -> Option<(u32, u32)> {
		if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
			// Selection is absent on inputs like date pickers.
			let start = input.selection_start().ok().flatten()?;
			let end = input.selection_end().ok().flatten()?;
			return Some((start, end));
		}
		if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
			let start = area.selection_start().ok().flatten()?;
			let end = area.selection_end().ok().flatten()?;
			return Some((start, end));
		}
		None
	}

	/// Reads the value out of the event target (input, select or textarea).
	pub fn event_target_value(event: &web_sys::Event) -> String {
		let Some(target) = event.target() else {
			return String::new();
		};
		if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
			return input.value();
		}
		if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
			return select.value();
		}
		if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
			return area.value();
		}
		String::new()
	}

	/// Shows a blocking notice dialog.
	pub fn alert(message: &str) {
		if let Some(window) = web_sys::window() {
			let _ = window.alert_with_message(message);
		}
	}

	/// Asks the user to confirm; a missing window counts as declined.
	pub fn confirm(message: &str) -> bool {
		web_sys::window()
			.and_then(|window| window.confirm_with_message(message).ok())
			.unwrap_or(false)
	}
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
	use super::{DomError, EventHandler, EventType};
	use std::cell::Cell;

	thread_local! {
		static CONFIRM_ANSWER: Cell<bool> = const { Cell::new(false) };
	}

	/// Native stand-in for the browser document.
	pub struct Document;

	/// Native stand-in for a DOM element.
	pub struct Element;

	/// No document outside the browser.
	pub fn document() -> Result<Document, DomError> {
		Err(DomError::Unavailable("document"))
	}

	impl Document {
		/// Stub.
		pub fn create_element(&self, _tag: &str) -> Result<Element, DomError> {
			Ok(Element)
		}

		/// Stub.
		pub fn element_by_id(&self, _id: &str) -> Option<Element> {
			None
		}

		/// Stub.
		pub fn body(&self) -> Option<Element> {
			None
		}
	}

	impl Element {
		/// Stub.
		pub fn set_attribute(&self, _name: &str, _value: &str) -> Result<(), DomError> {
			Ok(())
		}

		/// Stub.
		pub fn append_child(&self, _child: &Element) -> Result<(), DomError> {
			Ok(())
		}

		/// Stub.
		pub fn append_text(&self, _text: &str) -> Result<(), DomError> {
			Ok(())
		}

		/// Stub.
		pub fn clear(&self) {}

		/// Stub.
		pub fn listen(&self, _event_type: EventType, _handler: EventHandler) -> ListenerHandle {
			ListenerHandle
		}
	}

	/// Stub listener handle.
	pub struct ListenerHandle;

	/// Stub focus marker.
	pub struct FocusSnapshot;

	/// Nothing is focused off-browser.
	pub fn capture_focus() -> Option<FocusSnapshot> {
		None
	}

	/// Stub.
	pub fn restore_focus(_snapshot: &FocusSnapshot) {}

	/// There is no event target off-browser.
	pub fn event_target_value(_event: &crate::platform::Event) -> String {
		String::new()
	}

	/// Notices are silent off-browser.
	pub fn alert(_message: &str) {}

	/// Answers with the scripted response; declines by default, so a confirm
	/// that cannot be shown does not allow the destructive action through.
	pub fn confirm(_message: &str) -> bool {
		CONFIRM_ANSWER.with(Cell::get)
	}

	/// Scripts the answer later confirms on this thread return (test hook).
	pub fn set_confirm_answer(answer: bool) {
		CONFIRM_ANSWER.with(|cell| cell.set(answer));
	}
}

pub use imp::{
	Document, Element, FocusSnapshot, ListenerHandle, alert, capture_focus, confirm, document,
	event_target_value, restore_focus,
};
#[cfg(not(target_arch = "wasm32"))]
pub use imp::set_confirm_answer;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(EventType::Click, "click")]
	#[case(EventType::Input, "input")]
	#[case(EventType::Change, "change")]
	#[case(EventType::Submit, "submit")]
	fn event_names(#[case] event_type: EventType, #[case] expected: &str) {
		assert_eq!(event_type.name(), expected);
	}

	#[test]
	fn native_confirm_declines_by_default() {
		assert!(!confirm("Apakah Anda yakin?"));
	}

	#[test]
	fn native_confirm_answer_is_scriptable() {
		set_confirm_answer(true);
		assert!(confirm("Apakah Anda yakin?"));
		set_confirm_answer(false);
		assert!(!confirm("Apakah Anda yakin?"));
	}

	#[test]
	fn native_document_is_unavailable() {
		assert!(document().is_err());
	}

	#[test]
	fn nothing_is_focused_off_browser() {
		assert!(capture_focus().is_none());
	}
}
