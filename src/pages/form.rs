//! Markup helpers shared by the inline creation forms.

use crate::dom::{EventType, event_target_value};
use crate::platform::Event;
use crate::reactive::Signal;
use crate::view::{ElementView, IntoView, View};

/// The page header row: title on the left, an optional action button on the
/// right.
pub fn page_header(title: &'static str, action: Option<View>) -> View {
	ElementView::new("div")
		.attr("class", "flex justify-between items-center mb-6")
		.child(
			ElementView::new("h1")
				.attr("class", "text-3xl font-bold text-gray-800")
				.child(title),
		)
		.child(action)
		.into_view()
}

/// The blue "add" button that reveals a creation form.
pub fn add_button(label: &'static str, show_form: Signal<bool>) -> View {
	ElementView::new("button")
		.attr(
			"class",
			"bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg shadow-md transition",
		)
		.on(EventType::Click, move |_| show_form.set(true))
		.child(label)
		.into_view()
}

/// The white card wrapping a creation form.
pub fn form_card(title: &'static str, on_submit: impl Fn(Event) + 'static, fields: Vec<View>) -> View {
	ElementView::new("div")
		.attr("class", "bg-white shadow-md rounded-2xl p-6 mb-6")
		.child(
			ElementView::new("h2")
				.attr("class", "text-xl font-semibold mb-4 text-gray-800")
				.child(title),
		)
		.child(
			ElementView::new("form")
				.attr("class", "grid grid-cols-1 md:grid-cols-2 gap-4")
				.on(EventType::Submit, on_submit)
				.children(fields),
		)
		.into_view()
}

/// A required form input bound to `value`. The name attribute carries the
/// wire field name and keys focus restoration across remounts.
pub fn text_field(
	input_type: &'static str,
	name: &'static str,
	placeholder: &'static str,
	value: Signal<String>,
) -> View {
	let mut input = ElementView::new("input")
		.attr("type", input_type)
		.attr("name", name)
		.attr("value", value.get())
		.attr("class", "border p-2 rounded")
		.attr("required", "");
	if !placeholder.is_empty() {
		input = input.attr("placeholder", placeholder);
	}
	input
		.on(EventType::Input, move |event| {
			value.set(event_target_value(&event));
		})
		.into_view()
}

/// A required textarea spanning both form columns.
pub fn textarea_field(name: &'static str, placeholder: &'static str, value: Signal<String>) -> View {
	ElementView::new("textarea")
		.attr("name", name)
		.attr("placeholder", placeholder)
		.attr("class", "border p-2 rounded md:col-span-2")
		.attr("required", "")
		.child(value.get())
		.on(EventType::Input, move |event| {
			value.set(event_target_value(&event));
		})
		.into_view()
}

/// The Simpan/Batal button pair. Batal hides the form without clearing it.
pub fn form_buttons(show_form: Signal<bool>) -> View {
	ElementView::new("div")
		.attr("class", "flex gap-3 md:col-span-2")
		.child(
			ElementView::new("button")
				.attr("type", "submit")
				.attr(
					"class",
					"bg-green-600 hover:bg-green-700 text-white px-4 py-2 rounded-lg",
				)
				.child("Simpan"),
		)
		.child(
			ElementView::new("button")
				.attr("type", "button")
				.attr(
					"class",
					"bg-gray-400 hover:bg-gray-500 text-white px-4 py-2 rounded-lg",
				)
				.on(EventType::Click, move |_| show_form.set(false))
				.child("Batal"),
		)
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn add_button_reveals_the_form() {
		let show_form = Signal::new(false);
		let html = add_button("+ Tambah Produk", show_form.clone()).render_to_string();
		assert!(html.contains("+ Tambah Produk"));
		assert!(!show_form.get_untracked());
	}

	#[test]
	#[serial]
	fn text_field_is_required_and_controlled() {
		let value = Signal::new("Kursi".to_string());
		let html = text_field("text", "nama_barang", "Nama Produk", value).render_to_string();
		assert!(html.contains("required"));
		assert!(html.contains("name=\"nama_barang\""));
		assert!(html.contains("value=\"Kursi\""));
		assert!(html.contains("placeholder=\"Nama Produk\""));
	}

	#[test]
	#[serial]
	fn date_field_has_no_placeholder() {
		let value = Signal::new(String::new());
		let html = text_field("date", "tanggal_bergabung", "", value).render_to_string();
		assert!(!html.contains("placeholder"));
	}

	#[test]
	#[serial]
	fn form_buttons_render_both_actions() {
		let html = form_buttons(Signal::new(true)).render_to_string();
		assert!(html.contains("Simpan"));
		assert!(html.contains("Batal"));
	}
}
