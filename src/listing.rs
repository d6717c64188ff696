//! Shared state and builders for the list pages.
//!
//! Every page follows the same lifecycle: mount with an empty list and the
//! loading flag raised, fetch the full collection, then settle. Failures
//! settle too (loading clears, the list stays empty) so the view falls back
//! to its empty-state row instead of spinning forever.
//!
//! The builders produce the markup all four tables share; per-page quirks
//! (accent cells, action buttons) compose on top.

use crate::api::ApiError;
use crate::dom::{EventType, event_target_value};
use crate::error_log;
use crate::reactive::Signal;
use crate::view::{ElementView, IntoView, View};

/// Reactive state of one fetched collection.
#[derive(Clone)]
pub struct ListState<T: Clone + 'static> {
	items: Signal<Vec<T>>,
	loading: Signal<bool>,
}

impl<T: Clone + 'static> Default for ListState<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone + 'static> ListState<T> {
	/// Empty list, loading raised.
	pub fn new() -> Self {
		Self {
			items: Signal::new(Vec::new()),
			loading: Signal::new(true),
		}
	}

	/// The current items (tracked).
	pub fn items(&self) -> Vec<T> {
		self.items.get()
	}

	/// Whether the first fetch is still in flight (tracked). Refetches after
	/// a create or delete do not raise this again.
	pub fn is_loading(&self) -> bool {
		self.loading.get()
	}

	/// Applies a fetch result: the list is replaced wholesale on success and
	/// left as-is on failure, and loading clears either way. `what` names the
	/// collection in the failure log.
	pub fn settle(&self, result: Result<Vec<T>, ApiError>, what: &str) {
		match result {
			Ok(items) => self.items.set(items),
			Err(err) => error_log!("Gagal memuat data {what}: {err}"),
		}
		self.loading.set(false);
	}
}

/// The full-page notice shown while a page's initial fetch is in flight.
pub fn loading_notice(message: &'static str) -> View {
	ElementView::new("div")
		.attr("class", "text-center text-gray-500 p-10")
		.child(message)
		.into_view()
}

/// The white card holding a page's filter inputs.
pub fn filter_bar(children: Vec<View>) -> View {
	ElementView::new("div")
		.attr(
			"class",
			"bg-white shadow-md rounded-2xl p-4 mb-6 flex flex-col md:flex-row gap-4 items-center justify-between",
		)
		.children(children)
		.into_view()
}

/// A controlled text search input bound to `value`. The id keys focus
/// restoration across the remount each keystroke triggers.
pub fn search_input(id: &'static str, placeholder: &'static str, value: Signal<String>) -> View {
	ElementView::new("input")
		.attr("type", "text")
		.attr("id", id)
		.attr("placeholder", placeholder)
		.attr("value", value.get())
		.attr("class", "border p-2 rounded w-full md:w-1/2")
		.on(EventType::Input, move |event| {
			value.set(event_target_value(&event));
		})
		.into_view()
}

/// A labelled date filter bound to `value`.
pub fn date_filter(id: &'static str, label: &'static str, value: Signal<String>) -> View {
	ElementView::new("div")
		.attr("class", "flex items-center gap-2")
		.child(
			ElementView::new("label")
				.attr("class", "text-gray-600")
				.child(label),
		)
		.child(
			ElementView::new("input")
				.attr("type", "date")
				.attr("id", id)
				.attr("value", value.get())
				.attr("class", "border p-2 rounded")
				.on(EventType::Change, move |event| {
					value.set(event_target_value(&event));
				}),
		)
		.into_view()
}

/// A header cell.
pub fn header_cell(text: &'static str) -> View {
	ElementView::new("th")
		.attr("class", "p-3 border")
		.child(text)
		.into_view()
}

/// A plain body cell.
pub fn cell(text: impl Into<String>) -> View {
	ElementView::new("td")
		.attr("class", "p-3 border")
		.child(text.into())
		.into_view()
}

/// A body cell for money totals, bold and green.
pub fn accent_cell(text: impl Into<String>) -> View {
	ElementView::new("td")
		.attr("class", "p-3 border font-semibold text-green-600")
		.child(text.into())
		.into_view()
}

/// A body row with the standard hover styling.
pub fn table_row(cells: Vec<View>) -> View {
	ElementView::new("tr")
		.attr("class", "hover:bg-gray-100")
		.children(cells)
		.into_view()
}

/// Builds the standard data table card: a header row from `header_cells`,
/// one row per entry in `rows`, or a single full-width muted row with
/// `empty_message` when `rows` is empty.
pub fn data_table(header_cells: Vec<View>, rows: Vec<View>, empty_message: &'static str) -> View {
	let columns = header_cells.len();
	let body = if rows.is_empty() {
		vec![empty_row(columns, empty_message)]
	} else {
		rows
	};
	ElementView::new("div")
		.attr("class", "overflow-x-auto bg-white shadow-md rounded-2xl")
		.child(
			ElementView::new("table")
				.attr("class", "w-full border-collapse text-sm text-left")
				.child(
					ElementView::new("thead")
						.attr("class", "bg-gray-200 text-gray-700")
						.child(ElementView::new("tr").children(header_cells)),
				)
				.child(ElementView::new("tbody").children(body)),
		)
		.into_view()
}

fn empty_row(columns: usize, message: &'static str) -> View {
	ElementView::new("tr")
		.child(
			ElementView::new("td")
				.attr("colspan", columns.to_string())
				.attr("class", "text-center p-4 text-gray-500")
				.child(message),
		)
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn new_state_is_loading_and_empty() {
		let state: ListState<String> = ListState::new();
		assert!(state.is_loading());
		assert!(state.items().is_empty());
	}

	#[test]
	#[serial]
	fn settle_ok_replaces_items_and_clears_loading() {
		let state: ListState<String> = ListState::new();
		state.settle(Ok(vec!["Kursi".to_string()]), "barang");
		assert!(!state.is_loading());
		assert_eq!(state.items(), vec!["Kursi".to_string()]);
	}

	#[test]
	#[serial]
	fn settle_err_clears_loading_but_keeps_items() {
		let state: ListState<String> = ListState::new();
		state.settle(Ok(vec!["Kursi".to_string()]), "barang");
		state.settle(Err(ApiError::Network("down".to_string())), "barang");
		assert!(!state.is_loading());
		assert_eq!(state.items(), vec!["Kursi".to_string()]);
	}

	#[test]
	#[serial]
	fn table_with_rows_has_no_empty_row() {
		let html = data_table(
			vec![header_cell("Nama"), header_cell("Harga")],
			vec![table_row(vec![cell("Kursi"), accent_cell("Rp 30.000")])],
			"Belum ada data barang.",
		)
		.render_to_string();
		assert!(html.contains("<td class=\"p-3 border\">Kursi</td>"));
		assert!(html.contains("font-semibold text-green-600"));
		assert!(!html.contains("Belum ada data barang."));
	}

	#[test]
	#[serial]
	fn empty_table_shows_message_spanning_all_columns() {
		let html = data_table(
			vec![header_cell("A"), header_cell("B"), header_cell("C")],
			Vec::new(),
			"Belum ada data.",
		)
		.render_to_string();
		assert!(html.contains("colspan=\"3\""));
		assert!(html.contains("Belum ada data."));
	}

	#[test]
	#[serial]
	fn search_input_reflects_signal_value() {
		let term = Signal::new("kursi".to_string());
		let html = search_input("product-search", "Cari...", term).render_to_string();
		assert!(html.contains("value=\"kursi\""));
		assert!(html.contains("placeholder=\"Cari...\""));
	}

	#[test]
	#[serial]
	fn filter_inputs_carry_ids_for_focus_restoration() {
		let html = search_input("product-search", "Cari...", Signal::new(String::new()))
			.render_to_string();
		assert!(html.contains("id=\"product-search\""));

		let html = date_filter("summary-date-filter", "Filter:", Signal::new(String::new()))
			.render_to_string();
		assert!(html.contains("id=\"summary-date-filter\""));
	}
}
