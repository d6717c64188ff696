//! Order summary list: term/date filters and the only delete action in the
//! app.

use crate::api::ApiClient;
use crate::component::Component;
use crate::dom::{self, EventType};
use crate::error_log;
use crate::filters::{matches_date_prefix, matches_term};
use crate::format::{rupiah, short_date};
use crate::listing::{
	ListState, accent_cell, cell, data_table, date_filter, filter_bar, header_cell,
	loading_notice, search_input, table_row,
};
use crate::models::OrderSummary;
use crate::reactive::Signal;
use crate::spawn::spawn_local;
use crate::view::{ElementView, IntoView, View};
use std::rc::Rc;

/// `/summary`.
pub struct SummaryPage {
	api: ApiClient,
	state: ListState<OrderSummary>,
	search_term: Signal<String>,
	filter_date: Signal<String>,
}

impl Default for SummaryPage {
	fn default() -> Self {
		Self::new()
	}
}

impl SummaryPage {
	/// New page against the default API origin.
	pub fn new() -> Self {
		Self::with_client(ApiClient::default())
	}

	/// New page against a specific client.
	pub fn with_client(api: ApiClient) -> Self {
		Self {
			api,
			state: ListState::new(),
			search_term: Signal::new(String::new()),
			filter_date: Signal::new(String::new()),
		}
	}

	fn fetch(api: ApiClient, state: ListState<OrderSummary>) {
		spawn_local(async move {
			let result = api.list("summary").await;
			state.settle(result, "summary");
		});
	}

	fn delete_button(&self, id: u32) -> View {
		let api = self.api.clone();
		let state = self.state.clone();
		ElementView::new("button")
			.attr(
				"class",
				"bg-red-600 hover:bg-red-700 text-white px-3 py-1 rounded-md",
			)
			.on(EventType::Click, move |_| {
				// Declining the confirm issues no network call.
				if !dom::confirm("Apakah Anda yakin ingin menghapus data ini?") {
					return;
				}
				let api = api.clone();
				let state = state.clone();
				spawn_local(async move {
					match api.delete("summary", id).await {
						Ok(()) => {
							dom::alert("Data berhasil dihapus!");
							Self::fetch(api, state);
						}
						Err(err) => {
							dom::alert("Gagal menghapus data.");
							error_log!("{err}");
						}
					}
				});
			})
			.child("Hapus")
			.into_view()
	}

	fn table(&self) -> View {
		let term = self.search_term.get();
		let date = self.filter_date.get();
		let rows = self
			.state
			.items()
			.into_iter()
			.filter(|summary| {
				(matches_term(&summary.order_no, &term)
					|| matches_term(&summary.customer_name, &term))
					&& matches_date_prefix(&summary.transaction_date, &date)
			})
			.map(|summary| {
				let action = ElementView::new("td")
					.attr("class", "p-3 border text-center")
					.child(self.delete_button(summary.id))
					.into_view();
				table_row(vec![
					cell(summary.order_no),
					cell(short_date(&summary.transaction_date)),
					cell(summary.customer_name),
					accent_cell(rupiah(summary.total)),
					action,
				])
			})
			.collect();
		let action_header = ElementView::new("th")
			.attr("class", "p-3 border text-center")
			.child("Aksi")
			.into_view();
		data_table(
			vec![
				header_cell("No Order"),
				header_cell("Tanggal Transaksi"),
				header_cell("Nama Customer"),
				header_cell("Total Harga"),
				action_header,
			],
			rows,
			"Tidak ada data order summary yang sesuai.",
		)
	}
}

impl Component for SummaryPage {
	fn render(&self) -> View {
		if self.state.is_loading() {
			return loading_notice("Memuat data order summary...");
		}
		ElementView::new("div")
			.attr("class", "min-h-screen bg-gray-100 p-10")
			.child(
				ElementView::new("h1")
					.attr("class", "text-3xl font-bold mb-6 text-gray-800")
					.child("Daftar Order Summary"),
			)
			.child(filter_bar(vec![
				search_input(
					"summary-search",
					"Cari berdasarkan No Order atau Nama Customer...",
					self.search_term.clone(),
				),
				date_filter(
					"summary-date-filter",
					"Filter Tanggal Transaksi:",
					self.filter_date.clone(),
				),
			]))
			.child(self.table())
			.into_view()
	}

	fn on_mount(self: Rc<Self>) {
		Self::fetch(self.api.clone(), self.state.clone());
	}

	fn name(&self) -> &'static str {
		"SummaryPage"
	}
}
