//! Customer list with name/join-date filters and an inline creation form.

use crate::api::ApiClient;
use crate::component::Component;
use crate::dom;
use crate::error_log;
use crate::filters::{matches_date_prefix, matches_term};
use crate::format::short_date;
use crate::listing::{
	ListState, cell, data_table, date_filter, filter_bar, header_cell, loading_notice, search_input,
	table_row,
};
use crate::models::{Customer, NewCustomer};
use crate::pages::form::{add_button, form_buttons, form_card, page_header, text_field, textarea_field};
use crate::reactive::Signal;
use crate::spawn::spawn_local;
use crate::view::{ElementView, IntoView, View};
use std::rc::Rc;

/// The creation form's field signals.
#[derive(Clone)]
struct CustomerForm {
	name: Signal<String>,
	address: Signal<String>,
	postal_code: Signal<String>,
	phone: Signal<String>,
	email: Signal<String>,
	joined_date: Signal<String>,
}

impl CustomerForm {
	fn new() -> Self {
		Self {
			name: Signal::new(String::new()),
			address: Signal::new(String::new()),
			postal_code: Signal::new(String::new()),
			phone: Signal::new(String::new()),
			email: Signal::new(String::new()),
			joined_date: Signal::new(String::new()),
		}
	}

	fn payload(&self) -> NewCustomer {
		NewCustomer {
			name: self.name.get_untracked(),
			address: self.address.get_untracked(),
			postal_code: self.postal_code.get_untracked(),
			phone: self.phone.get_untracked(),
			email: self.email.get_untracked(),
			joined_date: self.joined_date.get_untracked(),
		}
	}

	fn reset(&self) {
		self.name.set(String::new());
		self.address.set(String::new());
		self.postal_code.set(String::new());
		self.phone.set(String::new());
		self.email.set(String::new());
		self.joined_date.set(String::new());
	}
}

/// `/customers`.
pub struct CustomersPage {
	api: ApiClient,
	state: ListState<Customer>,
	show_form: Signal<bool>,
	search_name: Signal<String>,
	filter_date: Signal<String>,
	form: CustomerForm,
}

impl Default for CustomersPage {
	fn default() -> Self {
		Self::new()
	}
}

impl CustomersPage {
	/// New page against the default API origin.
	pub fn new() -> Self {
		Self::with_client(ApiClient::default())
	}

	/// New page against a specific client.
	pub fn with_client(api: ApiClient) -> Self {
		Self {
			api,
			state: ListState::new(),
			show_form: Signal::new(false),
			search_name: Signal::new(String::new()),
			filter_date: Signal::new(String::new()),
			form: CustomerForm::new(),
		}
	}

	fn fetch(api: ApiClient, state: ListState<Customer>) {
		spawn_local(async move {
			let result = api.list("customers").await;
			state.settle(result, "pelanggan");
		});
	}

	fn creation_form(&self) -> View {
		let api = self.api.clone();
		let state = self.state.clone();
		let show_form = self.show_form.clone();
		let form = self.form.clone();
		form_card(
			"Tambah Customer Baru",
			move |event| {
				event.prevent_default();
				let api = api.clone();
				let state = state.clone();
				let show_form = show_form.clone();
				let form = form.clone();
				let payload = form.payload();
				spawn_local(async move {
					match api.create::<Customer, _>("customers", &payload).await {
						Ok(_) => {
							dom::alert("Customer berhasil ditambahkan!");
							show_form.set(false);
							form.reset();
							Self::fetch(api, state);
						}
						Err(err) => {
							dom::alert("Gagal menambahkan customer.");
							error_log!("{err}");
						}
					}
				});
			},
			vec![
				text_field("text", "nama_customer", "Nama Customer", self.form.name.clone()),
				text_field("text", "kodepos", "Kode Pos", self.form.postal_code.clone()),
				text_field("text", "no_handphone", "No Handphone", self.form.phone.clone()),
				text_field("email", "email", "Email", self.form.email.clone()),
				textarea_field("alamat", "Alamat", self.form.address.clone()),
				text_field("date", "tanggal_bergabung", "", self.form.joined_date.clone()),
				form_buttons(self.show_form.clone()),
			],
		)
	}

	fn table(&self) -> View {
		let term = self.search_name.get();
		let date = self.filter_date.get();
		let rows = self
			.state
			.items()
			.into_iter()
			.filter(|customer| {
				matches_term(&customer.name, &term)
					&& matches_date_prefix(&customer.joined_date, &date)
			})
			.map(|customer| {
				table_row(vec![
					cell(customer.name),
					cell(customer.address),
					cell(customer.postal_code),
					cell(customer.phone),
					cell(customer.email),
					cell(short_date(&customer.joined_date)),
				])
			})
			.collect();
		data_table(
			vec![
				header_cell("Nama Customer"),
				header_cell("Alamat"),
				header_cell("Kodepos"),
				header_cell("No Handphone"),
				header_cell("Email"),
				header_cell("Tanggal Bergabung"),
			],
			rows,
			"Tidak ada data pelanggan yang sesuai.",
		)
	}
}

impl Component for CustomersPage {
	fn render(&self) -> View {
		if self.state.is_loading() {
			return loading_notice("Memuat data pelanggan...");
		}
		ElementView::new("div")
			.attr("class", "min-h-screen bg-gray-100 p-10")
			.child(page_header(
				"Daftar Pelanggan",
				Some(add_button("+ Tambah Customer", self.show_form.clone())),
			))
			.child(filter_bar(vec![
				search_input(
					"customer-search",
					"Cari berdasarkan nama customer...",
					self.search_name.clone(),
				),
				date_filter(
					"customer-date-filter",
					"Filter tanggal bergabung:",
					self.filter_date.clone(),
				),
			]))
			.child(self.show_form.get().then(|| self.creation_form()))
			.child(self.table())
			.into_view()
	}

	fn on_mount(self: Rc<Self>) {
		Self::fetch(self.api.clone(), self.state.clone());
	}

	fn name(&self) -> &'static str {
		"CustomersPage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	fn customer(name: &str, joined: &str) -> Customer {
		Customer {
			id: 1,
			name: name.to_string(),
			address: "Jl. Melati 1".to_string(),
			postal_code: "40115".to_string(),
			phone: "08123456789".to_string(),
			email: "x@example.com".to_string(),
			joined_date: joined.to_string(),
		}
	}

	fn settled(customers: Vec<Customer>) -> CustomersPage {
		let page = CustomersPage::new();
		page.state.settle(Ok(customers), "pelanggan");
		page
	}

	#[test]
	#[serial]
	fn loading_notice_until_first_settle() {
		let page = CustomersPage::new();
		assert!(page.render().render_to_string().contains("Memuat data pelanggan..."));
	}

	#[test]
	#[serial]
	fn empty_fetch_renders_the_no_data_row() {
		let page = settled(Vec::new());
		let html = page.render().render_to_string();
		assert!(html.contains("Tidak ada data pelanggan yang sesuai."));
		assert!(html.contains("colspan=\"6\""));
	}

	#[test]
	#[serial]
	fn name_and_date_filters_combine_with_and() {
		let page = settled(vec![
			customer("Budi", "2024-01-15"),
			customer("Budiman", "2025-03-02"),
			customer("Sari", "2024-01-20"),
		]);
		page.search_name.set("budi".to_string());
		page.filter_date.set("2024-01".to_string());
		let html = page.render().render_to_string();
		assert!(html.contains("Budi"));
		assert!(!html.contains("Budiman"));
		assert!(!html.contains("Sari"));
	}

	#[test]
	#[serial]
	fn join_date_renders_in_id_locale() {
		let page = settled(vec![customer("Budi", "2024-02-29")]);
		assert!(page.render().render_to_string().contains("29/2/2024"));
	}

	#[test]
	#[serial]
	fn form_is_hidden_by_default_and_toggles() {
		let page = settled(Vec::new());
		assert!(!page.render().render_to_string().contains("Tambah Customer Baru"));
		page.show_form.set(true);
		assert!(page.render().render_to_string().contains("Tambah Customer Baru"));
	}

	#[test]
	#[serial]
	fn form_reset_clears_every_field() {
		let page = CustomersPage::new();
		page.form.name.set("Budi".to_string());
		page.form.email.set("budi@example.com".to_string());
		page.form.reset();
		assert_eq!(page.form.payload(), NewCustomer::default());
	}

	fn customer_body(name: &str) -> serde_json::Value {
		serde_json::json!({
			"id": 1,
			"nama_customer": name,
			"alamat": "Jl. Melati 1",
			"kodepos": "40115",
			"no_handphone": "08123456789",
			"email": "budi@example.com",
			"tanggal_bergabung": "2024-01-15"
		})
	}

	#[test]
	#[serial]
	fn submit_posts_once_refetches_once_and_resets_the_form() {
		use crate::dom::EventType;

		let client = ApiClient::default();
		let page = CustomersPage::with_client(client.clone());
		page.state.settle(Ok(Vec::new()), "pelanggan");
		page.show_form.set(true);
		page.form.name.set("Budi".to_string());
		page.form.joined_date.set("2024-01-15".to_string());

		// Created record, then the refreshed list.
		client.enqueue_response(customer_body("Budi"));
		client.enqueue_response(serde_json::json!([customer_body("Budi")]));

		let view = page.render();
		view.find_element("form").expect("form").fire(EventType::Submit);

		assert_eq!(
			client.calls(),
			vec!["POST /customers".to_string(), "GET /customers".to_string()]
		);
		assert!(!page.show_form.get_untracked());
		assert_eq!(page.form.payload(), NewCustomer::default());
		assert_eq!(page.state.items().len(), 1);
	}

	#[test]
	#[serial]
	fn failed_submit_keeps_the_form_open_with_typed_values() {
		use crate::dom::EventType;

		// Nothing scripted: the create fails like a dead network.
		let client = ApiClient::default();
		let page = CustomersPage::with_client(client.clone());
		page.state.settle(Ok(Vec::new()), "pelanggan");
		page.show_form.set(true);
		page.form.name.set("Budi".to_string());

		let view = page.render();
		view.find_element("form").expect("form").fire(EventType::Submit);

		assert_eq!(client.calls(), vec!["POST /customers".to_string()]);
		assert!(page.show_form.get_untracked());
		assert_eq!(page.form.name.get_untracked(), "Budi");
	}

	#[test]
	#[serial]
	fn form_fields_carry_wire_names_for_focus_restoration() {
		let page = settled(Vec::new());
		page.show_form.set(true);
		let html = page.render().render_to_string();
		for name in [
			"nama_customer",
			"kodepos",
			"no_handphone",
			"email",
			"alamat",
			"tanggal_bergabung",
		] {
			assert!(html.contains(&format!("name=\"{name}\"")));
		}
	}
}
