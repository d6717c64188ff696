//! Order line list plus a creation form fed by the product and customer
//! collections.
//!
//! The page fires three independent fetches on mount. Only the orders fetch
//! drives the loading notice; the select feeds fail silently into empty
//! dropdowns.

use crate::api::ApiClient;
use crate::component::Component;
use crate::dom::{self, EventType, event_target_value};
use crate::error_log;
use crate::format::rupiah;
use crate::listing::{
	ListState, accent_cell, cell, data_table, header_cell, loading_notice, table_row,
};
use crate::models::{Customer, NewOrder, OrderLine, Product};
use crate::pages::form::{add_button, form_buttons, form_card, page_header};
use crate::reactive::Signal;
use crate::spawn::spawn_local;
use crate::view::{ElementView, IntoView, View};
use std::rc::Rc;

#[derive(Clone)]
struct OrderForm {
	product_id: Signal<String>,
	quantity: Signal<String>,
	customer_id: Signal<String>,
}

impl OrderForm {
	fn new() -> Self {
		Self {
			product_id: Signal::new(String::new()),
			quantity: Signal::new(String::new()),
			customer_id: Signal::new(String::new()),
		}
	}

	fn payload(&self) -> NewOrder {
		NewOrder {
			product_id: self.product_id.get_untracked(),
			quantity: self.quantity.get_untracked(),
			customer_id: self.customer_id.get_untracked(),
		}
	}

	fn reset(&self) {
		self.product_id.set(String::new());
		self.quantity.set(String::new());
		self.customer_id.set(String::new());
	}
}

/// `/orders`.
pub struct OrdersPage {
	api: ApiClient,
	state: ListState<OrderLine>,
	products: Signal<Vec<Product>>,
	customers: Signal<Vec<Customer>>,
	show_form: Signal<bool>,
	form: OrderForm,
}

impl Default for OrdersPage {
	fn default() -> Self {
		Self::new()
	}
}

impl OrdersPage {
	/// New page against the default API origin.
	pub fn new() -> Self {
		Self::with_client(ApiClient::default())
	}

	/// New page against a specific client.
	pub fn with_client(api: ApiClient) -> Self {
		Self {
			api,
			state: ListState::new(),
			products: Signal::new(Vec::new()),
			customers: Signal::new(Vec::new()),
			show_form: Signal::new(false),
			form: OrderForm::new(),
		}
	}

	fn fetch_orders(api: ApiClient, state: ListState<OrderLine>) {
		spawn_local(async move {
			let result = api.list("orders").await;
			state.settle(result, "order detail");
		});
	}

	fn labelled_select(
		name: &'static str,
		label: &'static str,
		placeholder: &'static str,
		options: Vec<(String, String)>,
		value: Signal<String>,
	) -> View {
		let current = value.get_untracked();
		let on_change = {
			let value = value.clone();
			move |event| value.set(event_target_value(&event))
		};
		ElementView::new("div")
			.child(
				ElementView::new("label")
					.attr("class", "block text-sm font-medium mb-1 text-gray-700")
					.child(label),
			)
			.child(
				ElementView::new("select")
					.attr("name", name)
					.attr("class", "border p-2 rounded w-full")
					.attr("required", "")
					.on(EventType::Change, on_change)
					.child(ElementView::new("option").attr("value", "").child(placeholder))
					.children(options.into_iter().map(|(option_value, option_label)| {
						let mut option =
							ElementView::new("option").attr("value", option_value.clone());
						if option_value == current {
							option = option.attr("selected", "");
						}
						option.child(option_label)
					})),
			)
			.into_view()
	}

	fn creation_form(&self) -> View {
		let api = self.api.clone();
		let state = self.state.clone();
		let show_form = self.show_form.clone();
		let form = self.form.clone();
		let product_options = self
			.products
			.get()
			.into_iter()
			.map(|product| (product.id.to_string(), product.name))
			.collect();
		let customer_options = self
			.customers
			.get()
			.into_iter()
			.map(|customer| (customer.id.to_string(), customer.name))
			.collect();
		form_card(
			"Tambah Transaksi Baru",
			move |event| {
				event.prevent_default();
				let api = api.clone();
				let state = state.clone();
				let show_form = show_form.clone();
				let form = form.clone();
				let payload = form.payload();
				spawn_local(async move {
					match api.create::<OrderLine, _>("orders", &payload).await {
						Ok(_) => {
							dom::alert("Transaksi berhasil ditambahkan!");
							form.reset();
							show_form.set(false);
							Self::fetch_orders(api, state);
						}
						Err(err) => {
							dom::alert("Gagal menambahkan transaksi.");
							error_log!("{err}");
						}
					}
				});
			},
			vec![
				Self::labelled_select(
					"product_id",
					"Pilih Produk",
					"-- Pilih Produk --",
					product_options,
					self.form.product_id.clone(),
				),
				Self::labelled_select(
					"customer_id",
					"Pilih Customer",
					"-- Pilih Customer --",
					customer_options,
					self.form.customer_id.clone(),
				),
				self.quantity_field(),
				form_buttons(self.show_form.clone()),
			],
		)
	}

	fn quantity_field(&self) -> View {
		let quantity = self.form.quantity.clone();
		let on_input = {
			let quantity = quantity.clone();
			move |event| quantity.set(event_target_value(&event))
		};
		ElementView::new("div")
			.child(
				ElementView::new("label")
					.attr("class", "block text-sm font-medium mb-1 text-gray-700")
					.child("Quantity"),
			)
			.child(
				ElementView::new("input")
					.attr("type", "number")
					.attr("name", "quantity")
					.attr("value", quantity.get())
					.attr("placeholder", "Masukkan jumlah")
					.attr("class", "border p-2 rounded w-full")
					.attr("required", "")
					.on(EventType::Input, on_input),
			)
			.into_view()
	}

	fn table(&self) -> View {
		let rows = self
			.state
			.items()
			.into_iter()
			.map(|order| {
				table_row(vec![
					cell(order.order_no),
					cell(order.product_code),
					cell(order.product_name),
					cell(order.quantity.to_string()),
					cell(rupiah(order.unit_price)),
					accent_cell(rupiah(order.total)),
				])
			})
			.collect();
		data_table(
			vec![
				header_cell("No Order"),
				header_cell("Kode Barang"),
				header_cell("Nama Barang"),
				header_cell("Quantity"),
				header_cell("Harga per Unit"),
				header_cell("Total Harga"),
			],
			rows,
			"Tidak ada data order detail.",
		)
	}
}

impl Component for OrdersPage {
	fn render(&self) -> View {
		if self.state.is_loading() {
			return loading_notice("Memuat data order detail...");
		}
		ElementView::new("div")
			.attr("class", "min-h-screen bg-gray-100 p-10")
			.child(page_header(
				"Daftar Order Detail",
				Some(add_button("+ Tambah Transaksi", self.show_form.clone())),
			))
			.child(self.show_form.get().then(|| self.creation_form()))
			.child(self.table())
			.into_view()
	}

	fn on_mount(self: Rc<Self>) {
		Self::fetch_orders(self.api.clone(), self.state.clone());

		let api = self.api.clone();
		let products = self.products.clone();
		spawn_local(async move {
			match api.list("products").await {
				Ok(items) => products.set(items),
				Err(err) => error_log!("Gagal memuat data produk: {err}"),
			}
		});

		let api = self.api.clone();
		let customers = self.customers.clone();
		spawn_local(async move {
			match api.list("customers").await {
				Ok(items) => customers.set(items),
				Err(err) => error_log!("Gagal memuat data pelanggan: {err}"),
			}
		});
	}

	fn name(&self) -> &'static str {
		"OrdersPage"
	}
}
