//! Product list with a name filter and an inline creation form.

use crate::api::ApiClient;
use crate::component::Component;
use crate::dom;
use crate::error_log;
use crate::filters::matches_term;
use crate::format::rupiah;
use crate::listing::{
	ListState, cell, data_table, filter_bar, header_cell, loading_notice, search_input, table_row,
};
use crate::models::{NewProduct, Product};
use crate::pages::form::{add_button, form_buttons, form_card, page_header, text_field};
use crate::reactive::Signal;
use crate::spawn::spawn_local;
use crate::view::{ElementView, IntoView, View};
use std::rc::Rc;

#[derive(Clone)]
struct ProductForm {
	name: Signal<String>,
	price: Signal<String>,
	stock: Signal<String>,
}

impl ProductForm {
	fn new() -> Self {
		Self {
			name: Signal::new(String::new()),
			price: Signal::new(String::new()),
			stock: Signal::new(String::new()),
		}
	}

	fn payload(&self) -> NewProduct {
		NewProduct {
			name: self.name.get_untracked(),
			price: self.price.get_untracked(),
			stock: self.stock.get_untracked(),
		}
	}

	fn reset(&self) {
		self.name.set(String::new());
		self.price.set(String::new());
		self.stock.set(String::new());
	}
}

/// `/products`.
pub struct ProductsPage {
	api: ApiClient,
	state: ListState<Product>,
	show_form: Signal<bool>,
	search_name: Signal<String>,
	form: ProductForm,
}

impl Default for ProductsPage {
	fn default() -> Self {
		Self::new()
	}
}

impl ProductsPage {
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
			form: ProductForm::new(),
		}
	}

	fn fetch(api: ApiClient, state: ListState<Product>) {
		spawn_local(async move {
			let result = api.list("products").await;
			state.settle(result, "produk");
		});
	}

	fn creation_form(&self) -> View {
		let api = self.api.clone();
		let state = self.state.clone();
		let show_form = self.show_form.clone();
		let form = self.form.clone();
		form_card(
			"Tambah Produk Baru",
			move |event| {
				event.prevent_default();
				let api = api.clone();
				let state = state.clone();
				let show_form = show_form.clone();
				let form = form.clone();
				let payload = form.payload();
				spawn_local(async move {
					match api.create::<Product, _>("products", &payload).await {
						Ok(_) => {
							dom::alert("Produk berhasil ditambahkan!");
							show_form.set(false);
							form.reset();
							Self::fetch(api, state);
						}
						Err(err) => {
							dom::alert("Gagal menambahkan produk.");
							error_log!("{err}");
						}
					}
				});
			},
			vec![
				text_field("text", "nama_barang", "Nama Produk", self.form.name.clone()),
				text_field("number", "harga", "Harga", self.form.price.clone()),
				text_field("number", "jumlah_stok", "Jumlah Stok", self.form.stock.clone()),
				form_buttons(self.show_form.clone()),
			],
		)
	}

	fn table(&self) -> View {
		let term = self.search_name.get();
		let rows = self
			.state
			.items()
			.into_iter()
			.filter(|product| matches_term(&product.name, &term))
			.map(|product| {
				table_row(vec![
					cell(product.name),
					cell(product.code),
					cell(rupiah(product.price)),
					cell(product.stock.to_string()),
				])
			})
			.collect();
		data_table(
			vec![
				header_cell("Nama Barang"),
				header_cell("Kode Barang"),
				header_cell("Harga"),
				header_cell("Jumlah Stok"),
			],
			rows,
			"Tidak ada produk ditemukan.",
		)
	}
}

impl Component for ProductsPage {
	fn render(&self) -> View {
		if self.state.is_loading() {
			return loading_notice("Memuat data produk...");
		}
		ElementView::new("div")
			.attr("class", "min-h-screen bg-gray-100 p-10")
			.child(page_header(
				"Daftar Produk",
				Some(add_button("+ Tambah Produk", self.show_form.clone())),
			))
			.child(filter_bar(vec![search_input(
				"product-search",
				"Cari berdasarkan nama produk...",
				self.search_name.clone(),
			)]))
			.child(self.show_form.get().then(|| self.creation_form()))
			.child(self.table())
			.into_view()
	}

	fn on_mount(self: Rc<Self>) {
		Self::fetch(self.api.clone(), self.state.clone());
	}

	fn name(&self) -> &'static str {
		"ProductsPage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	fn product(name: &str, price: i64) -> Product {
		Product {
			id: 1,
			name: name.to_string(),
			code: "BRG-1".to_string(),
			price,
			stock: 12,
		}
	}

	fn settled(products: Vec<Product>) -> ProductsPage {
		let page = ProductsPage::new();
		page.state.settle(Ok(products), "produk");
		page
	}

	#[test]
	#[serial]
	fn loading_notice_until_first_settle() {
		let page = ProductsPage::new();
		assert!(page.render().render_to_string().contains("Memuat data produk..."));
	}

	#[test]
	#[serial]
	fn search_is_case_insensitive_substring() {
		let page = settled(vec![product("Chair", 150_000), product("Table", 200_000)]);
		page.search_name.set("chair".to_string());
		let html = page.render().render_to_string();
		assert!(html.contains("Chair"));
		assert!(!html.contains("Table"));
		assert_eq!(html.matches("hover:bg-gray-100").count(), 1);
	}

	#[test]
	#[serial]
	fn price_renders_as_rupiah() {
		let page = settled(vec![product("Kursi", 150_000)]);
		assert!(page.render().render_to_string().contains("Rp 150.000"));
	}

	#[test]
	#[serial]
	fn no_match_shows_the_empty_row() {
		let page = settled(vec![product("Kursi", 150_000)]);
		page.search_name.set("meja".to_string());
		let html = page.render().render_to_string();
		assert!(html.contains("Tidak ada produk ditemukan."));
		assert!(html.contains("colspan=\"4\""));
	}

	#[test]
	#[serial]
	fn form_reset_clears_every_field() {
		let page = ProductsPage::new();
		page.form.name.set("Kursi".to_string());
		page.form.price.set("150000".to_string());
		page.form.stock.set("12".to_string());
		page.form.reset();
		assert_eq!(page.form.payload(), NewProduct::default());
	}

	#[test]
	#[serial]
	fn submit_posts_once_refetches_once_and_hides_the_form() {
		use crate::dom::EventType;

		let body = serde_json::json!({
			"id": 1,
			"nama_barang": "Kursi",
			"kode_barang": "BRG-1",
			"harga": 150_000,
			"jumlah_stok": 12
		});

		let client = ApiClient::default();
		let page = ProductsPage::with_client(client.clone());
		page.state.settle(Ok(Vec::new()), "produk");
		page.show_form.set(true);
		page.form.name.set("Kursi".to_string());
		page.form.price.set("150000".to_string());
		page.form.stock.set("12".to_string());

		client.enqueue_response(body.clone());
		client.enqueue_response(serde_json::json!([body]));

		let view = page.render();
		view.find_element("form").expect("form").fire(EventType::Submit);

		assert_eq!(
			client.calls(),
			vec!["POST /products".to_string(), "GET /products".to_string()]
		);
		assert!(!page.show_form.get_untracked());
		assert_eq!(page.form.payload(), NewProduct::default());
	}
}
