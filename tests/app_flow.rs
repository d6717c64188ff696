//! End-to-end behavior through the public API: route resolution, mount
//! lifecycle and empty-state rendering.
//!
//! Off-browser the HTTP client plays back scripted JSON bodies and fails any
//! unscripted call, so the default client exercises the failure path: loading
//! clears and the table falls back to its empty-data row. The dashboard is
//! the exception and stays on its loading notice until a fetch succeeds.

use orderdesk::pages::CustomersPage;
use orderdesk::{ApiClient, App, Router};
use serial_test::serial;

fn rendered(app: &App, path: &str) -> String {
	let page = app.router().resolve(path).expect("route should exist");
	page.clone().on_mount();
	page.render().render_to_string()
}

#[test]
#[serial]
fn every_list_page_starts_on_its_loading_notice() {
	let app = App::new();
	for (path, notice) in [
		("/", "Memuat data dashboard..."),
		("/customers", "Memuat data pelanggan..."),
		("/products", "Memuat data produk..."),
		("/orders", "Memuat data order detail..."),
		("/summary", "Memuat data order summary..."),
	] {
		let page = app.router().resolve(path).expect("route should exist");
		assert!(
			page.render().render_to_string().contains(notice),
			"{path} should show {notice:?} before its fetch settles"
		);
	}
}

#[test]
#[serial]
fn failed_fetch_clears_loading_and_shows_the_empty_row() {
	let app = App::new();
	for (path, empty_message) in [
		("/customers", "Tidak ada data pelanggan yang sesuai."),
		("/products", "Tidak ada produk ditemukan."),
		("/orders", "Tidak ada data order detail."),
		("/summary", "Tidak ada data order summary yang sesuai."),
	] {
		let html = rendered(&app, path);
		assert!(
			!html.contains("Memuat data"),
			"{path} should leave loading after the fetch settles"
		);
		assert!(
			html.contains(empty_message),
			"{path} should fall back to its empty-data row"
		);
	}
}

#[test]
#[serial]
fn dashboard_stays_loading_when_the_kpi_fetch_fails() {
	let app = App::new();
	assert!(rendered(&app, "/").contains("Memuat data dashboard..."));
}

#[test]
#[serial]
fn navigation_moves_the_navbar_highlight() {
	let app = App::new();
	let page = app.router().resolve("/products").expect("route should exist");
	app.router().push("/products");
	let html = App::shell(app.router(), Some(&page)).render_to_string();
	let highlighted = html
		.split("<li>")
		.find(|item| item.contains("border-yellow-300"))
		.expect("one menu item should be highlighted");
	assert!(highlighted.contains("href=\"/products\""));
}

#[test]
#[serial]
fn unknown_path_resolves_to_nothing() {
	let app = App::new();
	assert!(app.router().resolve("/does-not-exist").is_none());
	assert!(app.router().resolve("/products/1").is_none());
}

#[test]
#[serial]
fn scripted_fetch_renders_the_fetched_rows() {
	let client = ApiClient::default();
	client.enqueue_response(serde_json::json!([{
		"id": 1,
		"nama_customer": "Budi",
		"alamat": "Jl. Melati 1",
		"kodepos": "40115",
		"no_handphone": "08123456789",
		"email": "budi@example.com",
		"tanggal_bergabung": "2024-01-15"
	}]));

	let factory_client = client.clone();
	let router = Router::new()
		.route("/customers", move || CustomersPage::with_client(factory_client.clone()));
	let page = router.resolve("/customers").expect("route should exist");
	page.clone().on_mount();

	assert_eq!(client.calls(), vec!["GET /customers".to_string()]);
	let html = page.render().render_to_string();
	assert!(html.contains("Budi"));
	assert!(html.contains("15/1/2024"));
}

#[test]
#[serial]
fn fresh_navigation_gets_a_fresh_page_instance() {
	let router = Router::new().route("/customers", CustomersPage::new);
	let first = router.resolve("/customers").expect("route should exist");
	first.clone().on_mount();
	// A second visit starts over from the loading state.
	let second = router.resolve("/customers").expect("route should exist");
	assert!(second.render().render_to_string().contains("Memuat data pelanggan..."));
	assert!(!first.render().render_to_string().contains("Memuat data pelanggan..."));
}
