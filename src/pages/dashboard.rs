//! Dashboard: four KPI cards from one aggregate fetch.

use crate::api::ApiClient;
use crate::component::Component;
use crate::error_log;
use crate::listing::loading_notice;
use crate::models::DashboardKpi;
use crate::reactive::Signal;
use crate::spawn::spawn_local;
use crate::view::{ElementView, IntoView, View};
use std::rc::Rc;

/// The landing page. Stays on its loading notice until the KPI fetch
/// succeeds; a failed fetch only logs.
pub struct DashboardPage {
	api: ApiClient,
	kpi: Signal<Option<DashboardKpi>>,
}

impl Default for DashboardPage {
	fn default() -> Self {
		Self::new()
	}
}

impl DashboardPage {
	/// New page against the default API origin.
	pub fn new() -> Self {
		Self::with_client(ApiClient::default())
	}

	/// New page against a specific client.
	pub fn with_client(api: ApiClient) -> Self {
		Self {
			api,
			kpi: Signal::new(None),
		}
	}

	fn card(title: &'static str, value_class: &'static str, value: String) -> View {
		ElementView::new("div")
			.attr("class", "bg-white shadow-md rounded-2xl p-6 text-center")
			.child(
				ElementView::new("h2")
					.attr("class", "text-xl font-semibold text-gray-700")
					.child(title),
			)
			.child(ElementView::new("p").attr("class", value_class).child(value))
			.into_view()
	}
}

impl Component for DashboardPage {
	fn render(&self) -> View {
		let Some(kpi) = self.kpi.get() else {
			return loading_notice("Memuat data dashboard...");
		};
		ElementView::new("div")
			.attr("class", "min-h-screen bg-gray-100 p-10")
			.child(
				ElementView::new("h1")
					.attr("class", "text-3xl font-bold mb-8 text-gray-800")
					.child("Dashboard Overview"),
			)
			.child(
				ElementView::new("div")
					.attr("class", "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6")
					.child(Self::card(
						"Customers",
						"text-3xl font-bold text-blue-600 mt-2",
						kpi.customers.to_string(),
					))
					.child(Self::card(
						"Total Orders",
						"text-3xl font-bold text-green-600 mt-2",
						kpi.total_orders.to_string(),
					))
					.child(Self::card(
						"Products",
						"text-3xl font-bold text-purple-600 mt-2",
						kpi.products.to_string(),
					))
					.child(Self::card(
						"Produk Terbanyak Dibeli",
						"text-lg font-bold text-orange-600 mt-2",
						kpi.top_product,
					)),
			)
			.into_view()
	}

	fn on_mount(self: Rc<Self>) {
		let api = self.api.clone();
		let kpi = self.kpi.clone();
		spawn_local(async move {
			match api.fetch_one::<DashboardKpi>("dashboard-kpi").await {
				Ok(data) => kpi.set(Some(data)),
				Err(err) => error_log!("Gagal mengambil data KPI: {err}"),
			}
		});
	}

	fn name(&self) -> &'static str {
		"DashboardPage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn shows_loading_until_kpi_arrives() {
		let page = DashboardPage::new();
		assert!(page.render().render_to_string().contains("Memuat data dashboard..."));
	}

	#[test]
	#[serial]
	fn renders_four_cards_once_settled() {
		let page = DashboardPage::new();
		page.kpi.set(Some(DashboardKpi {
			customers: 3,
			total_orders: 10,
			products: 5,
			top_product: "Kursi".to_string(),
		}));
		let html = page.render().render_to_string();
		assert!(html.contains("Dashboard Overview"));
		assert!(html.contains("Customers"));
		assert!(html.contains("Total Orders"));
		assert!(html.contains("Products"));
		assert!(html.contains("Produk Terbanyak Dibeli"));
		assert!(html.contains("Kursi"));
	}

	#[test]
	#[serial]
	fn failed_fetch_keeps_the_loading_notice() {
		let page = Rc::new(DashboardPage::new());
		// Nothing scripted: the fetch fails and the page must stay on loading.
		page.clone().on_mount();
		assert!(page.render().render_to_string().contains("Memuat data dashboard..."));
	}

	#[test]
	#[serial]
	fn mount_fetches_the_kpis_and_leaves_loading() {
		let client = ApiClient::default();
		client.enqueue_response(serde_json::json!({
			"customers": 3,
			"totalOrders": 10,
			"products": 5,
			"topProduct": "Kursi"
		}));

		let page = Rc::new(DashboardPage::with_client(client.clone()));
		page.clone().on_mount();

		assert_eq!(client.calls(), vec!["GET /dashboard-kpi".to_string()]);
		let html = page.render().render_to_string();
		assert!(html.contains("Dashboard Overview"));
		assert!(html.contains("Kursi"));
	}
}
