//! Wire types for the order-management API.
//!
//! Records come back verbatim; the front end performs no normalization or
//! caching beyond the in-memory list held by the current view. Wire field
//! names (Indonesian, plus two camelCase KPI fields) are preserved with
//! serde renames.
//!
//! Create payloads mirror the form fields exactly: numeric inputs are sent
//! as the strings the user typed, without client-side coercion.

use serde::{Deserialize, Serialize};

/// A customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
	pub id: u32,
	#[serde(rename = "nama_customer")]
	pub name: String,
	#[serde(rename = "alamat")]
	pub address: String,
	#[serde(rename = "kodepos")]
	pub postal_code: String,
	#[serde(rename = "no_handphone")]
	pub phone: String,
	pub email: String,
	/// ISO date string; compared by prefix when filtering.
	#[serde(rename = "tanggal_bergabung")]
	pub joined_date: String,
}

/// Payload for `POST /customers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
	#[serde(rename = "nama_customer")]
	pub name: String,
	#[serde(rename = "alamat")]
	pub address: String,
	#[serde(rename = "kodepos")]
	pub postal_code: String,
	#[serde(rename = "no_handphone")]
	pub phone: String,
	pub email: String,
	#[serde(rename = "tanggal_bergabung")]
	pub joined_date: String,
}

/// A product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: u32,
	#[serde(rename = "nama_barang")]
	pub name: String,
	#[serde(rename = "kode_barang")]
	pub code: String,
	#[serde(rename = "harga")]
	pub price: i64,
	#[serde(rename = "jumlah_stok")]
	pub stock: i64,
}

/// Payload for `POST /products`. Price and stock stay as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
	#[serde(rename = "nama_barang")]
	pub name: String,
	#[serde(rename = "harga")]
	pub price: String,
	#[serde(rename = "jumlah_stok")]
	pub stock: String,
}

/// One order line, totals computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
	pub id: u32,
	#[serde(rename = "no_order")]
	pub order_no: String,
	#[serde(rename = "kode_barang")]
	pub product_code: String,
	#[serde(rename = "nama_barang")]
	pub product_name: String,
	pub quantity: i64,
	#[serde(rename = "harga_per_unit")]
	pub unit_price: i64,
	/// Server-computed line total, rendered verbatim.
	#[serde(rename = "total_harga")]
	pub total: i64,
}

/// Payload for `POST /orders`. Ids and quantity stay as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
	pub product_id: String,
	pub quantity: String,
	pub customer_id: String,
}

/// An order summary row; the only entity that supports delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
	pub id: u32,
	#[serde(rename = "no_order")]
	pub order_no: String,
	/// ISO date string; compared by prefix when filtering.
	#[serde(rename = "tanggal_transaksi")]
	pub transaction_date: String,
	#[serde(rename = "nama_customer")]
	pub customer_name: String,
	#[serde(rename = "total_harga")]
	pub total: i64,
}

/// Aggregate dashboard metrics from `GET /dashboard-kpi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpi {
	pub customers: u32,
	#[serde(rename = "totalOrders")]
	pub total_orders: u32,
	pub products: u32,
	#[serde(rename = "topProduct")]
	pub top_product: String,
}
