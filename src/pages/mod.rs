//! The five routed pages.

mod customers;
mod dashboard;
mod form;
mod orders;
mod products;
mod summary;

pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use orders::OrdersPage;
pub use products::ProductsPage;
pub use summary::SummaryPage;
