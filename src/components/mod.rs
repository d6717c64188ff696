//! Shared UI components.

mod navbar;

pub use navbar::Navbar;
