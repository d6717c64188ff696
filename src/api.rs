//! HTTP client for the order-management API.
//!
//! All requests go to the fixed base origin. On success the decoded JSON
//! body is returned; a transport failure or non-success status becomes an
//! [`ApiError`] for the caller to log and surface. There are no retries,
//! timeouts or cancellation — a response arriving after the user navigated
//! away still resolves.
//!
//! Off-browser builds get a playback transport instead of fetch: calls are
//! recorded, and each one resolves with the next scripted JSON body, or with
//! a network error when nothing is scripted. This keeps the page flows
//! (fetch, create, delete) executable from ordinary tests, in the same split
//! the view layer uses for DOM access.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Base origin of the backend API.
pub const API_BASE_URL: &str = "http://localhost:8000/api";

/// Errors from API calls.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
	/// Connection failed or the request never completed.
	#[error("Network error: {0}")]
	Network(String),
	/// The request body could not be serialized.
	#[error("Serialization error: {0}")]
	Serialization(String),
	/// The response body could not be decoded.
	#[error("Deserialization error: {0}")]
	Deserialization(String),
	/// The server answered with a non-success status.
	#[error("Server error ({status}): {message}")]
	Server {
		/// HTTP status code.
		status: u16,
		/// Status text from the response.
		message: String,
	},
}

/// Client for one API origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
	base: String,
	#[cfg(not(target_arch = "wasm32"))]
	playback: playback::Playback,
}

impl Default for ApiClient {
	fn default() -> Self {
		Self::new(API_BASE_URL)
	}
}

impl ApiClient {
	/// Creates a client against `base` (no trailing slash).
	pub fn new(base: impl Into<String>) -> Self {
		Self {
			base: base.into(),
			#[cfg(not(target_arch = "wasm32"))]
			playback: playback::Playback::default(),
		}
	}

	/// URL of a collection endpoint.
	pub fn collection_url(&self, resource: &str) -> String {
		format!("{}/{}", self.base, resource)
	}

	/// URL of a single record endpoint.
	pub fn record_url(&self, resource: &str, id: u32) -> String {
		format!("{}/{}/{}", self.base, resource, id)
	}

	/// Fetches a resource collection.
	#[cfg(target_arch = "wasm32")]
	pub async fn list<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>, ApiError> {
		self.get_json(&self.collection_url(resource)).await
	}

	/// Fetches a single aggregate object (the dashboard KPI endpoint).
	#[cfg(target_arch = "wasm32")]
	pub async fn fetch_one<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ApiError> {
		self.get_json(&self.collection_url(resource)).await
	}

	/// Posts a new record and returns the created one.
	#[cfg(target_arch = "wasm32")]
	pub async fn create<T: DeserializeOwned, P: Serialize>(
		&self,
		resource: &str,
		payload: &P,
	) -> Result<T, ApiError> {
		use gloo_net::http::Request;

		let request = Request::post(&self.collection_url(resource))
			.json(payload)
			.map_err(|e| ApiError::Serialization(e.to_string()))?;
		let response = request
			.send()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;
		if !response.ok() {
			return Err(ApiError::Server {
				status: response.status(),
				message: response.status_text(),
			});
		}
		response
			.json()
			.await
			.map_err(|e| ApiError::Deserialization(e.to_string()))
	}

	/// Deletes a record by id.
	#[cfg(target_arch = "wasm32")]
	pub async fn delete(&self, resource: &str, id: u32) -> Result<(), ApiError> {
		use gloo_net::http::Request;

		let response = Request::delete(&self.record_url(resource, id))
			.send()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;
		if !response.ok() {
			return Err(ApiError::Server {
				status: response.status(),
				message: response.status_text(),
			});
		}
		Ok(())
	}

	#[cfg(target_arch = "wasm32")]
	async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
		use gloo_net::http::Request;

		let response = Request::get(url)
			.send()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;
		if !response.ok() {
			return Err(ApiError::Server {
				status: response.status(),
				message: response.status_text(),
			});
		}
		response
			.json()
			.await
			.map_err(|e| ApiError::Deserialization(e.to_string()))
	}

	/// Playback: records the call and resolves with the next scripted body.
	#[cfg(not(target_arch = "wasm32"))]
	pub async fn list<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>, ApiError> {
		self.playback.take(format!("GET /{resource}"))
	}

	/// Playback: records the call and resolves with the next scripted body.
	#[cfg(not(target_arch = "wasm32"))]
	pub async fn fetch_one<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ApiError> {
		self.playback.take(format!("GET /{resource}"))
	}

	/// Playback: records the call and resolves with the next scripted body.
	#[cfg(not(target_arch = "wasm32"))]
	pub async fn create<T: DeserializeOwned, P: Serialize>(
		&self,
		resource: &str,
		_payload: &P,
	) -> Result<T, ApiError> {
		self.playback.take(format!("POST /{resource}"))
	}

	/// Playback: records the call and resolves with the next scripted body.
	#[cfg(not(target_arch = "wasm32"))]
	pub async fn delete(&self, resource: &str, id: u32) -> Result<(), ApiError> {
		self.playback
			.take::<serde_json::Value>(format!("DELETE /{resource}/{id}"))
			.map(|_| ())
	}

	/// Scripts the JSON body the next call resolves with (off-browser only).
	#[cfg(not(target_arch = "wasm32"))]
	pub fn enqueue_response(&self, body: serde_json::Value) {
		self.playback.enqueue(body);
	}

	/// The calls made so far, as `METHOD /path` strings (off-browser only).
	#[cfg(not(target_arch = "wasm32"))]
	pub fn calls(&self) -> Vec<String> {
		self.playback.calls()
	}
}

#[cfg(not(target_arch = "wasm32"))]
mod playback {
	use super::ApiError;
	use serde::de::DeserializeOwned;
	use std::cell::RefCell;
	use std::collections::VecDeque;
	use std::rc::Rc;

	/// Shared between clones of one client, so a handler's clone records
	/// into the same log the test reads.
	#[derive(Debug, Clone, Default)]
	pub(super) struct Playback {
		responses: Rc<RefCell<VecDeque<serde_json::Value>>>,
		calls: Rc<RefCell<Vec<String>>>,
	}

	impl Playback {
		pub(super) fn enqueue(&self, body: serde_json::Value) {
			self.responses.borrow_mut().push_back(body);
		}

		pub(super) fn calls(&self) -> Vec<String> {
			self.calls.borrow().clone()
		}

		/// Records `call` and decodes the next scripted body. With nothing
		/// scripted the call fails like a dead network.
		pub(super) fn take<T: DeserializeOwned>(&self, call: String) -> Result<T, ApiError> {
			self.calls.borrow_mut().push(call);
			match self.responses.borrow_mut().pop_front() {
				Some(body) => serde_json::from_value(body)
					.map_err(|e| ApiError::Deserialization(e.to_string())),
				None => Err(ApiError::Network(
					"API calls not supported outside the browser".to_string(),
				)),
			}
		}
	}
}
