//! `Signal<T>`: a reactive value with automatic dependency tracking.
//!
//! Reading a signal with [`Signal::get`] inside an [`Effect`](super::Effect)
//! records the dependency; writing with [`Signal::set`] or [`Signal::update`]
//! re-runs every dependent effect.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::runtime::{NodeId, try_with_runtime, with_runtime};

/// A reactive value. Cloning is cheap and shares the underlying storage.
#[derive(Clone)]
pub struct Signal<T: 'static> {
	id: NodeId,
	value: Rc<RefCell<T>>,
}

impl<T: 'static> Signal<T> {
	/// Creates a new signal holding `value`.
	pub fn new(value: T) -> Self {
		Self {
			id: NodeId::new(),
			value: Rc::new(RefCell::new(value)),
		}
	}

	/// Returns the current value, tracking the read when called from inside
	/// an effect.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		with_runtime(|rt| rt.track_dependency(self.id));
		self.get_untracked()
	}

	/// Returns the current value without recording a dependency.
	pub fn get_untracked(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Borrows the current value for `f` without cloning or tracking.
	pub fn with_untracked<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Replaces the value and notifies dependents.
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		with_runtime(|rt| rt.notify_signal_change(self.id));
	}

	/// Mutates the value in place, notifying dependents once.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut *self.value.borrow_mut());
		with_runtime(|rt| rt.notify_signal_change(self.id));
	}

	/// The runtime node id of this signal.
	pub fn id(&self) -> NodeId {
		self.id
	}
}

impl<T: 'static> Drop for Signal<T> {
	fn drop(&mut self) {
		// Last clone cleans the node out of the runtime graph.
		if Rc::strong_count(&self.value) == 1 {
			let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		}
	}
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("id", &self.id)
			.field("value", &self.get_untracked())
			.finish()
	}
}
