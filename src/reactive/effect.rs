//! `Effect`: a side effect that re-runs when its tracked signals change.
//!
//! The effect function runs once on construction; every `Signal::get` made
//! during that run becomes a dependency. Dependencies are cleared and
//! re-collected on each re-run, so conditional reads stay accurate.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::runtime::{NodeId, try_with_runtime, with_runtime};

type EffectFn = Box<dyn FnMut() + 'static>;

thread_local! {
	static EFFECT_FUNCTIONS: RefCell<BTreeMap<NodeId, EffectFn>> = const { RefCell::new(BTreeMap::new()) };
}

/// A reactive side effect. Dropping the handle disposes the effect.
pub struct Effect {
	id: NodeId,
	disposed: Rc<RefCell<bool>>,
}

impl Effect {
	/// Creates the effect and runs it immediately.
	pub fn new<F>(mut f: F) -> Self
	where
		F: FnMut() + 'static,
	{
		let id = NodeId::new();
		let disposed = Rc::new(RefCell::new(false));

		let disposed_clone = disposed.clone();
		EFFECT_FUNCTIONS.with(|storage| {
			storage.borrow_mut().insert(
				id,
				Box::new(move || {
					if !*disposed_clone.borrow() {
						f();
					}
				}),
			);
		});

		Self::execute_effect(id);

		Self { id, disposed }
	}

	/// Runs the effect with `effect_id`, re-collecting its dependencies.
	/// Updates queued during the run are flushed once the stack empties.
	pub(crate) fn execute_effect(effect_id: NodeId) {
		with_runtime(|rt| {
			rt.clear_dependencies(effect_id);
			rt.push_observer(effect_id);
		});

		EFFECT_FUNCTIONS.with(|storage| {
			// The function is taken out for the duration of the call so a
			// re-entrant execute cannot alias the RefCell borrow.
			let func = storage.borrow_mut().remove(&effect_id);
			if let Some(mut func) = func {
				func();
				storage.borrow_mut().insert(effect_id, func);
			}
		});

		with_runtime(|rt| {
			rt.pop_observer();
			rt.flush_if_idle();
		});
	}

	/// The runtime node id of this effect.
	pub fn id(&self) -> NodeId {
		self.id
	}

	/// Stops the effect permanently and removes it from the graph.
	pub fn dispose(&self) {
		*self.disposed.borrow_mut() = true;
		let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		let _ = EFFECT_FUNCTIONS.try_with(|storage| {
			storage.borrow_mut().remove(&self.id);
		});
	}

	/// Leaks the effect so it runs for the rest of the program.
	///
	/// Used for the top-level render effect, which must outlive `main`.
	pub fn forever(self) {
		std::mem::forget(self);
	}
}

impl Drop for Effect {
	fn drop(&mut self) {
		self.dispose();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::reactive::Signal;
	use serial_test::serial;

	#[test]
	#[serial]
	fn runs_immediately() {
		let count = Rc::new(RefCell::new(0));
		let count_clone = count.clone();

		let _effect = Effect::new(move || {
			*count_clone.borrow_mut() += 1;
		});

		assert_eq!(*count.borrow(), 1);
	}

	#[test]
	#[serial]
	fn reruns_on_signal_change() {
		let signal = Signal::new(0);
		let seen = Rc::new(RefCell::new(Vec::new()));
		let seen_clone = seen.clone();

		let signal_clone = signal.clone();
		let _effect = Effect::new(move || {
			seen_clone.borrow_mut().push(signal_clone.get());
		});

		assert_eq!(*seen.borrow(), vec![0]);

		signal.set(10);
		assert_eq!(*seen.borrow(), vec![0, 10]);

		signal.set(20);
		assert_eq!(*seen.borrow(), vec![0, 10, 20]);
	}

	#[test]
	#[serial]
	fn tracks_multiple_signals() {
		let a = Signal::new(1);
		let b = Signal::new(2);
		let sum = Rc::new(RefCell::new(0));
		let sum_clone = sum.clone();

		let a_clone = a.clone();
		let b_clone = b.clone();
		let _effect = Effect::new(move || {
			*sum_clone.borrow_mut() = a_clone.get() + b_clone.get();
		});

		assert_eq!(*sum.borrow(), 3);
		a.set(10);
		assert_eq!(*sum.borrow(), 12);
		b.set(20);
		assert_eq!(*sum.borrow(), 30);
	}

	#[test]
	#[serial]
	fn set_inside_effect_is_batched() {
		let source = Signal::new(0);
		let doubled = Signal::new(0);

		let source_clone = source.clone();
		let doubled_clone = doubled.clone();
		let _effect = Effect::new(move || {
			doubled_clone.set(source_clone.get() * 2);
		});

		source.set(5);
		assert_eq!(doubled.get_untracked(), 10);
	}

	#[test]
	#[serial]
	fn dispose_stops_reruns() {
		let signal = Signal::new(0);
		let count = Rc::new(RefCell::new(0));
		let count_clone = count.clone();

		let signal_clone = signal.clone();
		let effect = Effect::new(move || {
			let _ = signal_clone.get();
			*count_clone.borrow_mut() += 1;
		});

		assert_eq!(*count.borrow(), 1);
		effect.dispose();

		signal.set(10);
		assert_eq!(*count.borrow(), 1);
	}

	#[test]
	#[serial]
	fn drop_cleans_up() {
		let signal = Signal::new(0);
		let count = Rc::new(RefCell::new(0));
		let count_clone = count.clone();

		{
			let signal_clone = signal.clone();
			let _effect = Effect::new(move || {
				let _ = signal_clone.get();
				*count_clone.borrow_mut() += 1;
			});
			assert_eq!(*count.borrow(), 1);
		}

		signal.set(10);
		assert_eq!(*count.borrow(), 1);
	}
}
