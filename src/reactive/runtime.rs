//! Reactive runtime: dependency graph, observer stack, update queue.
//!
//! The runtime is thread-local. In WASM there is only one thread, so this is
//! effectively a global; native test threads each get their own instance.
//!
//! Updates queued while an effect is executing are held back and flushed as
//! soon as the observer stack empties. A `Signal::set` from an async fetch
//! continuation therefore re-renders immediately, while `set`s made inside a
//! running effect are batched until that effect finishes.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Unique identifier for reactive nodes (Signals and Effects).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
	/// Creates a new unique NodeId.
	pub fn new() -> Self {
		static COUNTER: AtomicUsize = AtomicUsize::new(0);
		Self(COUNTER.fetch_add(1, Ordering::Relaxed))
	}
}

impl Default for NodeId {
	fn default() -> Self {
		Self::new()
	}
}

/// Edges around one node in the dependency graph.
#[derive(Debug, Default)]
pub(crate) struct DependencyNode {
	/// Effects that depend on this node.
	pub(crate) subscribers: Vec<NodeId>,
	/// Signals this node depends on.
	pub(crate) dependencies: Vec<NodeId>,
}

/// The thread-local reactive runtime.
pub struct Runtime {
	/// Stack of currently executing effects.
	observer_stack: RefCell<Vec<NodeId>>,
	/// NodeId -> edges.
	pub(crate) dependency_graph: RefCell<BTreeMap<NodeId, DependencyNode>>,
	/// Effects waiting to be re-executed.
	pub(crate) pending_updates: RefCell<Vec<NodeId>>,
	/// Whether a flush loop is currently draining the queue.
	flushing: RefCell<bool>,
}

impl Runtime {
	fn new() -> Self {
		Self {
			observer_stack: RefCell::new(Vec::new()),
			dependency_graph: RefCell::new(BTreeMap::new()),
			pending_updates: RefCell::new(Vec::new()),
			flushing: RefCell::new(false),
		}
	}

	/// The effect currently executing, if any.
	pub fn current_observer(&self) -> Option<NodeId> {
		self.observer_stack.borrow().last().copied()
	}

	pub(crate) fn push_observer(&self, id: NodeId) {
		self.observer_stack.borrow_mut().push(id);
	}

	pub(crate) fn pop_observer(&self) -> Option<NodeId> {
		self.observer_stack.borrow_mut().pop()
	}

	/// Records an edge between the current observer and `signal_id`.
	///
	/// Called from `Signal::get`; a no-op when no effect is executing.
	pub fn track_dependency(&self, signal_id: NodeId) {
		if let Some(observer_id) = self.current_observer() {
			let mut graph = self.dependency_graph.borrow_mut();

			let signal_node = graph.entry(signal_id).or_default();
			if !signal_node.subscribers.contains(&observer_id) {
				signal_node.subscribers.push(observer_id);
			}

			let observer_node = graph.entry(observer_id).or_default();
			if !observer_node.dependencies.contains(&signal_id) {
				observer_node.dependencies.push(signal_id);
			}
		}
	}

	/// Queues every subscriber of `signal_id`, then flushes if nothing is
	/// executing right now.
	pub fn notify_signal_change(&self, signal_id: NodeId) {
		{
			let graph = self.dependency_graph.borrow();
			if let Some(node) = graph.get(&signal_id) {
				let mut pending = self.pending_updates.borrow_mut();
				for &subscriber in &node.subscribers {
					if !pending.contains(&subscriber) {
						pending.push(subscriber);
					}
				}
			}
		}
		self.flush_if_idle();
	}

	/// Drains the pending queue unless an effect is on the stack or a flush
	/// is already in progress. Effects executed here may queue further
	/// updates; the loop keeps going until the queue is empty.
	pub(crate) fn flush_if_idle(&self) {
		if self.current_observer().is_some() || *self.flushing.borrow() {
			return;
		}
		*self.flushing.borrow_mut() = true;
		loop {
			let next = {
				let mut pending = self.pending_updates.borrow_mut();
				if pending.is_empty() {
					None
				} else {
					Some(pending.remove(0))
				}
			};
			match next {
				Some(effect_id) => super::effect::Effect::execute_effect(effect_id),
				None => break,
			}
		}
		*self.flushing.borrow_mut() = false;
	}

	/// Detaches `node_id` from every signal it subscribed to.
	///
	/// Called before re-executing an effect so stale edges do not linger.
	pub fn clear_dependencies(&self, node_id: NodeId) {
		let mut graph = self.dependency_graph.borrow_mut();

		if let Some(node) = graph.get(&node_id) {
			let dependencies = node.dependencies.clone();
			for &dep_id in &dependencies {
				if let Some(dep_node) = graph.get_mut(&dep_id) {
					dep_node.subscribers.retain(|&id| id != node_id);
				}
			}
		}

		if let Some(node) = graph.get_mut(&node_id) {
			node.dependencies.clear();
		}
	}

	/// Removes a node entirely (dropped Signal or disposed Effect).
	pub fn remove_node(&self, node_id: NodeId) {
		self.clear_dependencies(node_id);
		self.dependency_graph.borrow_mut().remove(&node_id);
		self.pending_updates.borrow_mut().retain(|&id| id != node_id);
	}
}

thread_local! {
	static RUNTIME: Runtime = Runtime::new();
}

/// Runs `f` with the thread-local runtime.
pub fn with_runtime<F, R>(f: F) -> R
where
	F: FnOnce(&Runtime) -> R,
{
	RUNTIME.with(f)
}

/// Safe variant for Drop impls: returns None once TLS is torn down.
pub(crate) fn try_with_runtime<F, R>(f: F) -> Option<R>
where
	F: FnOnce(&Runtime) -> R,
{
	RUNTIME.try_with(f).ok()
}
