//! Fine-grained reactivity: [`Signal`], [`Effect`], and the thread-local
//! runtime that connects them.

pub mod effect;
pub mod runtime;
pub mod signal;

pub use effect::Effect;
pub use runtime::{NodeId, with_runtime};
pub use signal::Signal;
