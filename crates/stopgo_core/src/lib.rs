//! stopgo Core Runtime
//!
//! This crate provides the reactive primitives the stopgo control kit is
//! built on:
//!
//! - **Signals**: push-based observable values that replay their current
//!   value to new observers and suppress consecutive duplicates
//! - **Event Streams**: discrete push-based events with no replay
//! - **Subscriptions**: RAII observer lifetime, scoped to the owning widget
//!
//! Delivery is synchronous: observers run on the thread that produced the
//! change, in subscription order, and no internal lock is held while they
//! run, so an observer may write to other signals as part of the same
//! emission.
//!
//! # Example
//!
//! ```rust
//! use stopgo_core::Signal;
//!
//! let pressed = Signal::named("pressed", false);
//!
//! // Observers receive the current value immediately, then every change.
//! let sub = pressed.subscribe(|down: &bool| println!("pressed: {down}"));
//!
//! pressed.set(true);
//! pressed.set(true); // duplicate, suppressed
//!
//! drop(sub); // observer is released, later changes are not delivered
//! pressed.set(false);
//! ```

pub mod event;
pub mod signal;
pub mod subscription;

pub use event::EventStream;
pub use signal::Signal;
pub use subscription::{Subscription, SubscriptionSet};
