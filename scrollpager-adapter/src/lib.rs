//! Adapter utilities for the `scrollpager` crate.
//!
//! The `scrollpager` crate is UI-agnostic and focuses on the pagination state machine. This
//! crate provides the framework-neutral pieces an adapter needs around it:
//!
//! - A [`Controller`] that debounces scroll events and applies fetched pages after a latency
//! - A cancellable [`Deferred`] value for timer-less "resolve later" workflows
//!
//! Time is always passed in by the caller (`now_ms`), so the same code runs under a frame loop,
//! a real timer, or a test clock.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod deferred;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use deferred::Deferred;
