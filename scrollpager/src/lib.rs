//! A headless, scroll-gated incremental pagination engine.
//!
//! For a timer-driven controller (debounced scroll events, deferred fetches), see the
//! `scrollpager-adapter` crate.
//!
//! This crate holds the one piece of logic behind an infinite-scroll list: reveal a dataset page
//! by page, only when the viewport nears the bottom, never twice at once, and stop for good once
//! the source runs dry.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll geometry (offset, viewport height, content height)
//! - the current time in milliseconds, for debouncing
//! - a [`PageSource`] (or use the in-memory [`SliceSource`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod debounce;
mod error;
mod options;
mod pager;
mod source;
mod subject;
mod types;


pub use debounce::Debouncer;
pub use error::{FetchError, LoadOutcome};
pub use options::PagerOptions;
pub use pager::Pager;
pub use source::{PageSource, SliceSource};
pub use subject::{Observer, Subject};
pub use types::{Page, PageRequest, PagerPhase, ScrollMetrics, SubscriptionId};
