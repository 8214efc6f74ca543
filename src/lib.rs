//! An infinite-scroll post feed.
//!
//! Posts come from an in-memory mock dataset and are revealed ten at a time: the first page on
//! construction, then one page per debounced scroll that lands near the bottom of the list.
//! The pagination logic lives in `scrollpager`; the timing glue in `scrollpager-adapter`.
//!
//! The feed renders nothing. A host forwards scroll geometry and a millisecond clock, and reads
//! back the revealed posts plus the `loading` / `has_more` flags (or subscribes to them).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod feed;
mod mock;
mod post;


pub use feed::{FeedStatus, PostFeed, PostSource};
pub use mock::{MOCK_POST_COUNT, mock_post, mock_posts, mock_source};
pub use post::Post;

pub use scrollpager::{FetchError, LoadOutcome, PagerOptions, ScrollMetrics};
