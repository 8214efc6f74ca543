// Simulates a user reading the default feed: scroll, pause, scroll again, until it ends.
//
// Run with `RUST_LOG=debug cargo run --example feed_sim --features tracing`.
use infinite_feed::{FeedStatus, PostFeed, ScrollMetrics};
use tracing_subscriber::EnvFilter;

const ROW: u64 = 72;
const VIEWPORT: u32 = 640;
const FRAME_MS: u64 = 16;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut feed = PostFeed::new(0);
    feed.subscribe_posts(|posts| {
        if let Some(last) = posts.last() {
            tracing::info!(count = posts.len(), last = %last.title, "posts updated");
        }
    });

    let mut now_ms = 0u64;
    let mut offset = 0u64;
    while feed.status() != FeedStatus::End && now_ms < 120_000 {
        now_ms += FRAME_MS;

        let content = feed.posts().len() as u64 * ROW;
        let max_offset = content.saturating_sub(VIEWPORT as u64);
        // Reads for a while between flicks: scroll only every other second.
        let flicking = (now_ms / 1000) % 2 == 0;
        if flicking && offset < max_offset {
            offset = (offset + 30).min(max_offset);
            feed.on_scroll(ScrollMetrics::new(offset, VIEWPORT, content), now_ms);
        }

        if let Some(outcome) = feed.tick(now_ms) {
            tracing::info!(now_ms, offset, ?outcome, status = ?feed.status(), "tick");
        }
    }

    feed.dispose();
    tracing::info!(
        now_ms,
        posts = feed.posts().len(),
        status = ?feed.status(),
        "feed finished"
    );
}
