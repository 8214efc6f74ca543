use scrollpager::SliceSource;

use crate::Post;

/// Number of posts in the default mock feed.
pub const MOCK_POST_COUNT: usize = 100;

pub fn mock_post(id: u64) -> Post {
    Post::new(
        id,
        format!("Post {id}"),
        format!(
            "This is the content for post {id}. Lorem ipsum dolor sit amet, consectetur adipiscing elit."
        ),
    )
}

/// Deterministic placeholder posts with ids `1..=count`.
pub fn mock_posts(count: usize) -> Vec<Post> {
    (1..=count as u64).map(mock_post).collect()
}

pub fn mock_source(count: usize) -> SliceSource<Post> {
    SliceSource::new(mock_posts(count))
}
