use crate::error::GramtuiError;
use crate::models::FeedClient;
use crate::views::{make_post_card, Feed};

/// Fetches the post list once and appends one card per post to the
/// feed, preserving server order. Returns how many cards were added.
/// Each call issues its own request; running it again appends a fresh
/// batch below whatever is already shown.
pub async fn load_initial_posts(
    client: &FeedClient,
    feed: &mut Feed,
) -> Result<usize, GramtuiError> {
    let posts = client.fetch_posts().await?;

    for post in &posts {
        feed.append(make_post_card(post));
    }

    Ok(posts.len())
}
