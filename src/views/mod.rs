pub mod cards;
pub mod feed;
pub mod tui;

// Re-export important types for convenience
pub use cards::{make_post_card, CardImage, PostCard};
pub use feed::Feed;
