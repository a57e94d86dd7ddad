pub mod models;
pub mod views;
pub mod controllers;
pub mod cli;
pub mod error;

// Re-exports for convenience
pub use models::{FeedClient, Config, Post};
pub use views::{Feed, PostCard};
pub use controllers::{start_app, load_initial_posts};
pub use error::GramtuiError;
