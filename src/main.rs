use gramtui::cli::Flags;
use gramtui::controllers;
use gramtui::models::client::POSTS_ENDPOINT;
use gramtui::models::{Config, FeedClient};
use gramtui::views::make_post_card;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get Flags
    let flags = Flags::from_args();

    let config = Config::load()?;

    // Flag beats config beats the built-in endpoint
    let endpoint = flags
        .endpoint
        .clone()
        .or(config.endpoint)
        .unwrap_or_else(|| POSTS_ENDPOINT.to_string());

    let mut client = FeedClient::new(endpoint);
    if let Some(secs) = config.timeout_secs {
        client = client.with_timeout(secs);
    }

    if flags.fetch() {
        print_feed(&client).await
    } else {
        controllers::start_app(client).await
    }
}

/// Headless mode: fetch once and write the rendered cards to stdout.
async fn print_feed(client: &FeedClient) -> Result<(), Box<dyn std::error::Error>> {
    let posts = client.fetch_posts().await?;

    for post in &posts {
        let card = make_post_card(post);
        if let Some(image) = &card.image {
            println!("[image: {}]", image.alt.as_deref().unwrap_or(&image.source));
        }
        println!("{}", card.message);
        println!("{}", card.attribution);
        println!();
    }

    Ok(())
}
