use crossterm::event::{self, Event, KeyCode};
use ratatui::Terminal;

use crate::controllers::post_controller;
use crate::error::GramtuiError;
use crate::models::FeedClient;
use crate::views::{tui, Feed};

pub async fn start_app(client: FeedClient) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    let mut terminal = tui::setup_terminal()?;

    let mut feed = Feed::new();

    // One load on startup; afterwards only a manual refresh re-fetches.
    // A failed load leaves the feed empty and shows the error instead.
    let status = match post_controller::load_initial_posts(&client, &mut feed).await {
        Ok(_) => String::from("Feed"),
        Err(e) => format!("Error: {}", e),
    };

    // Run the app
    let res = run_app(&mut terminal, &mut feed, &client, status).await;

    // Restore terminal
    tui::restore_terminal(&mut terminal)?;

    if let Err(err) = res {
        eprintln!("{:?}", err);
    }

    Ok(())
}

pub async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    feed: &mut Feed,
    client: &FeedClient,
    mut status: String,
) -> Result<(), GramtuiError> {
    loop {
        terminal.draw(|f| tui::render_ui(f, feed, status.clone()))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => feed.next(),
                KeyCode::Up | KeyCode::Char('k') => feed.previous(),
                KeyCode::Char('g') => feed.first(),
                KeyCode::Char('G') => feed.last(),
                KeyCode::Char('r') => {
                    terminal.draw(|f| tui::render_ui(f, feed, String::from("Refreshing...")))?;

                    // A refresh appends a fresh batch below the cards
                    // already shown; nothing de-duplicates against them.
                    status = match post_controller::load_initial_posts(client, feed).await {
                        Ok(_) => String::from("Feed"),
                        Err(e) => format!("Error: {}", e),
                    };
                }
                _ => {}
            }
        }
    }
}
