use chrono::{DateTime, Local, TimeZone, Utc};
use ratatui::{
    prelude::Span,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::ListItem,
};

use crate::models::Post;

/// A fully built card for one post, not yet part of any feed.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub image: Option<CardImage>,
    pub message: String,
    pub attribution: String,
}

/// The optional image part of a card. `alt` and `title` are only set
/// when the post carried a description.
#[derive(Debug, Clone, PartialEq)]
pub struct CardImage {
    pub source: String,
    pub alt: Option<String>,
    pub title: Option<String>,
}

/// Builds the card for one post. Pure construction: nothing is drawn
/// or appended to any feed here.
pub fn make_post_card(post: &Post) -> PostCard {
    let image = post
        .image_thumbnail_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| CardImage {
            source: url.to_string(),
            alt: post.image_description.clone(),
            title: post.image_description.clone(),
        });

    PostCard {
        image,
        message: post.message.clone(),
        attribution: format!("@{} ({})", post.username, local_date(post.timestamp)),
    }
}

impl PostCard {
    /// Renders the card as one multi-line list entry: image placeholder
    /// first when present, then the message as raw text (never parsed
    /// for markup), then the dimmed attribution line.
    pub fn to_list_item(&self) -> ListItem<'static> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        if let Some(image) = &self.image {
            let label = image.alt.as_deref().unwrap_or(&image.source);
            lines.push(Line::from(Span::styled(
                format!("[image: {}]", label),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        lines.extend(Text::raw(self.message.clone()).lines);

        lines.push(Line::from(Span::styled(
            self.attribution.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from("")); // Empty line for spacing between cards

        ListItem::new(lines)
    }
}

// Calendar date of the given epoch seconds in the viewer's timezone.
fn local_date(timestamp: i64) -> String {
    match Utc.timestamp_opt(timestamp, 0).single() {
        Some(utc) => {
            let local: DateTime<Local> = DateTime::from(utc);
            local.format("%-m/%-d/%Y").to_string()
        }
        None => timestamp.to_string(),
    }
}
