use chrono::{DateTime, Local, TimeZone, Utc};

use gramtui::error::GramtuiError;
use gramtui::models::post::{posts_from_envelope, PostsResponse};
use gramtui::views::{make_post_card, Feed};

fn parse(body: &str) -> Option<PostsResponse> {
    serde_json::from_str(body).expect("fixture should parse")
}

fn local_epoch_date(secs: i64) -> String {
    DateTime::<Local>::from(Utc.timestamp_opt(secs, 0).unwrap())
        .format("%-m/%-d/%Y")
        .to_string()
}

#[test]
fn ok_envelope_renders_one_card_per_post_in_order() {
    let body = r#"{
        "status": "OK",
        "messages": [
            {"username": "alice", "message": "first post", "timestamp": "0"},
            {
                "username": "bob",
                "message": "look at this",
                "timestamp": 86400,
                "image_thumbnail_url": "https://img.test/cat.jpg",
                "image_description": "a cat on a ledge"
            },
            {
                "username": "carol",
                "message": "no caption today",
                "timestamp": 172800,
                "image_thumbnail_url": "https://img.test/dog.jpg"
            }
        ]
    }"#;

    let posts = posts_from_envelope(parse(body)).unwrap();

    let mut feed = Feed::new();
    for post in &posts {
        feed.append(make_post_card(post));
    }

    assert_eq!(feed.len(), 3);

    // Display order is server order, top to bottom
    let attributions: Vec<&str> = feed
        .cards
        .iter()
        .map(|c| c.attribution.as_str())
        .collect();
    assert_eq!(attributions[0], format!("@alice ({})", local_epoch_date(0)));
    assert!(attributions[1].starts_with("@bob ("));
    assert!(attributions[2].starts_with("@carol ("));

    // Text-only post carries no image part
    assert!(feed.cards[0].image.is_none());

    // Description doubles as alt and title
    let with_caption = feed.cards[1].image.as_ref().unwrap();
    assert_eq!(with_caption.source, "https://img.test/cat.jpg");
    assert_eq!(with_caption.alt.as_deref(), Some("a cat on a ledge"));
    assert_eq!(with_caption.title.as_deref(), Some("a cat on a ledge"));

    // Image without a description stays bare
    let without_caption = feed.cards[2].image.as_ref().unwrap();
    assert!(without_caption.alt.is_none());
    assert!(without_caption.title.is_none());
}

#[test]
fn failed_status_appends_nothing_and_reports_both_fields() {
    let body = r#"{"status": "THROTTLED", "message": "try again later"}"#;

    let mut feed = Feed::new();
    let err = posts_from_envelope(parse(body)).unwrap_err();

    match err {
        GramtuiError::Status { status, message } => {
            assert_eq!(status, "THROTTLED");
            assert_eq!(message, "try again later");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(feed.is_empty());
    feed.first();
    assert_eq!(feed.state.selected(), None);
}

#[test]
fn absent_body_stops_after_reporting() {
    let err = posts_from_envelope(parse("null")).unwrap_err();
    assert!(matches!(err, GramtuiError::EmptyResponse));
    assert_eq!(err.to_string(), "post response not set");
}

#[test]
fn reloading_appends_a_second_batch() {
    let body = r#"{
        "status": "OK",
        "messages": [{"username": "alice", "message": "hi", "timestamp": 0}]
    }"#;

    let mut feed = Feed::new();
    for _ in 0..2 {
        let posts = posts_from_envelope(parse(body)).unwrap();
        for post in &posts {
            feed.append(make_post_card(post));
        }
    }

    assert_eq!(feed.len(), 2);
    assert_eq!(feed.cards[0], feed.cards[1]);
}

#[test]
fn cards_render_as_list_items() {
    let body = r#"{
        "status": "OK",
        "messages": [
            {
                "username": "alice",
                "message": "line one\nline two",
                "timestamp": 0,
                "image_thumbnail_url": "https://img.test/cat.jpg",
                "image_description": "a cat"
            }
        ]
    }"#;

    let posts = posts_from_envelope(parse(body)).unwrap();
    let card = make_post_card(&posts[0]);

    // Smoke-check the terminal rendering path: image line, two message
    // lines, attribution, trailing spacer.
    let item = card.to_list_item();
    assert_eq!(item.height(), 5);
}
