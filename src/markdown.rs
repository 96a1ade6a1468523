//! Review Markdown
//!
//! Renders review text with pulldown-cmark. Raw HTML in a review is shown
//! as text, images are dropped and links outside http(s)/mailto keep only
//! their text, so the output is safe for `inner_html`.

use pulldown_cmark::{html::push_html, Event, Options, Parser, Tag, TagEnd};

const SAFE_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];

/// Whether `url` may be used as a link target
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    SAFE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Render a review to HTML
pub fn render_review(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let events = sanitize_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

enum State {
    Normal,
    InImage { dropped_depth: usize },
}

fn sanitize_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;
    // Links do not nest, so one flag covers the open unsafe link
    let mut in_unsafe_link = false;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                Event::Start(Tag::Image { .. }) => {
                    state = State::InImage { dropped_depth: 0 };
                }
                Event::Start(Tag::Link { ref dest_url, .. }) if !is_safe_url(dest_url) => {
                    in_unsafe_link = true;
                }
                Event::End(TagEnd::Link) if in_unsafe_link => {
                    in_unsafe_link = false;
                }
                other => events.push(other),
            },

            // Alt text and the closing tag go with the image
            State::InImage { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}
