//! Server-driven datastar responses: a batch of SSE events sent in one reply.

use std::convert::Infallible;

use async_stream::stream;
use axum::response::{
    IntoResponse, Response,
    sse::{Event, Sse},
};
use datastar::prelude::{ElementPatchMode, PatchElements};

#[derive(Default)]
pub struct StreamBuilder {
    events: Vec<Event>,
}

impl StreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the element matched by `selector` with `html`.
    pub fn replace(&mut self, selector: &str, html: String) -> &mut Self {
        let event = PatchElements::new(html)
            .selector(selector)
            .mode(ElementPatchMode::Replace)
            .write_as_axum_sse_event();
        self.events.push(event);
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_response(self) -> Response {
        let stream = stream! {
            for event in self.events {
                yield Ok::<Event, Infallible>(event);
            }
        };
        Sse::new(stream).into_response()
    }
}
