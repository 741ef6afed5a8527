//! Live session snapshot streaming for the organizer screen.

use std::time::Duration;

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio_stream::{StreamExt, wrappers::WatchStream};

use crate::state::SharedState;

/// Convert the live watch channel into an SSE response.
///
/// Every document mutation pushes a fresh snapshot; the watch wrapper also
/// yields the current value immediately, so a reconnecting organizer screen
/// renders without waiting for the next claim.
pub fn live_stream(
    state: &SharedState,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>> + use<>> {
    let stream = WatchStream::new(state.live_watcher())
        .map(|snapshot| Event::default().event("live").json_data(&snapshot));

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
