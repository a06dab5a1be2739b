//! Global application state using Dioxus signals, plus the one async action
//! that drives it.

use cinescope_core::{ProviderClient, SearchState};
use dioxus::prelude::*;

/// Provider client — built from env config at startup, injected on first
/// render.
pub static PROVIDER: GlobalSignal<Option<ProviderClient>> = Signal::global(|| None);

/// The whole search lifecycle: query text, outcome slots, loading flag, and
/// the request sequence counter. One writer, mutated only on the UI thread.
pub static SEARCH: GlobalSignal<SearchState> = Signal::global(SearchState::new);

/// Fixed suffix appended to every displayed error.
pub const RETRY_HINT: &str = ". Please try searching for another movie.";

/// Kick off a lookup for the current query.
///
/// `begin()` runs synchronously — loading is visible and both outcome slots
/// are cleared before the request leaves. The spawned task is scoped to the
/// component runtime, so an unmount drops it (and cancels the request) before
/// it can write back. A resolution carrying a superseded token is discarded
/// by `finish()`, so the latest search always owns the final state.
pub fn start_search() {
    let client = match PROVIDER.read().as_ref() {
        Some(client) => client.clone(),
        None => {
            tracing::warn!("search triggered before provider client was injected");
            return;
        }
    };

    let (title, token) = {
        let mut search = SEARCH.write();
        let title = search.query.clone();
        (title, search.begin())
    };
    tracing::debug!(%title, token, "search started");

    spawn(async move {
        let outcome = client.lookup(&title).await.map_err(|e| e.user_message());
        SEARCH.write().finish(token, outcome);
    });
}
