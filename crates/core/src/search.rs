//! The search lifecycle: a four-slot state tuple plus a request sequence
//! number. `begin()` hands out a token; `finish()` only honors the latest
//! token, so overlapping searches resolve deterministically — last issued
//! request wins and stale responses are discarded whole.

use crate::types::MovieRecord;

/// State behind the search widget. One writer (the UI controller), one
/// in-flight request honored at a time.
///
/// Invariant: `result` and `error` are never both present.
#[derive(Debug, Default, Clone)]
pub struct SearchState {
    /// Free text, replaced on every keystroke. Never validated — an empty
    /// query is forwarded to the provider as-is.
    pub query: String,
    /// Present only after a successful lookup.
    pub result: Option<MovieRecord>,
    /// Present only after a failed lookup; the text is user-facing.
    pub error: Option<String>,
    /// True strictly between `begin()` and the matching `finish()`.
    pub loading: bool,
    seq: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query text. Touches nothing else.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Start a search: clear both outcome slots and raise `loading` before
    /// any network activity, so the view never shows a stale record or error
    /// alongside an outstanding request. Returns the token the resolution
    /// must present to `finish()`.
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.result = None;
        self.seq += 1;
        self.seq
    }

    /// Resolve a search. A token older than the latest `begin()` is a stale
    /// response from a superseded request: it is discarded without touching
    /// any slot (the newer request still owns `loading`). Returns whether
    /// the outcome was applied.
    pub fn finish(&mut self, token: u64, outcome: Result<MovieRecord, String>) -> bool {
        if token != self.seq {
            tracing::debug!(token, latest = self.seq, "discarding stale search resolution");
            return false;
        }
        match outcome {
            Ok(record) => self.result = Some(record),
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
