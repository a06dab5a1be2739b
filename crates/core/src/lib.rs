//! Core library for CineScope — provider client, movie record, and the
//! search lifecycle state machine. UI-free: everything here is exercisable
//! without a display or a live network.

pub mod provider;
pub mod search;
pub mod types;

pub use provider::{LookupError, ProviderClient, ProviderConfig};
pub use search::SearchState;
pub use types::MovieRecord;
