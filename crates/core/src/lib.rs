//! # TripSync Core
//!
//! Shared domain types for the group decision engine: weekend candidates,
//! availability marks, ranked ballots, round traces and calendar events.
//! Every type here is plain data exchanged with the storage and web layers.

/// Error type shared by every engine operation
pub mod errors;
/// Domain models exchanged with collaborators
pub mod models;
