//! # TripSync Engine
//!
//! The group decision engine: pure functions that turn raw per-member input
//! into a trip's chosen weekend, destination and exported calendar.
//!
//! ## Components
//!
//! - **date_math**: calendar-date helpers shared by the generators
//! - **weekends**: candidate date ranges anchored to a start date
//! - **availability**: yes/maybe/no marks folded into ranked weekend scores
//! - **ranked_choice**: instant-runoff resolution over any candidate set
//! - **calendar**: RFC5545 calendar text for a finalized trip
//! - **export**: builds calendar events from a finalized trip
//!
//! None of these functions perform I/O or hold shared state, so they can be
//! called concurrently from any number of requests.

pub mod availability;
pub mod calendar;
pub mod date_math;
pub mod export;
pub mod ranked_choice;
pub mod weekends;

pub use availability::score_weekends;
pub use calendar::{serialize_calendar, serialize_calendar_at};
pub use export::{export_trip, export_trip_calendar};
pub use ranked_choice::resolve;
pub use weekends::{generate_ranges, generate_weekends, generate_weekends_from_str};
