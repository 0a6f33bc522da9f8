pub mod availability;
pub mod ballot;
pub mod calendar;
pub mod preferences;
pub mod requests;
pub mod trip;
pub mod weekend;
