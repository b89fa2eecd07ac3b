//! Reports, steps, and the actions that mutate them.
//!
//! Every mutation goes through [`apply`], which takes the current collection
//! by value and hands back the updated one together with a [`Change`] flag
//! telling the caller whether anything needs to be persisted or redisplayed.

pub mod actions;
pub mod error;
pub mod types;


pub use actions::{Action, Applied, Change, apply};
pub use error::ReportError;
pub use types::{Collection, Report};
