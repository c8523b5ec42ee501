//! Vendor API endpoint definitions.
//!
//! Data endpoints build a [`crate::RequestDescriptor`] from a fixed URL
//! template; the authentication exchange in [`auth`] is the only module here
//! that performs HTTP itself.

mod auth;
mod consumption;
mod contracts;
mod delivery;
mod meters;

pub(crate) use auth::login;
pub use consumption::{monthly_consumption, weekly_consumption};
pub use contracts::contracts;
pub use delivery::delivery_points;
pub use meters::last_known_reading;
