//! Meter index endpoints.

use crate::request::RequestDescriptor;

/// Last known meter reading for the section's meter.
pub fn last_known_reading() -> RequestDescriptor {
    RequestDescriptor::get("/deli/section_subscriptions/{section_id}/meter_indexes/last")
}
