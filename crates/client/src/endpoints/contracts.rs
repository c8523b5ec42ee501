//! Contract endpoints.

use crate::request::RequestDescriptor;

/// The nested client/account/subscription tree for the section.
pub fn contracts() -> RequestDescriptor {
    RequestDescriptor::get("/admin/v3/clients/{section_id}")
}
