//! Delivery point endpoints.

use crate::request::RequestDescriptor;

/// Delivery points attached to the section.
pub fn delivery_points() -> RequestDescriptor {
    RequestDescriptor::get("/deli/section_subscriptions/{section_id}/delivery_points")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_points_template() {
        let descriptor = delivery_points();
        assert_eq!(
            descriptor.render_path("42"),
            "/deli/section_subscriptions/42/delivery_points"
        );
    }
}
