//! Consumption endpoints.

use crate::request::RequestDescriptor;

/// Weekly consumption for the week containing the given date.
pub fn weekly_consumption(year: i32, month: u32, day: u32) -> RequestDescriptor {
    RequestDescriptor::get(format!(
        "/deli/section_subscription/{{section_id}}/consumptions/weekly?year={year}&month={month}&day={day}"
    ))
}

/// Monthly consumption for the given month.
pub fn monthly_consumption(year: i32, month: u32) -> RequestDescriptor {
    RequestDescriptor::get(format!(
        "/deli/section_subscription/{{section_id}}/consumptions/monthly?year={year}&month={month}"
    ))
}
