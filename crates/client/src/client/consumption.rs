//! Consumption API methods for [`SaurClient`].

use serde_json::Value;

use crate::client::SaurClient;
use crate::endpoints;
use crate::error::Result;

impl SaurClient {
    /// Consumption for the week containing the given date, day by day.
    pub async fn weekly_consumption(&mut self, year: i32, month: u32, day: u32) -> Result<Value> {
        self.execute(endpoints::weekly_consumption(year, month, day))
            .await
    }

    /// Consumption for the given month.
    pub async fn monthly_consumption(&mut self, year: i32, month: u32) -> Result<Value> {
        self.execute(endpoints::monthly_consumption(year, month))
            .await
    }
}
