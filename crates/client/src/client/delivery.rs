//! Delivery point API methods for [`SaurClient`].

use serde_json::Value;

use crate::client::SaurClient;
use crate::endpoints;
use crate::error::Result;

impl SaurClient {
    /// Delivery points attached to the section.
    pub async fn delivery_points(&mut self) -> Result<Value> {
        self.execute(endpoints::delivery_points()).await
    }
}
