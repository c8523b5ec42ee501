//! Meter reading API methods for [`SaurClient`].

use serde_json::Value;

use crate::client::SaurClient;
use crate::endpoints;
use crate::error::Result;

impl SaurClient {
    /// The last known reading of the section's meter.
    pub async fn last_known_reading(&mut self) -> Result<Value> {
        self.execute(endpoints::last_known_reading()).await
    }
}
