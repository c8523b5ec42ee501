//! Contract API methods for [`SaurClient`].

use serde_json::Value;

use crate::client::SaurClient;
use crate::endpoints;
use crate::error::Result;

impl SaurClient {
    /// The nested client/account/subscription tree for the section.
    pub async fn contracts(&mut self) -> Result<Value> {
        self.execute(endpoints::contracts()).await
    }
}
