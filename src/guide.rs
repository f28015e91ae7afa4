//! City lookups: prompt, completion, parse

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::Result;
use crate::completion::CompletionClient;
use crate::models::{CityInfo, CityQuery};
use crate::parser::parse_city_info;
use crate::prompt::build_request;

/// Looks up landmarks and activities for a city through a completion service
#[derive(Clone)]
pub struct CityGuide {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl CityGuide {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// One completion call per lookup; errors from the client are returned as is.
    #[instrument(skip(self), fields(city = %query.name))]
    pub async fn lookup(&self, query: &CityQuery) -> Result<CityInfo> {
        let request = build_request(query, &self.model);
        let content = self.client.complete(&request).await?;
        debug!(%content, "Raw completion");

        let info = parse_city_info(&content);
        info!(
            landmarks = info.landmarks.len(),
            activities = info.activities.len(),
            "City lookup finished"
        );
        Ok(info)
    }
}
