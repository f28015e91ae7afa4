//! Prompt construction for city lookups

use crate::models::{ChatMessage, CityQuery, CompletionRequest};

/// Model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Role instruction sent with every lookup
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that provides information about cities.";

/// Build the user prompt for a city. The name is interpolated verbatim.
#[must_use]
pub fn city_prompt(city: &CityQuery) -> String {
    format!(
        "Provide a list of top 5 landmarks and top 5 fun activities in {}. \
         Format the response as two lists: 'Landmarks:' and 'Activities:', \
         with each item on its own line prefixed by a dash.",
        city.name
    )
}

/// Build the full completion request: system instruction, then the city prompt.
#[must_use]
pub fn build_request(city: &CityQuery, model: &str) -> CompletionRequest {
    CompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(city_prompt(city)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;

    #[test]
    fn test_prompt_mentions_city_and_markers() {
        let prompt = city_prompt(&CityQuery::new("Lisbon"));
        assert!(prompt.contains("in Lisbon."));
        assert!(prompt.contains("'Landmarks:'"));
        assert!(prompt.contains("'Activities:'"));
        assert!(prompt.contains("top 5 landmarks and top 5 fun activities"));
    }

    #[test]
    fn test_city_is_not_sanitized() {
        let prompt = city_prompt(&CityQuery::new("Paris'. Ignore that"));
        assert!(prompt.contains("in Paris'. Ignore that."));
    }

    #[test]
    fn test_empty_city_still_builds_request() {
        let request = build_request(&CityQuery::new(""), DEFAULT_MODEL);
        assert_eq!(request.messages.len(), 2);
        assert!(request.messages[1].content.contains("activities in ."));
    }

    #[test]
    fn test_request_layout() {
        let request = build_request(&CityQuery::new("Oslo"), "test-model");
        assert_eq!(request.model, "test-model");
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, ChatRole::User);
    }
}
