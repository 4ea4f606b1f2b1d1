//! Render requests and results

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One component to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Exported component name
    #[serde(alias = "componentName")]
    pub name: String,
    /// Initial data handed to the component; `{}` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RenderRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Markup and style produced for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    pub name: String,
    /// Serialized mount container
    pub markup: String,
    /// CSS the instance injected, None if it injected nothing
    pub style: Option<String>,
}

/// Single request or an ordered batch
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RenderInput {
    Batch(Vec<RenderRequest>),
    Single(RenderRequest),
}

impl From<RenderRequest> for RenderInput {
    fn from(request: RenderRequest) -> Self {
        Self::Single(request)
    }
}

impl From<Vec<RenderRequest>> for RenderInput {
    fn from(requests: Vec<RenderRequest>) -> Self {
        Self::Batch(requests)
    }
}

/// Output shaped like the input it answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderOutput {
    Single(RenderResult),
    Batch(Vec<RenderResult>),
}

impl RenderOutput {
    pub fn into_single(self) -> Option<RenderResult> {
        match self {
            Self::Single(result) => Some(result),
            Self::Batch(_) => None,
        }
    }

    pub fn into_batch(self) -> Option<Vec<RenderResult>> {
        match self {
            Self::Batch(results) => Some(results),
            Self::Single(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_shapes() {
        let single: RenderInput = serde_json::from_value(json!({ "name": "Card" })).unwrap();
        assert_eq!(single, RenderInput::Single(RenderRequest::new("Card")));

        let batch: RenderInput = serde_json::from_value(json!([
            { "name": "Card", "data": { "title": "Hi" } },
            { "componentName": "Footer" }
        ]))
        .unwrap();
        match batch {
            RenderInput::Batch(requests) => {
                assert_eq!(requests.len(), 2);
                assert_eq!(requests[0].data, Some(json!({ "title": "Hi" })));
                assert_eq!(requests[1].name, "Footer");
                assert_eq!(requests[1].data, None);
            }
            RenderInput::Single(_) => panic!("Expected batch"),
        }
    }

    #[test]
    fn test_absent_style_serializes_as_null() {
        let result = RenderResult {
            name: "Card".to_string(),
            markup: "<div></div>".to_string(),
            style: None,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "name": "Card", "markup": "<div></div>", "style": null })
        );
    }
}
