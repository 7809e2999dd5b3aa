//! JSON renderer: structured output for tooling integration.

use crate::model::RetrievedSample;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, samples: &[RetrievedSample]) -> String {
        // RetrievedSample holds only strings, which always serialize.
        let mut out = serde_json::to_string_pretty(samples).unwrap_or_else(|_| "[]".to_string());
        out.push('\n');
        out
    }
}
