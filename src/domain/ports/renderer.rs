//! Renderer port
//!
//! Executes a server bundle headlessly with an empty context.

use std::path::Path;

use serde::Deserialize;

use crate::error::SkeletonResult;

/// Output of one server render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RenderedApp {
    /// Rendered component markup
    #[serde(rename = "html")]
    pub markup: String,
    /// Collected `<style>` tags, possibly empty
    #[serde(default)]
    pub styles: String,
}

/// Render a bundle descriptor into markup.
pub trait Renderer {
    fn render(&self, bundle: &Path) -> SkeletonResult<RenderedApp>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_renderer_payload() {
        let app: RenderedApp =
            serde_json::from_str(r#"{"html":"<div data-server-rendered=\"true\"></div>"}"#).unwrap();
        assert_eq!(app.markup, "<div data-server-rendered=\"true\"></div>");
        assert!(app.styles.is_empty());
    }
}
