//! Markdown renderer.

use crate::model::RetrievedSample;
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, samples: &[RetrievedSample]) -> String {
        let mut output = String::new();
        for (i, sample) in samples.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&format!("### {}\n\n", sample.title()));
            output.push_str(sample.description());
            output.push_str("\n\n```java\n");
            output.push_str(sample.content());
            output.push_str("\n```\n");
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sample;

    #[test]
    fn renders_heading_description_and_fence() {
        let out = MarkdownRenderer.render(&[sample("A", "Upload", "x();\ny();")]);
        assert_eq!(
            out,
            "### Upload\n\nSome description.\n\n```java\nx();\ny();\n```\n"
        );
    }

    #[test]
    fn samples_separated_by_blank_line() {
        let out = MarkdownRenderer.render(&[sample("A", "One", "a"), sample("B", "Two", "b")]);
        assert!(out.contains("```\n\n### Two"));
    }

    #[test]
    fn empty_list() {
        assert_eq!(MarkdownRenderer.render(&[]), "");
    }
}
