//! HTML renderer: the sample list block injected into API reference pages.

use crate::model::RetrievedSample;
use crate::render::Renderer;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, samples: &[RetrievedSample]) -> String {
        if samples.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        out.push_str("<br/><b>Samples:</b>");
        out.push_str("<ul class=\"sampleList\"><li class=\"sampleList\">");
        for sample in samples {
            out.push_str(&format!("<h5>{}</h5>", sample.title()));
            out.push_str(&format!(
                "<div class=\"block\">{}<br/> <pre class=\"brush: java\">{}</pre></div>",
                sample.description(),
                html_escape(sample.content())
            ));
        }
        out.push_str("</li></ul>");
        out
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
