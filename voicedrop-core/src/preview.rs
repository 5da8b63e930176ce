use crate::markup::Segment;
use serde::{Deserialize, Serialize};

/// One renderable unit of the live preview.
///
/// The UI layer decides the actual styling; these variants only carry the
/// distinctions it needs: `Text` is an unstyled run, `Mono` a monospace
/// run, `Pre` a preformatted block whose whitespace must survive verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", content = "text", rename_all = "snake_case")]
pub enum PreviewNode {
    Text(String),
    Mono(String),
    Pre(String),
}

impl PreviewNode {
    pub fn text(&self) -> &str {
        match self {
            PreviewNode::Text(s) | PreviewNode::Mono(s) | PreviewNode::Pre(s) => s,
        }
    }

    pub fn monospace(&self) -> bool {
        matches!(self, PreviewNode::Mono(_) | PreviewNode::Pre(_))
    }

    pub fn preserves_whitespace(&self) -> bool {
        matches!(self, PreviewNode::Pre(_))
    }
}

/// Maps parsed segments onto preview nodes, one to one and in order.
///
/// Never fails; an empty segment sequence renders nothing.
pub fn render(segments: &[Segment]) -> Vec<PreviewNode> {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::PlainText(s) => PreviewNode::Text(s.clone()),
            Segment::InlineCode(s) => PreviewNode::Mono(s.clone()),
            Segment::CodeBlock(s) => PreviewNode::Pre(s.clone()),
        })
        .collect()
}
