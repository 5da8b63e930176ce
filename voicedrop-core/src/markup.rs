use serde::{Deserialize, Serialize};

/// Fenced code block delimiter.
pub const FENCE: &str = "```";
/// Inline code delimiter.
pub const TICK: char = '`';

/// One parsed unit of markup text, tagged with its rendering kind.
///
/// A parse result is an ordered sequence; concatenating the contents with
/// their original delimiters reconstructs the input (see [`to_markup`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Segment {
    PlainText(String),
    InlineCode(String),
    CodeBlock(String),
}

impl Segment {
    pub fn plain(content: impl Into<String>) -> Self {
        Self::PlainText(content.into())
    }

    pub fn inline_code(content: impl Into<String>) -> Self {
        Self::InlineCode(content.into())
    }

    pub fn code_block(content: impl Into<String>) -> Self {
        Self::CodeBlock(content.into())
    }

    pub fn content(&self) -> &str {
        match self {
            Segment::PlainText(s) | Segment::InlineCode(s) | Segment::CodeBlock(s) => s,
        }
    }
}

/// Parses markup text into an ordered segment sequence.
///
/// The grammar is split-based, not validated: the text is split on the
/// triple-backtick fence, odd chunks become `CodeBlock` segments verbatim,
/// and even chunks are split again on single backticks into alternating
/// `PlainText`/`InlineCode` segments. Empty chunks still produce segments
/// so the sequence reconstructs the input exactly.
///
/// An odd number of fence delimiters makes the trailing chunk fence
/// content. That falls out of the split rule and is tolerated rather than
/// rejected.
pub fn parse(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (i, chunk) in text.split(FENCE).enumerate() {
        if i % 2 == 1 {
            segments.push(Segment::code_block(chunk));
            continue;
        }

        for (j, span) in chunk.split(TICK).enumerate() {
            if j % 2 == 1 {
                segments.push(Segment::inline_code(span));
            } else {
                segments.push(Segment::plain(span));
            }
        }
    }

    segments
}

/// Reconstructs markup text from a segment sequence.
///
/// Inverse of [`parse`] for sequences parsed from well-formed input. Input
/// with an unterminated fence re-emerges terminated, so round-trip identity
/// holds only when every fence was closed.
pub fn to_markup(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::PlainText(s) => out.push_str(s),
            Segment::InlineCode(s) => {
                out.push(TICK);
                out.push_str(s);
                out.push(TICK);
            }
            Segment::CodeBlock(s) => {
                out.push_str(FENCE);
                out.push_str(s);
                out.push_str(FENCE);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_mixed_markup_in_order() {
        let segments = parse("`a` ```b``` `c`");
        assert_eq!(
            segments,
            vec![
                Segment::plain(""),
                Segment::inline_code("a"),
                Segment::plain(" "),
                Segment::code_block("b"),
                Segment::plain(" "),
                Segment::inline_code("c"),
                Segment::plain(""),
            ]
        );
    }

    #[test]
    fn plain_text_is_a_single_segment() {
        assert_eq!(parse("hello world"), vec![Segment::plain("hello world")]);
    }

    #[test]
    fn code_block_content_is_verbatim() {
        let segments = parse("```let x = `y`;\n  indented```");
        assert_eq!(
            segments,
            vec![
                Segment::plain(""),
                // No inner parsing: the single backticks survive untouched.
                Segment::code_block("let x = `y`;\n  indented"),
                Segment::plain(""),
            ]
        );
    }

    #[test]
    fn empty_chunks_are_preserved() {
        let segments = parse("``");
        assert_eq!(
            segments,
            vec![
                Segment::plain(""),
                Segment::inline_code(""),
                Segment::plain(""),
            ]
        );
    }

    #[test]
    fn unterminated_fence_is_trailing_block() {
        let segments = parse("before ```dangling");
        assert_eq!(
            segments,
            vec![Segment::plain("before "), Segment::code_block("dangling")]
        );
    }

    #[test]
    fn parse_is_restartable() {
        let input = "`a` ```b``` tail";
        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn round_trips_well_formed_input() {
        for input in [
            "",
            "hello",
            "`a` ```b``` `c`",
            "header:\n\n```fn main() {}```",
            "``",
            "text `code` more ``` block\nwith lines ``` end",
        ] {
            assert_eq!(to_markup(&parse(input)), input, "input: {input:?}");
        }
    }
}
