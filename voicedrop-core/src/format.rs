/// Builds the message markup from a transcript and optional metadata.
///
/// - No title, no speaker: the transcript passes through unchanged.
/// - Title only: `` `title`: `` header, blank line, fenced transcript.
/// - Speaker present: `` `title` from speaker: `` header (the title slot is
///   rendered even when absent, as an empty backtick pair), blank line,
///   fenced transcript.
///
/// Backticks inside the transcript or title are not escaped; a transcript
/// that itself contains a triple backtick corrupts the markup structure.
pub fn format_message(transcript: &str, title: Option<&str>, speaker: Option<&str>) -> String {
    let header = match (title, speaker) {
        (None, None) => return transcript.to_string(),
        (title, Some(speaker)) => format!("`{}` from {}:", title.unwrap_or_default(), speaker),
        (Some(title), None) => format!("`{title}`:"),
    };

    format!("{header}\n\n```{transcript}```")
}
