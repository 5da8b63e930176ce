use serde::{Deserialize, Serialize};

/// A candidate audio file as selected by the user.
///
/// `media_type` is the *declared* type; nothing here sniffs the bytes.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioUpload {
    pub filename: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for AudioUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioUpload")
            .field("filename", &self.filename)
            .field("media_type", &self.media_type)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

impl AudioUpload {
    pub fn new(
        filename: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Convenience constructor for the one media type the form accepts.
    pub fn mp3(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(filename, crate::validate::MP3_MEDIA_TYPE, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_summarizes_bytes() {
        let upload = AudioUpload::mp3("standup.mp3", vec![0u8; 4096]);
        let s = format!("{upload:?}");
        assert!(s.contains("standup.mp3"));
        assert!(s.contains("bytes_len: 4096"));
        assert!(!s.contains("[0,"));
    }
}
