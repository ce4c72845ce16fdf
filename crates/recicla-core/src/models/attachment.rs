use serde::{Deserialize, Serialize};

/// An uploaded image forwarded to the model alongside the prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    /// MIME type, e.g. `image/png`.
    pub media_type: String,
    pub bytes: Vec<u8>,
}
