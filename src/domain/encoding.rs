use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use super::Domain;
use crate::error::Result;

impl Domain {
    /// UTF-8 bytes of the assembled URL string.
    pub fn as_encoded_bytes(&self) -> Result<Vec<u8>> {
        let url = self.perform()?;
        Ok(url.as_str().as_bytes().to_vec())
    }

    /// Standard (padded) base64 of [`Domain::as_encoded_bytes`].
    pub fn to_base64(&self) -> Result<String> {
        Ok(BASE64.encode(self.as_encoded_bytes()?))
    }
}
