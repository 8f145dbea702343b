use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroize;

use crate::shared::constants::SALT_PLACEHOLDER;

/// Raw salt text as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaltSpec(String);

impl SaltSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Resolve against the default placeholder text.
    pub fn resolve(&self) -> Option<Salt> {
        SaltResolver::default().resolve(&self.0)
    }
}

/// How the salt text was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaltEncoding {
    Base64,
    Utf8,
}

/// Resolved salt bytes
#[derive(Clone, PartialEq, Eq)]
pub struct Salt {
    bytes: Vec<u8>,
    encoding: SaltEncoding,
}

impl Salt {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn encoding(&self) -> SaltEncoding {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Salt bytes stay out of logs and debug output.
impl std::fmt::Debug for Salt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Salt")
            .field("len", &self.bytes.len())
            .field("encoding", &self.encoding)
            .finish()
    }
}

impl Drop for Salt {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Decodes user-supplied salt text
#[derive(Debug, Clone)]
pub struct SaltResolver {
    placeholder: String,
}

impl Default for SaltResolver {
    fn default() -> Self {
        Self::new(SALT_PLACEHOLDER)
    }
}

impl SaltResolver {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    /// Resolve salt text into bytes.
    ///
    /// Blank text and the placeholder mean "no salt". Valid Base64 is decoded,
    /// anything else is taken as its UTF-8 bytes. Never fails.
    pub fn resolve(&self, text: &str) -> Option<Salt> {
        if text.trim().is_empty() || text == self.placeholder {
            return None;
        }

        let salt = match STANDARD.decode(text) {
            Ok(bytes) => Salt {
                bytes,
                encoding: SaltEncoding::Base64,
            },
            Err(_) => Salt {
                bytes: text.as_bytes().to_vec(),
                encoding: SaltEncoding::Utf8,
            },
        };
        log::debug!("Resolved salt: {} bytes ({:?})", salt.len(), salt.encoding);
        Some(salt)
    }
}
