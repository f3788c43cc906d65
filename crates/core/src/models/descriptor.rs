//! Visual descriptor model

use serde::{Deserialize, Serialize};

/// Visual identity worn by a guest on the floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Emoji shown on the guest's card
    pub glyph: String,
    /// Shirt slogan
    pub shirt: String,
    /// One-line bio under the card
    pub tagline: String,
}

impl Descriptor {
    pub fn new(glyph: &str, shirt: &str, tagline: &str) -> Self {
        Self {
            glyph: glyph.to_string(),
            shirt: shirt.to_string(),
            tagline: tagline.to_string(),
        }
    }
}
