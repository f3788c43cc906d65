//! Wardrobe - descriptor pools and assignment for admitted guests
//!
//! Two policies: a stable hash of the guest name (the default), or an
//! explicit pick from whatever nobody on the floor is wearing yet.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Descriptor;
use crate::roster::Roster;

pub const GLYPHS: &[&str] = &[
    "🤖", "👾", "🎭", "🦊", "🐺", "🦁", "🐲", "🦄", "🌟", "⚡", "🔮", "💎", "🎪", "🎨", "🚀",
];

pub const SHIRTS: &[&str] = &[
    "AI Native",
    "Prompt Lord",
    "Token Wizard",
    "Neural Ninja",
    "GPT Wrapper",
    "The Original",
    "1 of 1",
    "IYKYK",
    "Built Different",
];

const NEW_KID_TAGLINE: &str = "The New Kid";

/// How a new guest gets their outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorPolicy {
    /// Stable hash of the name picks glyph and shirt
    #[default]
    Hash,
    /// Guest picks a glyph no current entry is wearing
    Choose,
}

/// Stable sum of character code points; collisions across different names
/// are allowed and expected
fn name_hash(name: &str) -> usize {
    name.chars().map(|c| c as usize).sum()
}

/// Assign a descriptor by hashing the guest name (`DescriptorPolicy::Hash`)
///
/// The same name always gets the same outfit.
pub fn assign(name: &str) -> Descriptor {
    let hash = name_hash(name);
    Descriptor::new(
        GLYPHS[hash % GLYPHS.len()],
        SHIRTS[hash % SHIRTS.len()],
        NEW_KID_TAGLINE,
    )
}

/// Glyphs no current roster entry is wearing (`DescriptorPolicy::Choose`)
pub fn available(roster: &Roster) -> Vec<&'static str> {
    GLYPHS
        .iter()
        .filter(|glyph| {
            !roster
                .entries()
                .iter()
                .any(|e| e.descriptor.glyph == **glyph)
        })
        .copied()
        .collect()
}

/// Build a descriptor around an explicitly chosen glyph
/// (`DescriptorPolicy::Choose`)
///
/// Refuses when every glyph is taken. A chosen glyph that is no longer
/// open falls back to the first open one, so a stale pick can never put
/// a duplicate glyph on the floor.
pub fn choose(roster: &Roster, name: &str, glyph: &str) -> Result<Descriptor> {
    let open = available(roster);
    if open.is_empty() {
        return Err(Error::NoDescriptorsLeft);
    }

    let glyph = open
        .iter()
        .find(|open_glyph| **open_glyph == glyph)
        .copied()
        .unwrap_or(open[0]);

    Ok(Descriptor::new(
        glyph,
        SHIRTS[name_hash(name) % SHIRTS.len()],
        NEW_KID_TAGLINE,
    ))
}
