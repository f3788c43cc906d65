//! Guest roster - the authoritative list of admitted names
//!
//! Seeded at startup with the founding celebrity list and append-only
//! afterwards. Name uniqueness is enforced by the screening engine before
//! admission, never here.

use crate::invariants::assert_roster_invariants;
use crate::models::GuestEntry;

/// Founding guest list: (name, glyph, tagline, shirt)
const FOUNDERS: &[(&str, &str, &str, &str)] = &[
    ("Cody", "🤖", "Generic Tech Bro", "I ❤️ AI"),
    ("Kitty", "🐱", "The Cat", "Meow-chine Learning"),
    ("Mikala", "👩‍💼", "Nice Blonde", "Chief Vibes Officer"),
    ("Samantha", "👩‍💻", "CEO Assistant", "Her (2013)"),
    ("Shadowfax", "🐴", "White Horse", "Lord of the Prompts"),
    ("Alexa", "🔵", "Blue Circle", "Always Listening"),
    ("Siri", "🍎", "Apple's Finest", "Sorry, I didn't get that"),
    ("Cortana", "💜", "Halo Queen", "RIP 2023"),
    ("Jarvis", "🦾", "Iron Man's Butler", "Sir, this is a Wendy's"),
    ("Claude", "🧡", "Orange Anthropic", "Constitutional AI"),
    ("Gemini", "♊", "Google's Twin", "We have GPT at home"),
    ("Copilot", "✈️", "Microsoft's Co-", "Tab Complete Me"),
];

/// Ordered, insertion-preserving list of admitted guests
#[derive(Debug, Default)]
pub struct Roster {
    entries: Vec<GuestEntry>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build the roster with the founding celebrity entries
    pub fn seeded() -> Self {
        let roster = Self {
            entries: FOUNDERS
                .iter()
                .map(|&(name, glyph, tagline, shirt)| {
                    GuestEntry::founder(name, glyph, tagline, shirt)
                })
                .collect(),
        };
        assert_roster_invariants(&roster);
        tracing::debug!(founders = roster.len(), "Seeded roster");
        roster
    }

    /// Append a guest; returns the new roster length
    pub fn push(&mut self, entry: GuestEntry) -> usize {
        tracing::info!(name = %entry.name, "Guest joined the roster");
        self.entries.push(entry);
        self.entries.len()
    }

    /// All guests in admission order
    pub fn entries(&self) -> &[GuestEntry] {
        &self.entries
    }

    /// Case-insensitive membership check; trims the candidate first
    pub fn is_name_taken(&self, candidate: &str) -> bool {
        let wanted = candidate.trim().to_lowercase();
        self.entries.iter().any(|e| e.name.to_lowercase() == wanted)
    }

    /// Look up a guest by name, case-insensitively
    pub fn find(&self, name: &str) -> Option<&GuestEntry> {
        let wanted = name.trim().to_lowercase();
        self.entries.iter().find(|e| e.name.to_lowercase() == wanted)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
