//! Screening engine - the bouncer at the door
//!
//! Checks a candidate name against the roster and picks a themed response
//! line. Never mutates the roster; admission happens separately, after the
//! user explicitly confirms, so a candidate can be approved and still walk
//! away.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::roster::Roster;

pub const REJECTION_LINES: &[&str] = &[
    "HAHAHAHA! You serious right now? 😂",
    "*checks clipboard* Yeah... that's gonna be a no from me, dawg.",
    "Bruh. BRUH. That name's been taken since like... forever.",
    "*laughs in bouncer* Nice try. NEXT!",
    "Oh honey... no. Just no. 💅",
    "*slow clap* Wow. So original. Much innovation. Very taken.",
    "I've seen that name 47 times TODAY. Get outta here!",
];

pub const APPROVAL_LINES: &[&str] = &[
    "Hmm... *checks list twice* ...Actually, that's fresh. Respect.",
    "Well well well... looks like we got a creative one here!",
    "Not bad, not bad at all. Haven't heard that one before.",
    "*nods approvingly* Now THAT'S what I call innovation.",
];

/// What the bouncer said about a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreeningResult {
    /// No verdict yet
    Pending,
    Rejected { line: String },
    Approved { line: String },
}

impl ScreeningResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The bouncer's line, if a verdict is in
    pub fn line(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Rejected { line } | Self::Approved { line } => Some(line),
        }
    }
}

/// Decides whether a candidate name may join the roster
pub struct ScreeningEngine {
    rng: StdRng,
}

impl ScreeningEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic engine for tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Screen a candidate against the roster
    ///
    /// `Rejected` iff the trimmed name is already on the roster, `Approved`
    /// otherwise. Callers guard against empty input at the prompt; the
    /// engine still refuses it.
    pub fn screen(&mut self, roster: &Roster, candidate: &str) -> Result<ScreeningResult> {
        let name = candidate.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let result = if roster.is_name_taken(name) {
            ScreeningResult::Rejected {
                line: self.pick(REJECTION_LINES),
            }
        } else {
            ScreeningResult::Approved {
                line: self.pick(APPROVAL_LINES),
            }
        };

        tracing::debug!(
            candidate = name,
            approved = result.is_approved(),
            "Screened candidate"
        );
        Ok(result)
    }

    fn pick(&mut self, pool: &[&str]) -> String {
        // Pools are non-empty constants
        pool.choose(&mut self.rng).unwrap().to_string()
    }
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Descriptor, GuestEntry};

    #[test]
    fn test_taken_name_rejected() {
        let roster = Roster::seeded();
        let mut engine = ScreeningEngine::seeded(7);

        let result = engine.screen(&roster, "Jarvis").unwrap();
        assert!(result.is_rejected());
        assert!(REJECTION_LINES.contains(&result.line().unwrap()));
    }

    #[test]
    fn test_fresh_name_approved() {
        let roster = Roster::seeded();
        let mut engine = ScreeningEngine::seeded(7);

        let result = engine.screen(&roster, "Athena").unwrap();
        assert!(result.is_approved());
        assert!(APPROVAL_LINES.contains(&result.line().unwrap()));
    }

    #[test]
    fn test_screening_ignores_case_and_whitespace() {
        let roster = Roster::seeded();
        let mut engine = ScreeningEngine::seeded(7);

        assert!(engine.screen(&roster, "  JARVIS ").unwrap().is_rejected());
        assert!(engine.screen(&roster, "claude").unwrap().is_rejected());
    }

    #[test]
    fn test_rescreening_taken_name_rejects_every_time() {
        let roster = Roster::seeded();
        let mut engine = ScreeningEngine::new();

        for _ in 0..2 {
            assert!(engine.screen(&roster, "Siri").unwrap().is_rejected());
        }
    }

    #[test]
    fn test_screening_never_mutates_roster() {
        let mut roster = Roster::seeded();
        roster.push(GuestEntry::new(
            "Athena".to_string(),
            None,
            Descriptor::new("🌟", "AI Native", "The New Kid"),
        ));
        let before = roster.len();
        let mut engine = ScreeningEngine::new();

        engine.screen(&roster, "Athena").unwrap();
        engine.screen(&roster, "Nova").unwrap();
        assert_eq!(roster.len(), before);
    }

    #[test]
    fn test_empty_name_refused() {
        let roster = Roster::seeded();
        let mut engine = ScreeningEngine::new();

        assert!(matches!(
            engine.screen(&roster, "   "),
            Err(Error::EmptyName)
        ));
    }

    #[test]
    fn test_seeded_engine_is_deterministic() {
        let roster = Roster::seeded();

        let line_a = ScreeningEngine::seeded(42)
            .screen(&roster, "Jarvis")
            .unwrap();
        let line_b = ScreeningEngine::seeded(42)
            .screen(&roster, "Jarvis")
            .unwrap();
        assert_eq!(line_a, line_b);
    }
}
