//! Application state management
//!
//! `ClubSession` owns everything a running session needs: the roster,
//! the screening engine, the flow machine, the doorman, and the jukebox.
//! State is ephemeral; closing the session is the only teardown.

use tokio::sync::mpsc;
use uuid::Uuid;
use velvet_core::invariants::assert_roster_invariants;
use velvet_core::{wardrobe, DescriptorPolicy, GuestEntry, Roster, ScreeningEngine};
use velvet_core::{Error, Result, ScreeningResult};

use crate::config::AppConfig;
use crate::doorman::{Doorman, Verdict};
use crate::flow::{Flow, Screen};
use crate::jukebox::Jukebox;

/// The candidate the doorman last ruled on (or is ruling on)
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    pub owner: Option<String>,
}

/// Main application state for one club session
pub struct ClubSession {
    roster: Roster,
    engine: ScreeningEngine,
    flow: Flow,
    doorman: Doorman,
    jukebox: Jukebox,
    policy: DescriptorPolicy,
    music_enabled: bool,
    candidate: Option<Candidate>,
    /// Most recent admission, highlighted on the floor
    newest: Option<Uuid>,
}

impl ClubSession {
    /// Build a session plus the receiving end of the doorman's channel
    pub fn new(config: &AppConfig) -> (Self, mpsc::Receiver<Verdict>) {
        let (doorman, verdicts) = Doorman::new(config.screening_delay());
        let session = Self {
            roster: Roster::seeded(),
            engine: ScreeningEngine::new(),
            flow: Flow::new(),
            doorman,
            jukebox: Jukebox::with_default_sink(),
            policy: config.descriptor_policy,
            music_enabled: config.music,
            candidate: None,
            newest: None,
        };
        (session, verdicts)
    }

    /// Leave the landing page for the door; starts the music
    pub fn approach(&mut self) -> bool {
        if !self.flow.approach() {
            return false;
        }
        if self.music_enabled {
            self.jukebox.power_on();
            self.jukebox.set_screen(Screen::Door);
        }
        true
    }

    /// Hand a candidate name to the doorman
    ///
    /// Screens synchronously, then schedules the verdict for delayed
    /// delivery. A second submit while one is in flight supersedes it.
    pub fn submit(&mut self, raw_name: &str, owner: Option<String>) -> Result<()> {
        if !self.flow.can_submit() {
            tracing::debug!("Ignored submit outside the door prompt");
            return Ok(());
        }

        let name = raw_name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let result = self.engine.screen(&self.roster, name)?;
        self.candidate = Some(Candidate {
            name: name.to_string(),
            owner: owner.clone(),
        });
        self.doorman.deliver_later(name.to_string(), owner, result);
        Ok(())
    }

    /// Apply a delivered verdict; stale ones are dropped
    pub fn apply_verdict(&mut self, verdict: Verdict) -> bool {
        if !self.doorman.is_current(verdict.submission) {
            tracing::debug!(submission = verdict.submission, "Dropped stale verdict");
            return false;
        }
        if !self.flow.deliver(verdict.result) {
            return false;
        }
        self.candidate = Some(Candidate {
            name: verdict.candidate,
            owner: verdict.owner,
        });
        true
    }

    /// Walk of shame, or abandoning an approval; clears the candidate
    pub fn try_again(&mut self) -> bool {
        if !self.flow.try_again() {
            return false;
        }
        self.candidate = None;
        self.doorman.invalidate();
        true
    }

    /// Turn the current approval into a roster entry and hit the floor
    ///
    /// Under the `Choose` policy `chosen_glyph` is the guest's pick; under
    /// `Hash` it is ignored.
    pub fn confirm(&mut self, chosen_glyph: Option<&str>) -> Result<bool> {
        if self.flow.screen() != Screen::Door || !self.flow.result().is_approved() {
            tracing::debug!("Ignored confirm without an approval");
            return Ok(false);
        }
        let Some(candidate) = self.candidate.clone() else {
            tracing::debug!("Ignored confirm without a candidate");
            return Ok(false);
        };

        let descriptor = match self.policy {
            DescriptorPolicy::Hash => wardrobe::assign(&candidate.name),
            DescriptorPolicy::Choose => {
                wardrobe::choose(&self.roster, &candidate.name, chosen_glyph.unwrap_or(""))?
            }
        };

        let entry = GuestEntry::new(candidate.name, candidate.owner, descriptor);
        self.newest = Some(entry.id);
        self.roster.push(entry);
        assert_roster_invariants(&self.roster);

        self.flow.enter_floor();
        if self.music_enabled {
            self.jukebox.set_screen(Screen::Floor);
        }
        Ok(true)
    }

    /// Back to the door for another name
    pub fn check_another(&mut self) -> bool {
        if !self.flow.check_another() {
            return false;
        }
        self.newest = None;
        self.candidate = None;
        self.doorman.invalidate();
        if self.music_enabled {
            self.jukebox.set_screen(Screen::Door);
        }
        true
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.jukebox.toggle_mute()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn screen(&self) -> Screen {
        self.flow.screen()
    }

    pub fn result(&self) -> &ScreeningResult {
        self.flow.result()
    }

    pub fn candidate(&self) -> Option<&Candidate> {
        self.candidate.as_ref()
    }

    pub fn policy(&self) -> DescriptorPolicy {
        self.policy
    }

    /// The entry admitted this cycle, for highlighting
    pub fn newest_entry(&self) -> Option<&GuestEntry> {
        let id = self.newest?;
        self.roster.entries().iter().find(|e| e.id == id)
    }

    /// Glyphs still open under the `Choose` policy
    pub fn available_glyphs(&self) -> Vec<&'static str> {
        wardrobe::available(&self.roster)
    }

    /// Guest list as pretty JSON
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.roster.entries())?)
    }
}
