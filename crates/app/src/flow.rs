//! Presentation flow state machine
//!
//! `Landing -> Door -> Floor`, with `Floor -> Door` as the only way back.
//! Every transition is user-initiated except `Pending` resolving to a
//! verdict, which the doorman runtime drives. Transitions that do not
//! apply to the current state are ignored and logged, never escalated.

use velvet_core::ScreeningResult;

/// Which screen the user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Pitch page; the process starts here
    Landing,
    /// Bouncer at the velvet rope
    Door,
    /// Dance floor showing the full roster
    Floor,
}

/// Current screen plus the screening sub-state
#[derive(Debug)]
pub struct Flow {
    screen: Screen,
    result: ScreeningResult,
}

impl Flow {
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
            result: ScreeningResult::Pending,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn result(&self) -> &ScreeningResult {
        &self.result
    }

    /// A new submission is allowed only while the door shows the prompt
    pub fn can_submit(&self) -> bool {
        self.screen == Screen::Door && self.result.is_pending()
    }

    /// `Landing -> Door`
    pub fn approach(&mut self) -> bool {
        if self.screen != Screen::Landing {
            tracing::debug!(screen = ?self.screen, "Ignored approach");
            return false;
        }
        self.screen = Screen::Door;
        true
    }

    /// Resolve `Pending` with the doorman's verdict
    pub fn deliver(&mut self, result: ScreeningResult) -> bool {
        debug_assert!(!result.is_pending(), "Verdict cannot be Pending");
        if !self.can_submit() {
            tracing::debug!(screen = ?self.screen, "Ignored verdict");
            return false;
        }
        self.result = result;
        true
    }

    /// `Rejected -> Pending` (walk of shame) or abandoning an approval
    pub fn try_again(&mut self) -> bool {
        if self.screen != Screen::Door || self.result.is_pending() {
            tracing::debug!(screen = ?self.screen, "Ignored try_again");
            return false;
        }
        self.result = ScreeningResult::Pending;
        true
    }

    /// `Approved -> Floor`; the caller appends to the roster
    pub fn enter_floor(&mut self) -> bool {
        if self.screen != Screen::Door || !self.result.is_approved() {
            tracing::debug!(screen = ?self.screen, "Ignored enter_floor");
            return false;
        }
        self.screen = Screen::Floor;
        true
    }

    /// `Floor -> Door`, resetting the screening sub-state
    pub fn check_another(&mut self) -> bool {
        if self.screen != Screen::Floor {
            tracing::debug!(screen = ?self.screen, "Ignored check_another");
            return false;
        }
        self.screen = Screen::Door;
        self.result = ScreeningResult::Pending;
        true
    }
}

impl Default for Flow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approved() -> ScreeningResult {
        ScreeningResult::Approved {
            line: "fresh".to_string(),
        }
    }

    fn rejected() -> ScreeningResult {
        ScreeningResult::Rejected {
            line: "no".to_string(),
        }
    }

    #[test]
    fn test_happy_path() {
        let mut flow = Flow::new();
        assert_eq!(flow.screen(), Screen::Landing);

        assert!(flow.approach());
        assert_eq!(flow.screen(), Screen::Door);
        assert!(flow.can_submit());

        assert!(flow.deliver(approved()));
        assert!(flow.result().is_approved());

        assert!(flow.enter_floor());
        assert_eq!(flow.screen(), Screen::Floor);

        assert!(flow.check_another());
        assert_eq!(flow.screen(), Screen::Door);
        assert!(flow.result().is_pending());
    }

    #[test]
    fn test_rejection_needs_try_again() {
        let mut flow = Flow::new();
        flow.approach();
        flow.deliver(rejected());

        assert!(!flow.can_submit());
        assert!(!flow.enter_floor());
        assert_eq!(flow.screen(), Screen::Door);

        assert!(flow.try_again());
        assert!(flow.can_submit());
    }

    #[test]
    fn test_approval_can_be_abandoned() {
        let mut flow = Flow::new();
        flow.approach();
        flow.deliver(approved());

        assert!(flow.try_again());
        assert!(flow.result().is_pending());
        assert_eq!(flow.screen(), Screen::Door);
    }

    #[test]
    fn test_invalid_transitions_leave_state_unchanged() {
        let mut flow = Flow::new();

        assert!(!flow.enter_floor());
        assert!(!flow.check_another());
        assert!(!flow.try_again());
        assert!(!flow.deliver(approved()));
        assert_eq!(flow.screen(), Screen::Landing);
        assert!(flow.result().is_pending());

        flow.approach();
        assert!(!flow.approach());
        assert_eq!(flow.screen(), Screen::Door);
    }

    #[test]
    fn test_verdict_only_lands_while_pending() {
        let mut flow = Flow::new();
        flow.approach();
        flow.deliver(rejected());

        assert!(!flow.deliver(approved()));
        assert!(flow.result().is_rejected());
    }
}
