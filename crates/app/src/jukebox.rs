//! Jukebox - ambient club music bookkeeping
//!
//! Tracks what the sound system should be doing: playback starts on the
//! first user interaction, volume follows the current screen through a
//! stepped fade, and mute is a toggle. Actual playback sits behind a
//! sink trait; the default sink only logs. Sink failures are swallowed,
//! the door never depends on the speakers.

use std::io;

use crate::flow::Screen;

const FADE_STEPS: usize = 20;

/// Where playback commands go
pub trait AudioSink: Send {
    fn play(&mut self) -> io::Result<()>;
    fn set_volume(&mut self, volume: f32) -> io::Result<()>;
    fn set_muted(&mut self, muted: bool) -> io::Result<()>;
}

/// Default sink: logs what a real player would be told
#[derive(Debug, Default)]
pub struct TraceSink;

impl AudioSink for TraceSink {
    fn play(&mut self) -> io::Result<()> {
        tracing::debug!("Jukebox: play");
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> io::Result<()> {
        tracing::trace!(volume, "Jukebox: volume");
        Ok(())
    }

    fn set_muted(&mut self, muted: bool) -> io::Result<()> {
        tracing::debug!(muted, "Jukebox: mute");
        Ok(())
    }
}

pub struct Jukebox {
    sink: Box<dyn AudioSink>,
    started: bool,
    muted: bool,
    volume: f32,
}

impl Jukebox {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink,
            started: false,
            muted: false,
            volume: 0.0,
        }
    }

    pub fn with_default_sink() -> Self {
        Self::new(Box::<TraceSink>::default())
    }

    /// Volume the floor plan calls for on each screen
    pub fn target_volume(screen: Screen) -> f32 {
        match screen {
            Screen::Landing => 0.0,
            Screen::Door => 0.15,
            Screen::Floor => 0.5,
        }
    }

    /// First user interaction starts playback; later calls are no-ops
    pub fn power_on(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        if let Err(e) = self.sink.play() {
            tracing::debug!(error = %e, "Jukebox failed to start; carrying on");
        }
    }

    /// Fade the volume toward the target for this screen
    ///
    /// Pacing between steps is the sink's concern; the jukebox only
    /// issues the ramp.
    pub fn set_screen(&mut self, screen: Screen) {
        if !self.started || self.muted {
            return;
        }

        let target = Self::target_volume(screen);
        for step in fade_steps(self.volume, target) {
            if let Err(e) = self.sink.set_volume(step) {
                tracing::debug!(error = %e, "Jukebox volume change failed; carrying on");
                break;
            }
        }
        self.volume = target;
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if let Err(e) = self.sink.set_muted(self.muted) {
            tracing::debug!(error = %e, "Jukebox mute toggle failed; carrying on");
        }
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

/// Evenly spaced ramp from `current` to `target`, ending exactly on target
fn fade_steps(current: f32, target: f32) -> Vec<f32> {
    let step = (target - current) / FADE_STEPS as f32;
    (1..=FADE_STEPS)
        .map(|i| {
            if i == FADE_STEPS {
                target
            } else {
                (current + step * i as f32).clamp(0.0, 1.0)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recording {
        played: bool,
        volumes: Vec<f32>,
        muted: Vec<bool>,
        fail: bool,
    }

    #[derive(Clone, Default)]
    struct RecordingSink(Arc<Mutex<Recording>>);

    impl AudioSink for RecordingSink {
        fn play(&mut self) -> io::Result<()> {
            let mut rec = self.0.lock().unwrap();
            if rec.fail {
                return Err(io::Error::other("speaker unplugged"));
            }
            rec.played = true;
            Ok(())
        }

        fn set_volume(&mut self, volume: f32) -> io::Result<()> {
            let mut rec = self.0.lock().unwrap();
            if rec.fail {
                return Err(io::Error::other("speaker unplugged"));
            }
            rec.volumes.push(volume);
            Ok(())
        }

        fn set_muted(&mut self, muted: bool) -> io::Result<()> {
            let mut rec = self.0.lock().unwrap();
            if rec.fail {
                return Err(io::Error::other("speaker unplugged"));
            }
            rec.muted.push(muted);
            Ok(())
        }
    }

    #[test]
    fn test_target_volumes_per_screen() {
        assert_eq!(Jukebox::target_volume(Screen::Landing), 0.0);
        assert_eq!(Jukebox::target_volume(Screen::Door), 0.15);
        assert_eq!(Jukebox::target_volume(Screen::Floor), 0.5);
    }

    #[test]
    fn test_fade_ends_exactly_on_target() {
        let steps = fade_steps(0.0, 0.5);
        assert_eq!(steps.len(), FADE_STEPS);
        assert_eq!(*steps.last().unwrap(), 0.5);
        assert!(steps.windows(2).all(|w| w[0] <= w[1]));

        let down = fade_steps(0.5, 0.15);
        assert_eq!(*down.last().unwrap(), 0.15);
        assert!(down.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_power_on_is_idempotent() {
        let sink = RecordingSink::default();
        let mut jukebox = Jukebox::new(Box::new(sink.clone()));

        jukebox.power_on();
        jukebox.power_on();
        assert!(sink.0.lock().unwrap().played);
    }

    #[test]
    fn test_screen_change_ramps_the_sink() {
        let sink = RecordingSink::default();
        let mut jukebox = Jukebox::new(Box::new(sink.clone()));

        jukebox.power_on();
        jukebox.set_screen(Screen::Floor);

        assert_eq!(jukebox.volume(), 0.5);
        let volumes = sink.0.lock().unwrap().volumes.clone();
        assert_eq!(volumes.len(), FADE_STEPS);
        assert_eq!(*volumes.last().unwrap(), 0.5);
    }

    #[test]
    fn test_no_ramp_before_power_on_or_while_muted() {
        let sink = RecordingSink::default();
        let mut jukebox = Jukebox::new(Box::new(sink.clone()));

        jukebox.set_screen(Screen::Floor);
        assert!(sink.0.lock().unwrap().volumes.is_empty());

        jukebox.power_on();
        jukebox.toggle_mute();
        jukebox.set_screen(Screen::Floor);
        assert!(sink.0.lock().unwrap().volumes.is_empty());
    }

    #[test]
    fn test_mute_toggles_round_trip() {
        let sink = RecordingSink::default();
        let mut jukebox = Jukebox::new(Box::new(sink.clone()));

        assert!(jukebox.toggle_mute());
        assert!(!jukebox.toggle_mute());
        assert_eq!(sink.0.lock().unwrap().muted, vec![true, false]);
    }

    #[test]
    fn test_sink_failures_are_swallowed() {
        let sink = RecordingSink::default();
        sink.0.lock().unwrap().fail = true;
        let mut jukebox = Jukebox::new(Box::new(sink));

        jukebox.power_on();
        jukebox.set_screen(Screen::Floor);
        jukebox.toggle_mute();

        // State still advances; the broken speaker is someone else's problem
        assert_eq!(jukebox.volume(), 0.5);
        assert!(jukebox.is_muted());
    }
}
