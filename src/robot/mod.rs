//! Robot subsystem facade (motion, vision, audio).
//!
//! RobotCore bundles the per-subsystem controllers and is handed to the
//! dispatcher at construction. The controllers are in-process simulations:
//! they track the state a real device driver would expose (head orientation,
//! camera on/off, microphone on/off, last utterance) and log transitions at
//! debug level. Transition counters exist so callers can observe whether a
//! state change actually happened.

use std::fmt;

use crate::log_debug;

/// Head orientation on two normalized axes, each in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Orientation {
    /// Centered, looking straight ahead.
    pub const CENTER: Orientation = Orientation {
        horizontal: 0.0,
        vertical: 0.0,
    };
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(h={}, v={})", self.horizontal, self.vertical)
    }
}

/// Head / motor driver.
#[derive(Debug)]
pub struct MotionController {
    orientation: Orientation,
}

impl MotionController {
    pub fn new() -> Self {
        Self {
            orientation: Orientation::CENTER,
        }
    }

    /// Orient the head to the given normalized angles. Values are clamped to
    /// the mechanical range; validated commands never hit the clamp.
    pub fn rotate_head_to(&mut self, horizontal: f64, vertical: f64) {
        self.orientation = Orientation {
            horizontal: horizontal.clamp(-1.0, 1.0),
            vertical: vertical.clamp(-1.0, 1.0),
        };
        log_debug!("motion: head oriented to {}", self.orientation);
    }

    /// Re-center the head.
    pub fn reset(&mut self) {
        self.orientation = Orientation::CENTER;
        log_debug!("motion: reset to center");
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera driver. Starts disabled.
#[derive(Debug, Default)]
pub struct VisionController {
    show_camera: bool,
    transitions: u64,
}

impl VisionController {
    pub fn enable(&mut self) {
        self.show_camera = true;
        self.transitions += 1;
        log_debug!("vision: camera enabled");
    }

    pub fn disable(&mut self) {
        self.show_camera = false;
        self.transitions += 1;
        log_debug!("vision: camera disabled");
    }

    /// Return the camera to its power-on state (off).
    pub fn reset(&mut self) {
        self.show_camera = false;
        log_debug!("vision: reset");
    }

    pub fn show_camera(&self) -> bool {
        self.show_camera
    }

    /// Number of enable/disable calls issued so far.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}

/// Microphone driver. Starts muted.
#[derive(Debug, Default)]
pub struct HearingController {
    listening: bool,
    transitions: u64,
}

impl HearingController {
    pub fn enable(&mut self) {
        self.listening = true;
        self.transitions += 1;
        log_debug!("hearing: microphone enabled");
    }

    pub fn disable(&mut self) {
        self.listening = false;
        self.transitions += 1;
        log_debug!("hearing: microphone disabled");
    }

    pub fn listening(&self) -> bool {
        self.listening
    }

    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}

/// Speech output driver. Remembers the last utterance for diagnostics.
#[derive(Debug, Default)]
pub struct SpeechController {
    last_utterance: Option<String>,
    utterances: u64,
}

impl SpeechController {
    pub fn process(&mut self, text: &str) {
        log_debug!("speech: saying {:?}", text);
        self.last_utterance = Some(text.to_string());
        self.utterances += 1;
    }

    pub fn last_utterance(&self) -> Option<&str> {
        self.last_utterance.as_deref()
    }

    pub fn utterances(&self) -> u64 {
        self.utterances
    }
}

/// The full set of subsystems a command handler may touch.
#[derive(Debug, Default)]
pub struct RobotCore {
    pub motion: MotionController,
    pub vision: VisionController,
    pub hearing: HearingController,
    pub speech: SpeechController,
}

impl RobotCore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_clamps_to_mechanical_range() {
        let mut motion = MotionController::new();
        motion.rotate_head_to(3.0, -2.0);
        assert_eq!(motion.orientation().horizontal, 1.0);
        assert_eq!(motion.orientation().vertical, -1.0);
    }

    #[test]
    fn motion_reset_centers() {
        let mut motion = MotionController::new();
        motion.rotate_head_to(0.5, 0.5);
        motion.reset();
        assert_eq!(motion.orientation(), Orientation::CENTER);
    }

    #[test]
    fn vision_counts_transitions() {
        let mut vision = VisionController::default();
        assert!(!vision.show_camera());
        vision.enable();
        vision.disable();
        assert_eq!(vision.transitions(), 2);
        assert!(!vision.show_camera());
    }

    #[test]
    fn speech_records_last_utterance() {
        let mut speech = SpeechController::default();
        speech.process("hello");
        speech.process("world");
        assert_eq!(speech.last_utterance(), Some("world"));
        assert_eq!(speech.utterances(), 2);
    }
}
