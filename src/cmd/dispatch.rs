//! Command registry and dispatcher.
//!
//! The registry pairs every command descriptor with its handler in one entry,
//! so the defaults, the schema, and the behavior cannot drift apart. The
//! dispatcher owns the registry and the robot facade (injected at
//! construction) and exposes the single entry point `execute(raw) -> Outcome`.
//!
//! Every parse or lookup failure is converted to a `(false, message)` outcome
//! at this boundary; nothing propagates to the caller as an error. Handler
//! failures (a subsystem refusing a request, a registry/handler mismatch) are
//! surfaced the same way with a "Command failed:" prefix.

use anyhow::Result;
use serde::Serialize;

use super::builtin::build_registry;
use super::descriptor::CommandDescriptor;
use super::parse::{Binding, parse_arguments};
use crate::log_debug;
use crate::robot::RobotCore;

/// Result of one dispatch: did it work, and what to tell the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Built-in behavior a registry entry routes to. Matched exhaustively by the
/// dispatcher, which gives handlers access to both the facade and (for help)
/// the registry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Reset,
    Rotate,
    Toggle,
    Say,
    Help,
}

/// One registered command: descriptor plus handler, built once at startup.
#[derive(Debug, Clone)]
pub struct CommandEntry {
    pub descriptor: CommandDescriptor,
    pub handler: Handler,
}

/// All registered commands, in registration order (help listings keep it).
/// Lookups are linear; the set is small and fixed.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    pub fn new(entries: Vec<CommandEntry>) -> Self {
        Self { entries }
    }

    /// Case-sensitive exact lookup.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.descriptor.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.descriptor.name()).collect()
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }
}

/// Synchronous, single-command-at-a-time interpreter. `execute` takes `&mut
/// self`, so the check-then-act inside `toggle` is race-free by construction;
/// a concurrent surface would need to serialize access to the facade.
pub struct Dispatcher {
    registry: Registry,
    robot: RobotCore,
}

impl Dispatcher {
    /// Build a dispatcher over the built-in command set, driving the given
    /// robot facade.
    pub fn new(robot: RobotCore) -> Self {
        Self {
            registry: build_registry(),
            robot,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn robot(&self) -> &RobotCore {
        &self.robot
    }

    /// Parse, validate, and run one raw command line.
    pub fn execute(&mut self, raw: &str) -> Outcome {
        let tokens = match shell_words::split(raw) {
            Ok(tokens) => tokens,
            Err(e) => {
                log_debug!("tokenization failed for {raw:?}: {e}");
                return Outcome::failure("Invalid arguments.");
            }
        };
        if tokens.is_empty() {
            return Outcome::failure("No command found.");
        }

        let name = &tokens[0];
        let (handler, binding) = {
            let Some(entry) = self.registry.get(name) else {
                return Outcome::failure(
                    "No such command found. Please type only a valid command and \
                     corresponding arguments. Nothing else.",
                );
            };
            match parse_arguments(&entry.descriptor, &tokens[1..]) {
                Ok(binding) => (entry.handler, binding),
                Err(e) => {
                    log_debug!("argument parse failed for '{name}': {e}");
                    return Outcome::failure("Invalid arguments.");
                }
            }
        };

        log_debug!("executing command '{name}' with {binding:?}");
        match self.invoke(handler, &binding) {
            Ok(message) => Outcome::success(message),
            Err(e) => {
                crate::log_error!("command '{name}' failed: {e}");
                Outcome::failure(format!("Command failed: {e}"))
            }
        }
    }

    /// Run one handler against a validated binding.
    pub(crate) fn invoke(&mut self, handler: Handler, binding: &Binding) -> Result<String> {
        match handler {
            Handler::Reset => {
                let aspect = binding.choice("aspect")?;
                match aspect {
                    "motors" => self.robot.motion.reset(),
                    "camera" => self.robot.vision.reset(),
                    _ => {
                        self.robot.motion.reset();
                        self.robot.vision.reset();
                    }
                }
                Ok(format!("Successfully reset {aspect}!"))
            }
            Handler::Rotate => {
                let horizontal = binding.number("horizontal")?;
                let vertical = binding.number("vertical")?;
                self.robot.motion.rotate_head_to(horizontal, vertical);
                Ok(format!(
                    "Successfully rotated head to {horizontal} horizontal and {vertical} vertical!"
                ))
            }
            Handler::Toggle => {
                let obj = binding.choice("obj")?;
                let state = binding.choice("state")?;
                // Idempotent: only touch the device when the state differs.
                match obj {
                    "camera" => {
                        if state == "on" && !self.robot.vision.show_camera() {
                            self.robot.vision.enable();
                        } else if state == "off" && self.robot.vision.show_camera() {
                            self.robot.vision.disable();
                        }
                    }
                    _ => {
                        if state == "on" && !self.robot.hearing.listening() {
                            self.robot.hearing.enable();
                        } else if state == "off" && self.robot.hearing.listening() {
                            self.robot.hearing.disable();
                        }
                    }
                }
                Ok(format!("Successfully toggled {obj} {state}!"))
            }
            Handler::Say => {
                let text = binding.text("text")?;
                self.robot.speech.process(text);
                Ok("Successfully said!".to_string())
            }
            Handler::Help => {
                let command = binding.choice("command")?;
                if command == "all" {
                    return Ok(format!(
                        "Available commands are {}.\nTo get help about a certain command, \
                         type 'help --command=command_name'.",
                        self.registry.names().join(", ")
                    ));
                }
                match self.registry.get(command) {
                    Some(entry) => Ok(entry.descriptor.render_help()),
                    // Unreachable through dispatch: the schema's option set is
                    // derived from the registry, so every validated choice
                    // except "all" is a registered name.
                    None => Ok("No such command found.".to_string()),
                }
            }
        }
    }
}
