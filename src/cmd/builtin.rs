//! Built-in command set and registry construction.
//!
//! One function per command keeps each schema next to its defaults. The help
//! command's option set is derived from the names already registered, so the
//! schema and the registry cannot drift out of sync.

use super::descriptor::CommandDescriptor;
use super::dispatch::{CommandEntry, Handler, Registry};
use super::schema::Parameter;

fn reset_entry() -> CommandEntry {
    CommandEntry {
        descriptor: CommandDescriptor::new(
            "reset",
            "Resets different aspects or functionalities of the robot.",
            vec![Parameter::discrete(
                "aspect",
                "The aspect to reset.",
                &["all", "motors", "camera"],
                "all",
            )],
        ),
        handler: Handler::Reset,
    }
}

fn rotate_entry() -> CommandEntry {
    CommandEntry {
        descriptor: CommandDescriptor::new(
            "rotate",
            "Rotates the head of the robot.",
            vec![
                Parameter::continuous(
                    "horizontal",
                    "Horizontal angle to rotate to. Ranges from -1 (right) to 1 (left).",
                    -1.0,
                    1.0,
                    0.5,
                ),
                Parameter::continuous(
                    "vertical",
                    "Vertical angle to rotate to. Ranges from -1 (up) to 1 (down).",
                    -1.0,
                    1.0,
                    0.5,
                ),
            ],
        ),
        handler: Handler::Rotate,
    }
}

fn toggle_entry() -> CommandEntry {
    CommandEntry {
        descriptor: CommandDescriptor::new(
            "toggle",
            "Changes state of a certain aspect of the robot. Toggles functionalities on or off.",
            vec![
                Parameter::discrete(
                    "obj",
                    "The object to change the state of.",
                    &["camera", "microphone"],
                    "camera",
                ),
                Parameter::discrete("state", "The state to change to.", &["on", "off"], "on"),
            ],
        ),
        handler: Handler::Toggle,
    }
}

fn say_entry() -> CommandEntry {
    CommandEntry {
        descriptor: CommandDescriptor::new(
            "say",
            "Makes the robot say something.",
            vec![Parameter::text(
                "text",
                "The text to say.",
                "The text that the agent will say",
            )],
        ),
        handler: Handler::Say,
    }
}

fn help_entry(options: &[String]) -> CommandEntry {
    let options: Vec<&str> = options.iter().map(String::as_str).collect();
    CommandEntry {
        descriptor: CommandDescriptor::new(
            "help",
            "Gives information about a certain command and explains how to use it.",
            vec![Parameter::discrete(
                "command",
                "The command to get help about.",
                &options,
                "all",
            )],
        ),
        handler: Handler::Help,
    }
}

/// Build the full built-in registry, in help-listing order.
pub fn build_registry() -> Registry {
    let mut entries = vec![reset_entry(), rotate_entry(), toggle_entry(), say_entry()];

    let mut help_options: Vec<String> = vec!["all".to_string()];
    help_options.extend(entries.iter().map(|e| e.descriptor.name().to_string()));
    help_options.push("help".to_string());
    entries.push(help_entry(&help_options));

    Registry::new(entries)
}
