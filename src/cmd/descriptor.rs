//! Command descriptors and help rendering.

use std::fmt;

use super::schema::Parameter;

/// Immutable schema for one command: name, description, and its parameters in
/// display order. Invocation order of options does not matter; the order here
/// drives the help text and the example-usage line.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    name: String,
    description: String,
    parameters: Vec<Parameter>,
}

impl CommandDescriptor {
    pub fn new(name: &str, description: &str, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// The canonical interactive help text: name, description, enumerated
    /// parameter list, and one example-usage line built from the defaults.
    /// The example line is guaranteed to parse back through the argument
    /// parser (text defaults are shell-quoted).
    pub fn render_help(&self) -> String {
        let mut out = format!(
            "Command: {}\nDescription: {}\nParameters:\n",
            self.name, self.description
        );
        for (i, parameter) in self.parameters.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, parameter));
        }
        out.push_str(&format!("Example usage: {}", self.name));
        for parameter in &self.parameters {
            out.push(' ');
            out.push_str(&parameter.example_token());
        }
        out
    }
}

impl fmt::Display for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_help())
    }
}
