//! Argument parsing: token list -> validated Binding.
//!
//! Tokens arrive already split with shell quoting rules, so a single value may
//! contain spaces. Recognized option forms:
//!
//!   --name=value
//!   --name value
//!
//! Parsing is atomic: any unknown option, repeated option, missing value, or
//! schema validation failure aborts with an `ArgumentError` and no Binding is
//! produced. Parameters the caller did not supply take their schema default.

use std::collections::BTreeMap;
use std::collections::HashMap;

use anyhow::{Result, bail};

use super::descriptor::CommandDescriptor;
use super::schema::{ArgValue, ArgumentError};

/// Validated name -> value map for one invocation. Every parameter of the
/// descriptor is present, either caller-supplied or defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    values: BTreeMap<String, ArgValue>,
}

impl Binding {
    /// Build a binding directly from values. Intended for handler-level tests;
    /// normal construction goes through `parse_arguments`.
    pub fn from_values(values: impl IntoIterator<Item = (String, ArgValue)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Numeric value of a continuous parameter. A missing name or kind
    /// mismatch means the registry and a handler disagree; surfaced as a
    /// handler error rather than a panic.
    pub fn number(&self, name: &str) -> Result<f64> {
        match self.values.get(name) {
            Some(ArgValue::Number(n)) => Ok(*n),
            other => bail!("parameter '{name}' is missing or not numeric (got {other:?})"),
        }
    }

    /// Selected option of a discrete parameter.
    pub fn choice(&self, name: &str) -> Result<&str> {
        match self.values.get(name) {
            Some(ArgValue::Choice(s)) => Ok(s),
            other => bail!("parameter '{name}' is missing or not a choice (got {other:?})"),
        }
    }

    /// Value of a text parameter.
    pub fn text(&self, name: &str) -> Result<&str> {
        match self.values.get(name) {
            Some(ArgValue::Text(s)) => Ok(s),
            other => bail!("parameter '{name}' is missing or not text (got {other:?})"),
        }
    }
}

/// Parse option tokens against a descriptor into a complete Binding.
pub fn parse_arguments(
    descriptor: &CommandDescriptor,
    tokens: &[String],
) -> Result<Binding, ArgumentError> {
    let mut supplied: HashMap<String, String> = HashMap::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let Some(body) = token.strip_prefix("--") else {
            return Err(ArgumentError::UnexpectedToken(token.clone()));
        };

        let (name, raw_value) = match body.split_once('=') {
            Some((name, value)) => {
                i += 1;
                (name.to_string(), value.to_string())
            }
            None => {
                // --name value form: the value is the next token.
                let Some(value) = tokens.get(i + 1) else {
                    return Err(ArgumentError::MissingValue(body.to_string()));
                };
                i += 2;
                (body.to_string(), value.clone())
            }
        };

        if descriptor.parameter(&name).is_none() {
            return Err(ArgumentError::UnknownOption(name));
        }
        if supplied.insert(name.clone(), raw_value).is_some() {
            return Err(ArgumentError::DuplicateOption(name));
        }
    }

    let mut values = BTreeMap::new();
    for parameter in descriptor.parameters() {
        let value = match supplied.remove(parameter.name()) {
            Some(raw) => parameter.validate(&raw)?,
            None => parameter.default_value(),
        };
        values.insert(parameter.name().to_string(), value);
    }

    Ok(Binding { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::schema::Parameter;

    fn descriptor() -> CommandDescriptor {
        CommandDescriptor::new(
            "rotate",
            "Rotates the head of the robot.",
            vec![
                Parameter::continuous("horizontal", "Horizontal angle.", -1.0, 1.0, 0.5),
                Parameter::continuous("vertical", "Vertical angle.", -1.0, 1.0, 0.5),
            ],
        )
    }

    fn toks(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn equals_form() {
        let binding =
            parse_arguments(&descriptor(), &toks(&["--horizontal=-0.25"])).unwrap();
        assert_eq!(binding.number("horizontal").unwrap(), -0.25);
        // Unsupplied parameter took its default.
        assert_eq!(binding.number("vertical").unwrap(), 0.5);
    }

    #[test]
    fn space_separated_form() {
        let binding = parse_arguments(
            &descriptor(),
            &toks(&["--horizontal", "-0.25", "--vertical", "1"]),
        )
        .unwrap();
        assert_eq!(binding.number("horizontal").unwrap(), -0.25);
        assert_eq!(binding.number("vertical").unwrap(), 1.0);
    }

    #[test]
    fn empty_tokens_fill_all_defaults() {
        let binding = parse_arguments(&descriptor(), &[]).unwrap();
        assert_eq!(binding.number("horizontal").unwrap(), 0.5);
        assert_eq!(binding.number("vertical").unwrap(), 0.5);
    }

    #[test]
    fn unknown_option_is_hard_failure() {
        let err = parse_arguments(&descriptor(), &toks(&["--diagonal=0.1"])).unwrap_err();
        assert_eq!(err, ArgumentError::UnknownOption("diagonal".into()));
    }

    #[test]
    fn bare_token_rejected() {
        let err = parse_arguments(&descriptor(), &toks(&["sideways"])).unwrap_err();
        assert_eq!(err, ArgumentError::UnexpectedToken("sideways".into()));
    }

    #[test]
    fn duplicate_option_rejected() {
        let err = parse_arguments(
            &descriptor(),
            &toks(&["--horizontal=0.1", "--horizontal=0.2"]),
        )
        .unwrap_err();
        assert_eq!(err, ArgumentError::DuplicateOption("horizontal".into()));
    }

    #[test]
    fn trailing_option_without_value_rejected() {
        let err = parse_arguments(&descriptor(), &toks(&["--horizontal"])).unwrap_err();
        assert_eq!(err, ArgumentError::MissingValue("horizontal".into()));
    }

    #[test]
    fn validation_failure_is_atomic() {
        // First option is fine, second is out of range: no Binding at all.
        let err = parse_arguments(
            &descriptor(),
            &toks(&["--horizontal=0.1", "--vertical=2"]),
        )
        .unwrap_err();
        assert!(matches!(err, ArgumentError::OutOfRange { .. }));
    }

    #[test]
    fn text_values_keep_spaces() {
        let say = CommandDescriptor::new(
            "say",
            "Makes the robot say something.",
            vec![Parameter::text("text", "The text to say.", "hi")],
        );
        // shell_words::split has already stripped the quotes.
        let binding = parse_arguments(&say, &toks(&["--text=hello world"])).unwrap();
        assert_eq!(binding.text("text").unwrap(), "hello world");
    }

    #[test]
    fn binding_accessors_check_kinds() {
        let binding = parse_arguments(&descriptor(), &[]).unwrap();
        assert!(binding.choice("horizontal").is_err());
        assert!(binding.number("nonexistent").is_err());
    }
}
