//! Parameter schemas and validation.
//!
//! A `Parameter` describes one named option of a command: its kind
//! (continuous range, discrete option set, or free text), a human description,
//! and a typed default. `validate` turns a raw string into an `ArgValue` or a
//! precise `ArgumentError`; the dispatcher later collapses those errors into
//! one generic user-facing message.

use std::fmt;

use thiserror::Error;

/// Everything that can go wrong while parsing one command's arguments.
///
/// Token-shape failures come from the argument parser, value failures from
/// `Parameter::validate`. All of them abort parsing atomically.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("token '{0}' is not an option (expected --name=value or --name value)")]
    UnexpectedToken(String),

    #[error("unknown option --{0}")]
    UnknownOption(String),

    #[error("option --{0} given more than once")]
    DuplicateOption(String),

    #[error("option --{0} is missing a value")]
    MissingValue(String),

    #[error("--{name}: '{raw}' is not a number")]
    InvalidNumber { name: String, raw: String },

    #[error("--{name}: {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("--{name}: '{raw}' is not one of {options:?}")]
    InvalidChoice {
        name: String,
        raw: String,
        options: Vec<String>,
    },
}

/// A validated argument value, matching the declaring parameter's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Number(f64),
    Choice(String),
    Text(String),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Number(n) => write!(f, "{n}"),
            ArgValue::Choice(s) | ArgValue::Text(s) => f.write_str(s),
        }
    }
}

/// Kind-specific constraints and default.
#[derive(Debug, Clone)]
pub enum ParamKind {
    /// Real number in an inclusive [min, max] range.
    Continuous { min: f64, max: f64, default: f64 },
    /// One of a fixed, case-sensitive option set.
    Discrete {
        options: Vec<String>,
        default: String,
    },
    /// Free text, any string accepted.
    Text { default: String },
}

/// Schema for one named option of a command.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    description: String,
    kind: ParamKind,
}

impl Parameter {
    /// Numeric parameter with an inclusive range.
    ///
    /// The default is assumed to lie inside [min, max]; constructors are only
    /// called with literals at registry build time, so this is not re-checked
    /// at runtime.
    pub fn continuous(
        name: &str,
        description: &str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: ParamKind::Continuous { min, max, default },
        }
    }

    /// Parameter restricted to a fixed option set. The default is assumed to
    /// be one of the options (same construction-time assumption as above).
    pub fn discrete(name: &str, description: &str, options: &[&str], default: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: ParamKind::Discrete {
                options: options.iter().map(|o| o.to_string()).collect(),
                default: default.to_string(),
            },
        }
    }

    /// Free-text parameter.
    pub fn text(name: &str, description: &str, default: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: ParamKind::Text {
                default: default.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &ParamKind {
        &self.kind
    }

    /// Typed default, used to fill parameters the caller did not supply.
    pub fn default_value(&self) -> ArgValue {
        match &self.kind {
            ParamKind::Continuous { default, .. } => ArgValue::Number(*default),
            ParamKind::Discrete { default, .. } => ArgValue::Choice(default.clone()),
            ParamKind::Text { default } => ArgValue::Text(default.clone()),
        }
    }

    /// Validate a raw string against this schema.
    pub fn validate(&self, raw: &str) -> Result<ArgValue, ArgumentError> {
        match &self.kind {
            ParamKind::Continuous { min, max, .. } => {
                let value: f64 = raw.parse().map_err(|_| ArgumentError::InvalidNumber {
                    name: self.name.clone(),
                    raw: raw.to_string(),
                })?;
                // parse::<f64> accepts "inf" and "nan"; neither belongs in a range.
                if !value.is_finite() {
                    return Err(ArgumentError::InvalidNumber {
                        name: self.name.clone(),
                        raw: raw.to_string(),
                    });
                }
                if value < *min || value > *max {
                    return Err(ArgumentError::OutOfRange {
                        name: self.name.clone(),
                        value,
                        min: *min,
                        max: *max,
                    });
                }
                Ok(ArgValue::Number(value))
            }
            ParamKind::Discrete { options, .. } => {
                if options.iter().any(|o| o == raw) {
                    Ok(ArgValue::Choice(raw.to_string()))
                } else {
                    Err(ArgumentError::InvalidChoice {
                        name: self.name.clone(),
                        raw: raw.to_string(),
                        options: options.clone(),
                    })
                }
            }
            ParamKind::Text { .. } => Ok(ArgValue::Text(raw.to_string())),
        }
    }

    /// Render the default the way it appears in an example-usage line.
    /// Text defaults are shell-quoted so the example stays re-parseable.
    pub fn example_token(&self) -> String {
        match &self.kind {
            ParamKind::Text { default } => {
                format!("--{}={}", self.name, shell_words::quote(default))
            }
            _ => format!("--{}={}", self.name, self.default_value()),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParamKind::Continuous { min, max, default } => write!(
                f,
                "{}: {} Range: [{}, {}]. Default: {}.",
                self.name, self.description, min, max, default
            ),
            ParamKind::Discrete { options, default } => write!(
                f,
                "{}: {} Options: [{}]. Default: {}.",
                self.name,
                self.description,
                options.join(", "),
                default
            ),
            ParamKind::Text { default } => write!(
                f,
                "{}: {} Default: '{}'.",
                self.name, self.description, default
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angle() -> Parameter {
        Parameter::continuous("angle", "An angle.", -1.0, 1.0, 0.5)
    }

    #[test]
    fn continuous_accepts_in_range() {
        assert_eq!(angle().validate("0.25"), Ok(ArgValue::Number(0.25)));
        assert_eq!(angle().validate("-1"), Ok(ArgValue::Number(-1.0)));
        assert_eq!(angle().validate("1"), Ok(ArgValue::Number(1.0)));
    }

    #[test]
    fn continuous_rejects_out_of_range() {
        assert!(matches!(
            angle().validate("2"),
            Err(ArgumentError::OutOfRange { value, .. }) if value == 2.0
        ));
    }

    #[test]
    fn continuous_rejects_non_numbers() {
        assert!(matches!(
            angle().validate("fast"),
            Err(ArgumentError::InvalidNumber { .. })
        ));
        assert!(matches!(
            angle().validate("nan"),
            Err(ArgumentError::InvalidNumber { .. })
        ));
        assert!(matches!(
            angle().validate("inf"),
            Err(ArgumentError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn discrete_is_case_sensitive() {
        let state = Parameter::discrete("state", "On or off.", &["on", "off"], "on");
        assert_eq!(state.validate("off"), Ok(ArgValue::Choice("off".into())));
        assert!(matches!(
            state.validate("Off"),
            Err(ArgumentError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn text_accepts_anything() {
        let text = Parameter::text("text", "Say it.", "hi");
        assert_eq!(
            text.validate("anything at all"),
            Ok(ArgValue::Text("anything at all".into()))
        );
    }

    #[test]
    fn defaults_are_typed() {
        assert_eq!(angle().default_value(), ArgValue::Number(0.5));
        let state = Parameter::discrete("state", "On or off.", &["on", "off"], "on");
        assert_eq!(state.default_value(), ArgValue::Choice("on".into()));
    }

    #[test]
    fn example_token_quotes_text_defaults() {
        let text = Parameter::text("text", "Say it.", "hello world");
        assert_eq!(text.example_token(), "--text='hello world'");
        assert_eq!(angle().example_token(), "--angle=0.5");
    }
}
