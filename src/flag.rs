use crate::err::BoxError;
use std::collections::BTreeMap;
use thiserror::Error;

/// A value a flag writes into.
pub trait Value {
    fn set(&mut self, raw: &str) -> Result<(), BoxError>;

    /// Current contents in the form `set` accepts, or `""` if unset.
    fn render(&self) -> String;
}

/// Anything flags can be defined on.
pub trait Registry<'a> {
    fn define(&mut self, name: &str, usage: &str, value: Box<dyn Value + 'a>);
}

#[derive(Debug, Error)]
pub enum FlagError {
    #[error("flag provided but not defined: -{0}")]
    Undefined(String),
    #[error("invalid value {value:?} for flag -{name}: {source}")]
    InvalidValue {
        name: String,
        value: String,
        source: BoxError,
    },
}

struct Flag<'a> {
    usage: String,
    default: String,
    value: Box<dyn Value + 'a>,
}

/// Named flags borrowing their destinations for `'a`. Whatever parses the
/// command line feeds raw strings to `set`.
///
/// Drop the set before reading the destinations.
pub struct FlagSet<'a> {
    name: String,
    flags: BTreeMap<String, Flag<'a>>,
}

impl<'a> FlagSet<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), FlagError> {
        let flag = self
            .flags
            .get_mut(name)
            .ok_or_else(|| FlagError::Undefined(name.to_owned()))?;
        match flag.value.set(raw) {
            Ok(()) => {
                log::debug!("Set -{} to {:?}", name, flag.value.render());
                Ok(())
            }
            Err(source) => Err(FlagError::InvalidValue {
                name: name.to_owned(),
                value: raw.to_owned(),
                source,
            }),
        }
    }

    pub fn render(&self, name: &str) -> Option<String> {
        self.flags.get(name).map(|flag| flag.value.render())
    }

    pub fn usage(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(|flag| flag.usage.as_str())
    }

    /// The value rendered when the flag was defined.
    pub fn default(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(|flag| flag.default.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }
}

impl<'a> Registry<'a> for FlagSet<'a> {
    /// Panics if `name` is already defined.
    fn define(&mut self, name: &str, usage: &str, value: Box<dyn Value + 'a>) {
        if self.flags.contains_key(name) {
            panic!("{} flag redefined: {}", self.name, name);
        }
        let default = value.render();
        self.flags.insert(
            name.to_owned(),
            Flag {
                usage: usage.to_owned(),
                default,
                value,
            },
        );
    }
}
