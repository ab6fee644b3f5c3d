use crate::addr::{self, Addr};
use crate::err::{AddrError, BoxError, DefaultError};
use crate::flag::{Registry, Value};
use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

/// Comma-separated addresses, usable directly as a clap argument.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddrList(Vec<Addr>);

impl AddrList {
    pub fn into_inner(self) -> Vec<Addr> {
        self.0
    }
}

impl Deref for AddrList {
    type Target = [Addr];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Addr>> for AddrList {
    fn from(addrs: Vec<Addr>) -> Self {
        Self(addrs)
    }
}

impl FromStr for AddrList {
    type Err = AddrError;

    fn from_str(csv: &str) -> Result<Self, Self::Err> {
        parse(csv).map(Self)
    }
}

impl Display for AddrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.0))
    }
}

/// Resolves every token of `csv`, failing on the first bad one.
///
/// Tokens are not trimmed. The empty string is the empty list.
pub fn parse(csv: &str) -> Result<Vec<Addr>, AddrError> {
    if csv.is_empty() {
        return Ok(Vec::new());
    }
    csv.split(',').map(addr::parse).collect()
}

pub fn render(addrs: &[Addr]) -> String {
    addrs.iter().map(Addr::to_token).collect::<Vec<_>>().join(",")
}

/// Flag value holding a list of addresses.
pub struct AddrListFlag<'a> {
    dest: &'a mut Vec<Addr>,
}

impl<'a> AddrListFlag<'a> {
    pub fn new(dest: &'a mut Vec<Addr>) -> Self {
        Self { dest }
    }
}

impl Value for AddrListFlag<'_> {
    fn set(&mut self, raw: &str) -> Result<(), BoxError> {
        *self.dest = parse(raw)?;
        Ok(())
    }

    fn render(&self) -> String {
        render(self.dest.as_slice())
    }
}

/// Defines a flag resolving a comma-separated list into `dest`.
///
/// Panics if a non-empty `default` does not resolve.
pub fn var<'a, R>(
    registry: &mut R,
    dest: &'a mut Vec<Addr>,
    name: &str,
    default: &str,
    usage: &str,
)
where
    R: Registry<'a> + ?Sized,
{
    if !default.is_empty() {
        match parse(default) {
            Ok(addrs) => *dest = addrs,
            Err(e) => DefaultError::raise(name, e),
        }
    }
    registry.define(name, usage, Box::new(AddrListFlag::new(dest)));
}
