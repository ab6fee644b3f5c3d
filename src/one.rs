use crate::addr::{self, Addr};
use crate::err::{BoxError, DefaultError};
use crate::flag::{Registry, Value};

/// Flag value holding a single address.
pub struct AddrFlag<'a> {
    dest: &'a mut Option<Addr>,
}

impl<'a> AddrFlag<'a> {
    pub fn new(dest: &'a mut Option<Addr>) -> Self {
        Self { dest }
    }
}

impl Value for AddrFlag<'_> {
    fn set(&mut self, raw: &str) -> Result<(), BoxError> {
        *self.dest = Some(addr::parse(raw)?);
        Ok(())
    }

    fn render(&self) -> String {
        self.dest.as_ref().map(Addr::to_token).unwrap_or_default()
    }
}

/// Defines a flag resolving into `dest`.
///
/// A non-empty `default` is resolved immediately, and panics if it does not
/// resolve: a bad built-in default is a bug, not user input.
pub fn var<'a, R>(
    registry: &mut R,
    dest: &'a mut Option<Addr>,
    name: &str,
    default: &str,
    usage: &str,
)
where
    R: Registry<'a> + ?Sized,
{
    if !default.is_empty() {
        match addr::parse(default) {
            Ok(a) => *dest = Some(a),
            Err(e) => DefaultError::raise(name, e),
        }
    }
    registry.define(name, usage, Box::new(AddrFlag::new(dest)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::FlagSet;
    use crate::network::Network;

    #[test]
    fn set_from_flag() {
        let mut a1 = None;
        let mut flags = FlagSet::new("test");
        var(&mut flags, &mut a1, "addr", "", "");

        flags.set("addr", "udp:127.0.0.1:1234").unwrap();
        drop(flags);

        let a1 = a1.unwrap();
        assert_eq!(a1.network(), Network::Udp);
        assert_eq!(a1.to_string(), "127.0.0.1:1234");
    }

    #[test]
    fn unset_renders_empty() {
        let mut dest = None;
        let mut flags = FlagSet::new("test");
        var(&mut flags, &mut dest, "addr", "", "");
        assert_eq!(flags.render("addr").unwrap(), "");
    }

    #[test]
    fn rendered_value_reparses() {
        let mut dest = None;
        let mut flags = FlagSet::new("test");
        var(&mut flags, &mut dest, "addr", "", "");
        flags.set("addr", "tcp4:10.1.2.3:443").unwrap();
        let rendered = flags.render("addr").unwrap();
        assert_eq!(rendered, "tcp4:10.1.2.3:443");
        drop(flags);
        assert_eq!(addr::parse(&rendered).unwrap(), dest.unwrap());
    }

    #[test]
    fn empty_host_renders_reparsable() {
        let mut dest = None;
        let mut flags = FlagSet::new("test");
        var(&mut flags, &mut dest, "addr", "", "");
        flags.set("addr", "tcp6::53").unwrap();
        let rendered = flags.render("addr").unwrap();
        assert_eq!(rendered, "tcp6::53");
        drop(flags);
        assert_eq!(addr::parse(&rendered).unwrap(), dest.unwrap());
    }

    #[test]
    fn default_applied() {
        let mut dest = None;
        let mut flags = FlagSet::new("test");
        var(&mut flags, &mut dest, "addr", "tcp:127.0.0.1:80", "");
        assert_eq!(flags.render("addr").unwrap(), "tcp:127.0.0.1:80");
        flags.set("addr", "tcp:127.0.0.1:81").unwrap();
        drop(flags);
        assert_eq!(dest.unwrap().to_token(), "tcp:127.0.0.1:81");
    }

    #[test]
    fn bad_runtime_value_leaves_unset() {
        let mut dest = None;
        let mut flags = FlagSet::new("test");
        var(&mut flags, &mut dest, "addr", "", "");
        let e = flags.set("addr", "foo:127.0.0.1:1234").unwrap_err();
        assert!(e.to_string().ends_with("unknown network foo"));
        drop(flags);
        assert_eq!(dest, None);
    }

    #[test]
    fn bad_runtime_value_keeps_default() {
        let mut dest = None;
        let mut flags = FlagSet::new("test");
        var(&mut flags, &mut dest, "addr", "udp:127.0.0.1:53", "");
        assert!(flags.set("addr", "udp:127.0.0.1").is_err());
        drop(flags);
        assert_eq!(dest.unwrap().to_token(), "udp:127.0.0.1:53");
    }

    #[test]
    fn value_error_is_verbatim() {
        let mut dest = None;
        let mut value = AddrFlag::new(&mut dest);
        let e = value.set("foo:127.0.0.1:1234").unwrap_err();
        assert_eq!(e.to_string(), "unknown network foo");
        assert_eq!(value.render(), "");
    }

    #[test]
    #[should_panic(expected = "unknown network foo")]
    fn bad_default_panics() {
        let mut dest = None;
        let mut flags = FlagSet::new("test");
        var(&mut flags, &mut dest, "addr", "foo:127.0.0.1:1234", "");
    }
}
