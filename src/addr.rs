use crate::err::AddrError;
use crate::network::{Family, Network};
use crate::resolve;
use std::fmt::{self, Display};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A resolved address together with the network it was resolved under.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Addr {
    network: Network,
    endpoint: Endpoint,
}

/// What a token resolved to. `None` IPs come from an empty host field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Ip(Option<IpAddr>),
    Socket(Option<IpAddr>, u16),
    Path(PathBuf),
}

impl Addr {
    pub fn network(&self) -> Network {
        self.network
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The resolved IP, if the host field named one.
    pub fn ip(&self) -> Option<IpAddr> {
        match &self.endpoint {
            Endpoint::Ip(ip) | Endpoint::Socket(ip, _) => *ip,
            Endpoint::Path(_) => None,
        }
    }

    /// Socket address for tcp and udp networks, using the unspecified
    /// address of the network's version when the host was empty.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match &self.endpoint {
            Endpoint::Socket(ip, port) => Some(SocketAddr::new(
                ip.unwrap_or_else(|| self.network.version().unspecified()),
                *port,
            )),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.endpoint {
            Endpoint::Path(path) => Some(path),
            _ => None,
        }
    }

    /// `net:canonical`, the form options render their values in.
    pub fn to_token(&self) -> String {
        format!("{}:{}", self.network, self)
    }
}

/// The canonical `host:port` string, or the path for unix networks.
///
/// IP addresses render with an empty port field (`127.0.0.1:`) and an empty
/// host renders as nothing (`:8080`), so tokens built from them parse again.
impl Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.endpoint {
            Endpoint::Ip(Some(ip)) => write!(f, "{}:", ip),
            Endpoint::Ip(None) => f.write_str(":"),
            Endpoint::Socket(Some(ip), port) => write!(f, "{}", SocketAddr::new(*ip, *port)),
            Endpoint::Socket(None, port) => write!(f, ":{}", port),
            Endpoint::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for Addr {
    type Err = AddrError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        parse(token)
    }
}

/// Parses and resolves a `net:host:port` token.
///
/// Hosts containing colons (bare IPv6 literals) are rejected as malformed.
pub fn parse(token: &str) -> Result<Addr, AddrError> {
    log::trace!("Parsing address {:?}", token);

    let parts = token.split(':').collect::<Vec<_>>();
    let &[network, host, port] = parts.as_slice() else {
        return Err(AddrError::Format(token.to_owned()));
    };

    let host_port = format!("{}:{}", host, port);
    let network = network.parse::<Network>()?;
    let endpoint = match network.family() {
        Family::Ip => Endpoint::Ip(resolve::ip(network.version(), &host_port)?),
        Family::Tcp | Family::Udp => {
            let (ip, port) = resolve::socket(network.version(), &host_port)?;
            Endpoint::Socket(ip, port)
        }
        Family::Unix => Endpoint::Path(resolve::unix(&host_port)),
    };

    Ok(Addr { network, endpoint })
}
