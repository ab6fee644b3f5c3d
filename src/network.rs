use crate::err::AddrError;
use std::fmt::{self, Display};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Network names accepted in the first field of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Ip,
    Ip4,
    Ip6,
    Tcp,
    Tcp4,
    Tcp6,
    Udp,
    Udp4,
    Udp6,
    Unix,
    Unixgram,
    Unixpacket,
}

/// How a network's `host:port` field is resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Family {
    Ip,
    Tcp,
    Udp,
    Unix,
}

/// Which IP versions a network admits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Version {
    Any,
    V4,
    V6,
}

impl Network {
    pub const ALL: [Network; 12] = [
        Network::Ip,
        Network::Ip4,
        Network::Ip6,
        Network::Tcp,
        Network::Tcp4,
        Network::Tcp6,
        Network::Udp,
        Network::Udp4,
        Network::Udp6,
        Network::Unix,
        Network::Unixgram,
        Network::Unixpacket,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Ip => "ip",
            Network::Ip4 => "ip4",
            Network::Ip6 => "ip6",
            Network::Tcp => "tcp",
            Network::Tcp4 => "tcp4",
            Network::Tcp6 => "tcp6",
            Network::Udp => "udp",
            Network::Udp4 => "udp4",
            Network::Udp6 => "udp6",
            Network::Unix => "unix",
            Network::Unixgram => "unixgram",
            Network::Unixpacket => "unixpacket",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Network::Ip | Network::Ip4 | Network::Ip6 => Family::Ip,
            Network::Tcp | Network::Tcp4 | Network::Tcp6 => Family::Tcp,
            Network::Udp | Network::Udp4 | Network::Udp6 => Family::Udp,
            Network::Unix | Network::Unixgram | Network::Unixpacket => Family::Unix,
        }
    }

    pub fn version(self) -> Version {
        match self {
            Network::Ip4 | Network::Tcp4 | Network::Udp4 => Version::V4,
            Network::Ip6 | Network::Tcp6 | Network::Udp6 => Version::V6,
            _ => Version::Any,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| AddrError::UnknownNetwork(s.to_owned()))
    }
}

impl Version {
    pub fn admits(self, ip: &IpAddr) -> bool {
        match self {
            Version::Any => true,
            Version::V4 => ip.is_ipv4(),
            Version::V6 => ip.is_ipv6(),
        }
    }

    /// Address to bind when the host field was empty.
    pub fn unspecified(self) -> IpAddr {
        match self {
            Version::Any | Version::V4 => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            Version::V6 => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        }
    }

    /// Picks from resolver output; `Any` prefers IPv4.
    pub fn pick(self, candidates: &[IpAddr]) -> Option<IpAddr> {
        match self {
            Version::Any => candidates
                .iter()
                .find(|ip| ip.is_ipv4())
                .or_else(|| candidates.first())
                .copied(),
            _ => candidates.iter().find(|ip| self.admits(ip)).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for network in Network::ALL {
            assert_eq!(network.as_str().parse::<Network>().unwrap(), network);
            assert_eq!(network.to_string(), network.as_str());
        }
    }

    #[test]
    fn unknown_names() {
        for name in ["foo", "TCP", "", " tcp", "sctp"] {
            let e = name.parse::<Network>().unwrap_err();
            assert_eq!(e.to_string(), format!("unknown network {}", name));
        }
    }

    #[test]
    fn families() {
        assert_eq!(Network::Ip6.family(), Family::Ip);
        assert_eq!(Network::Tcp4.family(), Family::Tcp);
        assert_eq!(Network::Udp.family(), Family::Udp);
        assert_eq!(Network::Unixpacket.family(), Family::Unix);
        assert_eq!(Network::Unixgram.version(), Version::Any);
        assert_eq!(Network::Udp6.version(), Version::V6);
    }

    #[test]
    fn pick_prefers_ipv4_for_any() {
        let v6 = IpAddr::V6(Ipv6Addr::LOCALHOST);
        let v4 = IpAddr::V4(Ipv4Addr::LOCALHOST);
        assert_eq!(Version::Any.pick(&[v6, v4]), Some(v4));
        assert_eq!(Version::Any.pick(&[v6]), Some(v6));
        assert_eq!(Version::V6.pick(&[v4, v6]), Some(v6));
        assert_eq!(Version::V4.pick(&[v6]), None);
        assert_eq!(Version::Any.pick(&[]), None);
    }
}
