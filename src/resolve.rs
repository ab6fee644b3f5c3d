use crate::network::Version;
use std::io;
use std::net::{IpAddr, ToSocketAddrs};
use std::path::PathBuf;

/// Resolves an internet-layer address. The port field must be empty.
///
/// An empty host yields `None`.
pub fn ip(version: Version, host_port: &str) -> Result<Option<IpAddr>, io::Error> {
    let (host, port) = split(host_port);
    if !port.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unexpected port in ip address {}", host_port),
        ));
    }
    host_ip(version, host)
}

/// Resolves a TCP or UDP endpoint. An empty host yields no IP.
pub fn socket(
    version: Version,
    host_port: &str,
) -> Result<(Option<IpAddr>, u16), io::Error> {
    let (host, port) = split(host_port);
    let port = match port {
        "" => 0,
        p => p.parse::<u16>().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid port {:?} in {}", p, host_port),
            )
        })?,
    };
    Ok((host_ip(version, host)?, port))
}

pub fn unix(path: &str) -> PathBuf {
    PathBuf::from(path)
}

fn split(host_port: &str) -> (&str, &str) {
    host_port.rsplit_once(':').unwrap_or((host_port, ""))
}

fn host_ip(version: Version, host: &str) -> Result<Option<IpAddr>, io::Error> {
    if host.is_empty() {
        return Ok(None);
    }

    let candidates = match host.parse::<IpAddr>() {
        Ok(ip) => vec![ip],
        Err(_) => {
            let ips = (host, 0)
                .to_socket_addrs()?
                .map(|addr| addr.ip())
                .collect::<Vec<_>>();
            log::debug!("Resolved {} to {:?}", host, ips);
            ips
        }
    };

    match version.pick(&candidates) {
        Some(ip) => Ok(Some(ip)),
        None => Err(io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            format!("no suitable address found for {}", host),
        )),
    }
}
