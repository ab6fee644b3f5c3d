//! Command-line flags that resolve to network addresses.
//!
//! Tokens have the form `net:host:port`, e.g. `tcp:127.0.0.1:8080`; lists
//! join tokens with commas.

pub mod addr;
pub mod err;
pub mod flag;
pub mod list;
pub mod network;
pub mod one;

mod resolve;

pub use addr::{parse, Addr, Endpoint};
pub use err::AddrError as Error;
pub use flag::{FlagSet, Registry, Value};
pub use list::AddrList;
pub use network::Network;
