use addrs::{Addr, AddrList};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Options {
    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve addresses and print their canonical form
    Resolve {
        /// Addresses, e.g. tcp:127.0.0.1:8080
        #[arg(required = true)]
        tokens: Vec<Addr>,
    },
    /// Resolve comma-separated address lists
    List {
        /// Address lists, e.g. tcp:127.0.0.1:1234,udp:10.0.0.1:53
        #[arg(required = true)]
        lists: Vec<AddrList>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }

    #[test]
    fn parses_addresses() {
        let options = Options::try_parse_from(["addrs", "resolve", "tcp:127.0.0.1:80"]).unwrap();
        match options.command {
            Command::Resolve { tokens } => {
                assert_eq!(tokens[0].to_token(), "tcp:127.0.0.1:80")
            }
            c => panic!("unexpected command: {:?}", c),
        }
    }

    #[test]
    fn rejects_unknown_network() {
        let e = Options::try_parse_from(["addrs", "list", "foo:127.0.0.1:80"]).unwrap_err();
        assert!(e.to_string().contains("unknown network foo"));
    }
}
