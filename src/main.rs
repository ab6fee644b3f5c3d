use addrs::err::DisplayError;

mod opt;

fn main() -> Result<(), DisplayError> {
    let opt::Options { verbose, command } = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    match command {
        opt::Command::Resolve { tokens } => {
            for addr in tokens {
                println!("{}", addr.to_token());
            }
        }
        opt::Command::List { lists } => {
            for addrs in lists {
                log::debug!("Resolved {} addresses", addrs.len());
                println!("{}", addrs);
            }
        }
    }

    Ok(())
}
