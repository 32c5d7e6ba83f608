mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, monitor, scan, sweep};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Sweep { network } => {
            print::header("getting ready for sweep", cfg.quiet);
            sweep::sweep(&network, &cfg).await
        }
        Commands::Scan { target, ports } => {
            print::header("starting scanner", cfg.quiet);
            scan::scan(target, &ports, &cfg).await
        }
        Commands::Discover { network, ports } => {
            print::header("getting ready for discovery", cfg.quiet);
            discover::discover(&network, &ports, &cfg).await
        }
        Commands::Monitor {
            hosts,
            ports,
            interval,
        } => monitor::monitor(&hosts, &ports, interval, &cfg).await,
    }
}
