use callpath::cli::{self, Cli};
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// Every outcome, including bad input, exits with status 0; problems are
// reported as text only.
fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                }
                _ => {
                    eprint!("{}", err);
                    println!("{}", cli::usage());
                }
            }
            return;
        }
    };

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("callpath={}", log_level)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("callpath v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = cli::run(&cli) {
        let _ = cli::report_error(&err, std::io::stderr().lock());
    }
}
