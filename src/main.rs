use aacboard::cli::commands::Cli;
use aacboard::cli::handlers;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    // Config decides the default log level, so it is read before logging starts
    let session = match handlers::open_session(&cli) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    aacboard::logging::init(&session.config.log.level, cli.verbose);

    if let Err(e) = handlers::dispatch(cli, session) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
