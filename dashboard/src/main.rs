use std::io;

use clap::Parser;
use users_dashboard::{logging, Config, Session, UreqTransport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    config.validate()?;
    logging::init(&config.log_level);
    tracing::info!(base_url = %config.base_url, "starting dashboard");

    let mut session = Session::new(config.client(), UreqTransport::new());
    if config.once {
        session.fetch_and_render(&mut io::stdout().lock())?;
        return Ok(());
    }

    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
