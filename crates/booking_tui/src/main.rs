use booking_tui::{
    app::App,
    cli::{Cli, Cmd},
    config::Config,
    errors, logging, report,
};
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
pub async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = Config::new(args.config.as_deref())?;
    errors::init(&logging::log_file(&config.config.data_dir))?;
    let _log_guard = logging::init(&config.config.data_dir)?;
    config.log_sources();

    match args.cmd.unwrap_or_default() {
        Cmd::Run => {
            let mut app = App::new(config, args.tick_rate, args.frame_rate)?;
            app.run().await?;
        }
        Cmd::Services => print!("{}", report::services(&config.catalog)),
    }
    Ok(())
}
