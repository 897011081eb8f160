use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use gambit::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = RunnerOptions::parse();

    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    print_header();

    let mut runner = Runner::new(options)?;
    match runner.run()
    {
        | Ok(record) =>
        {
            println!("{}", record.state);
            println!("{}", record.position);
            log::debug!("examined {} paths", record.explored);
        }
        | Err(e) if e.fatal() => return Err(e),
        | Err(e) => log::error!("game aborted: {}", e),
    }

    Ok(())
}

fn print_header()
{
    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}
