#![allow(clippy::cargo_common_metadata)]
use add_step::{cli, config::Config, setup_logging};
use anyhow::Result;

fn main() -> Result<()> {
    let args = cli::parse_args();
    setup_logging(args.debug)?;

    let config = Config::from_args(&args)?;
    cli::execute_command(&config)?;
    Ok(())
}
