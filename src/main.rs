use std::error::Error;

use clap::Parser;

use emoji_life::{app, Cli, Config};

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::try_from(Cli::parse())?;
    app::run(config)
}
