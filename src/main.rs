use anyhow::Result;
use clap::Parser;

use eqtl_split::prelude::*;

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let config = SplitConfig::parse();
    run(&config)?;

    Ok(())
}
