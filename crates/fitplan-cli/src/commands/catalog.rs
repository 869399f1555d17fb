use clap::Args;
use fitplan_core::Config;

use super::CliResult;

#[derive(Args)]
pub struct CatalogArgs {
    /// Print as JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CatalogArgs) -> CliResult {
    let catalog = Config::load_or_default().catalog()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", toml::to_string_pretty(&catalog.to_file())?);
    }
    Ok(())
}
