use anyhow::Result;
use tabweld::Config;
use tabweld::pipeline;

fn main() -> Result<()> {
    let config = Config::from_cli()?;
    pipeline::run(&config)?;
    println!("Created {}", config.out_path.display());
    Ok(())
}
