use color_eyre::eyre::{Result, eyre};

fn main() -> Result<()> {
    color_eyre::install()?;
    coach_scout::cli::run().map_err(|e| eyre!("{e}"))
}
