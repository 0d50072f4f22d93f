//! # save 命令实现

use crate::cli::save::SaveArgs;

use civil_mapi::utils::output;
use civil_mapi::{MidasCivil, Result};

pub fn execute(civil: &MidasCivil, args: SaveArgs) -> Result<()> {
    civil.operations().save_as(&args.output)?;
    output::print_written("model", &args.output.display().to_string());
    Ok(())
}
