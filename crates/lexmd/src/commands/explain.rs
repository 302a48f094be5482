//! Handler for the `lexmd explain` command.

use anyhow::{Result, bail};

use crate::cli::ExplainArgs;

pub(crate) fn handle(args: ExplainArgs) -> Result<()> {
    if args.key.trim().eq_ignore_ascii_case("list") {
        print!("{}", lexmd_explain::catalog());
        return Ok(());
    }
    match lexmd_explain::lookup(&args.key) {
        Some(text) => println!("{text}"),
        None => bail!("Unknown indicator key '{}'", args.key),
    }
    Ok(())
}
