pub(crate) mod analyze;
pub(crate) mod dimensions;
pub(crate) mod explain;

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub(crate) fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Analyze(args) => analyze::handle(args, config_path),
        Commands::Explain(args) => explain::handle(args),
        Commands::Dimensions(args) => dimensions::handle(args, config_path),
    }
}

/// Print rendered output, ending with exactly one newline.
pub(crate) fn emit(out: &str) {
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
}
