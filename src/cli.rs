use clap::Parser;

use crate::utils::version;

/// Prompts for a recipient, sender, message and year, then prints a boxed
/// Christmas greeting above a snowy scene.
#[derive(Parser, Debug)]
#[command(version = version(), about)]
pub struct Cli {
    /// Anything else on the command line is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}
