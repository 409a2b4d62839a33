//! Command-line definition for `stratus`.

use crate::commands::{modifier, resource, types};
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stratus")]
#[command(about = "Inspect the Stratus type system and its synthesized schemas", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List builtin and declaration types
    Types,

    /// Show the parameter modifier object for a type
    Modifier {
        /// Target type (string, object, int, bool, array, null)
        #[arg(value_name = "TYPE")]
        type_name: String,
    },

    /// Show the body object of a resource type
    Resource {
        /// Resource type reference, e.g. Microsoft.Web/sites@2020-01-01
        #[arg(value_name = "TYPE@VERSION")]
        reference: String,
    },
}

/// Run a parsed command line and return what should be printed
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Types => types::execute(cli.format),
        Commands::Modifier { type_name } => modifier::execute(type_name, cli.format),
        Commands::Resource { reference } => resource::execute(reference, cli.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modifier_with_global_format() {
        let cli = Cli::try_parse_from(["stratus", "modifier", "int", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(
            cli.command,
            Commands::Modifier {
                type_name: "int".to_string()
            }
        );
    }

    #[test]
    fn test_format_defaults_to_text() {
        let cli = Cli::try_parse_from(["stratus", "types"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.command, Commands::Types);
    }

    #[test]
    fn test_resource_requires_reference() {
        assert!(Cli::try_parse_from(["stratus", "resource"]).is_err());
    }
}
