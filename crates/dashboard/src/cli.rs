//! Arguments of the `invoicedash` binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "invoicedash")]
#[command(about = "Summary cards and recent invoices from a JSON export of invoice rows", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON array of invoice rows
    #[arg(env = "INVOICEDASH_SNAPSHOT")]
    pub path: PathBuf,

    /// Print the snapshot on a single line
    #[arg(long)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_path_and_flags() {
        let cli = Cli::try_parse_from(["invoicedash", "invoices.json", "--compact"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("invoices.json"));
        assert!(cli.compact);

        let cli = Cli::try_parse_from(["invoicedash", "/tmp/rows.json"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("/tmp/rows.json"));
        assert!(!cli.compact);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["invoicedash", "invoices.json", "--pretty"]).is_err());
    }
}
