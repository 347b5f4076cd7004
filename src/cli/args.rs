use clap::Parser;
use std::path::PathBuf;

/// Replay a banking command script against an in-memory ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Replay a banking command script against an in-memory ledger", long_about = None)]
pub struct CliArgs {
    /// Accounts seed CSV file path
    #[arg(value_name = "ACCOUNTS", help = "Path to the accounts seed CSV file")]
    pub accounts_file: PathBuf,

    /// Command script CSV file path
    #[arg(value_name = "COMMANDS", help = "Path to the command script CSV file")]
    pub commands_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parses_both_file_paths() {
        let parsed =
            CliArgs::try_parse_from(["program", "accounts.csv", "commands.csv"]).unwrap();
        assert_eq!(parsed.accounts_file, PathBuf::from("accounts.csv"));
        assert_eq!(parsed.commands_file, PathBuf::from("commands.csv"));
    }

    #[rstest]
    #[case::no_arguments(&["program"])]
    #[case::missing_commands(&["program", "accounts.csv"])]
    #[case::extra_argument(&["program", "a.csv", "b.csv", "c.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
