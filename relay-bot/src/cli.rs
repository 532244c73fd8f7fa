//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(about = "Chat-relay Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["relay-bot", "run", "--token", "abc"]).unwrap();
        let Commands::Run { token } = cli.command;
        assert_eq!(token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_run_without_token() {
        let cli = Cli::try_parse_from(["relay-bot", "run"]).unwrap();
        let Commands::Run { token } = cli.command;
        assert!(token.is_none());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["relay-bot"]).is_err());
    }
}
