//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for parley
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(author, version, about = "Chat with models on an Ollama-compatible server")]
#[command(long_about = r#"
parley keeps a conversation with a model served by an Ollama-compatible
chat server. Every message is sent together with the whole conversation so far.

Without a prompt it starts an interactive session. Inside the session:
  :model <name>   switch model (no check against the server's list)
  :models         list models served by the server
  :reset          forget the conversation
  :history        print the conversation
  :quit           exit

Configuration files are loaded from (in priority order):
1. PARLEY_* environment variables (e.g. PARLEY_SERVER__ENDPOINT)
2. --config <path>     Explicit config file
3. ./parley.toml       Project-level config
4. ~/.config/parley/config.toml   Global config

Example:
  parley
  parley -m llama3.2:3b "Explain borrowing in two sentences"
  parley --endpoint http://gpu-box:11434 --list-models
"#)]
pub struct Cli {
    /// Send a single prompt, print the reply and exit
    pub prompt: Option<String>,

    /// Model to use (skips the model prompt in interactive mode)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the chat server
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Sampling temperature in [0, 1]
    #[arg(short, long, value_name = "VALUE")]
    pub temperature: Option<f64>,

    /// List the models served by the server and exit
    #[arg(long)]
    pub list_models: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::parse_from(["parley", "-m", "llama3", "-t", "0.2", "hello there"]);
        assert_eq!(cli.prompt.as_deref(), Some("hello there"));
        assert_eq!(cli.model.as_deref(), Some("llama3"));
        assert_eq!(cli.temperature, Some(0.2));
        assert!(!cli.list_models);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["parley", "-vv", "--list-models", "--no-config"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.list_models);
        assert!(cli.no_config);
        assert!(cli.prompt.is_none());
    }
}
