//! Console output formatter for chat sessions

use colored::Colorize;
use parley_application::TransportError;
use parley_domain::{AssistantReply, Model, Role, Turn, excerpt};

/// Bytes of a server error body shown to the user
const ERROR_BODY_BYTES: usize = 500;

/// Formats session output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome(endpoint: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("parley"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Connected to".dimmed(), endpoint));
        output
    }

    /// Format the assistant's reply
    pub fn format_reply(reply: &AssistantReply) -> String {
        match reply {
            AssistantReply::Text(text) => text.clone(),
            AssistantReply::Empty => format!(
                "{}",
                "No response received. Check server connection.".yellow()
            ),
        }
    }

    /// Format a failed remote call, including what the server said
    pub fn format_error(error: &TransportError) -> String {
        match error {
            TransportError::Status { status, body } => {
                let mut output = format!(
                    "{} Server returned status code {}",
                    "Error:".red().bold(),
                    status
                );
                if !body.trim().is_empty() {
                    output.push('\n');
                    output.push_str(&Self::indent(
                        &excerpt(body.trim(), ERROR_BODY_BYTES),
                        "  ",
                    ));
                }
                output
            }
            TransportError::Connection(_) | TransportError::Timeout => format!(
                "{} {}\n{}",
                "Error:".red().bold(),
                error,
                "Is the server running?".dimmed()
            ),
            TransportError::Parse { .. } => format!("{} {}", "Error:".red().bold(), error),
        }
    }

    /// Format the list of served models, marking the active one
    pub fn format_models(models: &[Model], active: &Model) -> String {
        if models.is_empty() {
            return format!("{}", "No models available on the server.".yellow());
        }
        let mut output = format!("{}\n", "Available models:".cyan().bold());
        for model in models {
            if model == active {
                output.push_str(&format!("  {} {}\n", "*".green(), model.as_str().green()));
            } else {
                output.push_str(&format!("    {}\n", model));
            }
        }
        output
    }

    /// Format the transcript, oldest turn first
    pub fn format_transcript(turns: &[Turn]) -> String {
        if turns.is_empty() {
            return format!("{}", "(conversation is empty)".dimmed());
        }
        turns
            .iter()
            .map(|turn| {
                let label = match turn.role {
                    Role::User => "you".cyan().bold(),
                    Role::Assistant => "assistant".yellow().bold(),
                };
                format!("{}\n{}", label, Self::indent(&turn.content, "  "))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Commands:".bold()));
        output.push_str("  :model <name>      - Switch to another model\n");
        output.push_str("  :model             - Show the active model\n");
        output.push_str("  :models            - List models on the server\n");
        output.push_str("  :reset             - Forget the conversation\n");
        output.push_str("  :history           - Show the conversation\n");
        output.push_str("  :help              - Show this help\n");
        output.push_str("  :quit, :exit, :q   - Exit\n");
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text_is_printed_verbatim() {
        let reply = AssistantReply::Text("hi there".to_string());
        assert_eq!(ConsoleFormatter::format_reply(&reply), "hi there");
    }

    #[test]
    fn test_empty_reply_has_notice() {
        let out = ConsoleFormatter::format_reply(&AssistantReply::Empty);
        assert!(out.contains("No response received"));
    }

    #[test]
    fn test_status_error_shows_code_and_body() {
        let out = ConsoleFormatter::format_error(&TransportError::Status {
            status: 500,
            body: "server error".to_string(),
        });
        assert!(out.contains("500"));
        assert!(out.contains("server error"));
    }

    #[test]
    fn test_models_mark_active() {
        colored::control::set_override(false);
        let models = vec![Model::new("a"), Model::new("b")];
        let out = ConsoleFormatter::format_models(&models, &Model::new("b"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "    a");
        assert_eq!(lines[2], "  * b");
    }

    #[test]
    fn test_transcript_lists_turns_in_order() {
        let out = ConsoleFormatter::format_transcript(&[
            Turn::user("hello"),
            Turn::assistant("hi there"),
        ]);
        assert!(out.find("hello").unwrap() < out.find("hi there").unwrap());
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
