//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::chat::input::{ReplInput, parse_input};
use crate::chat::prompt::ChatPrompt;
use crate::config::ReplConfig;
use crate::progress::reporter::ThinkingSpinner;
use colored::Colorize;
use parley_application::{ChatProgressNotifier, ChatSessionUseCase, ChatTransport, NoProgress};
use parley_domain::Model;
use reedline::{FileBackedHistory, Reedline, Signal};
use std::path::Path;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Result of evaluating one REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print this and read the next line
    Print(String),
    /// Nothing to show
    Skip,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl<T: ChatTransport + 'static> {
    use_case: ChatSessionUseCase<T>,
    config: ReplConfig,
}

impl<T: ChatTransport + 'static> ChatRepl<T> {
    /// Create a new ChatRepl
    pub fn new(use_case: ChatSessionUseCase<T>) -> Self {
        Self {
            use_case,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until `:quit` or end of input
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.editor();

        println!("{}", ConsoleFormatter::welcome(&self.use_case.endpoint().await));

        if self.config.choose_model_on_start {
            self.choose_model(&mut editor).await?;
        }

        println!(
            "{} {}",
            "Chatting with".bold(),
            self.use_case.active_model().await
        );
        println!(
            "{}",
            "Type ':quit' to exit, ':reset' to reset conversation, or ':model NAME' to change model"
                .dimmed()
        );

        let prompt = ChatPrompt::new("> ");
        loop {
            println!();
            let input = match editor.read_line(&prompt)? {
                Signal::Success(line) => parse_input(&line),
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => ReplInput::Quit,
                #[allow(unreachable_patterns)]
                _ => continue,
            };

            match self.evaluate(input).await {
                Step::Print(text) => println!("{}", text),
                Step::Skip => {}
                Step::Exit => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Apply one input to the session and describe what to show
    pub async fn evaluate(&self, input: ReplInput) -> Step {
        match input {
            ReplInput::Empty => Step::Skip,
            ReplInput::Quit => Step::Exit,
            ReplInput::Reset => {
                self.use_case.reset_conversation().await;
                Step::Print("Conversation history reset".to_string())
            }
            ReplInput::SelectModel(name) => {
                self.use_case.select_model(name).await;
                Step::Print(format!(
                    "Changed model to {}",
                    self.use_case.active_model().await
                ))
            }
            ReplInput::ShowModel => Step::Print(format!(
                "Current model: {}",
                self.use_case.active_model().await
            )),
            ReplInput::ListModels => match self.use_case.list_available_models().await {
                Ok(models) => Step::Print(ConsoleFormatter::format_models(
                    &models,
                    &self.use_case.active_model().await,
                )),
                Err(e) => Step::Print(ConsoleFormatter::format_error(&e)),
            },
            ReplInput::History => Step::Print(ConsoleFormatter::format_transcript(
                &self.use_case.transcript().await,
            )),
            ReplInput::Help => Step::Print(ConsoleFormatter::help()),
            ReplInput::Unknown(keyword) => Step::Print(format!(
                "Unknown command: {}\nType :help for available commands",
                keyword
            )),
            ReplInput::Message(text) => self.send(&text).await,
        }
    }

    async fn send(&self, text: &str) -> Step {
        let spinner;
        let progress: &dyn ChatProgressNotifier = if self.config.show_progress {
            spinner = ThinkingSpinner::new();
            &spinner
        } else {
            &NoProgress
        };

        match self.use_case.send_message_with_progress(text, progress).await {
            Ok(reply) => Step::Print(ConsoleFormatter::format_reply(&reply)),
            Err(e) => Step::Print(ConsoleFormatter::format_error(&e)),
        }
    }

    /// Offer the served models and let the user pick one.
    ///
    /// Discovery failures are reported and treated as an empty list.
    async fn choose_model(&self, editor: &mut Reedline) -> std::io::Result<()> {
        println!("Checking available models...");
        let models = match self.use_case.list_available_models().await {
            Ok(models) => models,
            Err(e) => {
                warn!("Model discovery failed: {}", e);
                println!("{}", ConsoleFormatter::format_error(&e));
                Vec::new()
            }
        };

        if models.is_empty() {
            println!("Couldn't retrieve models. Make sure the server is running.");
            return Ok(());
        }

        let current = self.use_case.active_model().await;
        println!("{}", ConsoleFormatter::format_models(&models, &current));

        let prompt = ChatPrompt::new(format!("Choose a model (default is {}): ", current));
        if let Signal::Success(choice) = editor.read_line(&prompt)? {
            if let Some(step) = Self::pick_model(&models, &choice) {
                match step {
                    Ok(model) => self.use_case.select_model(model).await,
                    Err(name) => println!(
                        "{} is not served here, keeping {}",
                        name.yellow(),
                        current
                    ),
                }
            }
        }
        Ok(())
    }

    /// Interpret the answer to the model prompt.
    ///
    /// `None` keeps the default; `Err` carries a name that is not in the list.
    fn pick_model(models: &[Model], choice: &str) -> Option<Result<Model, String>> {
        let choice = choice.trim();
        if choice.is_empty() {
            return None;
        }
        let picked = models.iter().find(|m| m.as_str() == choice).cloned();
        Some(picked.ok_or_else(|| choice.to_string()))
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        match self.config.history_path.as_deref().and_then(Self::history) {
            Some(history) => editor.with_history(Box::new(history)),
            None => editor,
        }
    }

    /// File-backed history at `path`, or `None` when it cannot be opened
    fn history(path: &Path) -> Option<FileBackedHistory> {
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Cannot create history directory {}: {}", parent.display(), e);
        }

        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
            Ok(history) => Some(history),
            Err(e) => {
                warn!("History disabled, cannot open {}: {}", path.display(), e);
                None
            }
        }
    }
}
