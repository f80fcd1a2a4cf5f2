//! Classification of REPL input lines into directives and messages

/// What a line typed at the REPL asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Blank line, ignored
    Empty,
    Quit,
    Reset,
    /// `:model <name>`; the name keeps its original case
    SelectModel(String),
    /// `:model` without a name
    ShowModel,
    ListModels,
    History,
    Help,
    /// A `:` directive nobody understands
    Unknown(String),
    /// Anything else is sent to the model
    Message(String),
}

/// Classify one input line.
///
/// Directive keywords are case-insensitive; arguments are kept as typed.
/// Messages are sent as typed, minus the line terminator.
pub fn parse_input(raw: &str) -> ReplInput {
    let line = raw.trim();
    if line.is_empty() {
        return ReplInput::Empty;
    }
    if !line.starts_with(':') {
        return ReplInput::Message(raw.trim_end_matches(['\r', '\n']).to_string());
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        ":quit" | ":exit" | ":q" => ReplInput::Quit,
        ":reset" => ReplInput::Reset,
        ":model" if rest.is_empty() => ReplInput::ShowModel,
        ":model" => ReplInput::SelectModel(rest.to_string()),
        ":models" => ReplInput::ListModels,
        ":history" => ReplInput::History,
        ":help" | ":h" | ":?" => ReplInput::Help,
        _ => ReplInput::Unknown(keyword.to_string()),
    }
}
