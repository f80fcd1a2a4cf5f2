//! Assistant reply value object

/// What a successful chat call produced.
///
/// `Empty` is a soft outcome: the server answered but had nothing to say.
/// It is never recorded in the transcript and is distinct from any error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantReply {
    Text(String),
    Empty,
}

impl AssistantReply {
    /// Classify raw reply content
    pub fn from_content(content: impl Into<String>) -> Self {
        let content = content.into();
        if content.is_empty() {
            AssistantReply::Empty
        } else {
            AssistantReply::Text(content)
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            AssistantReply::Text(t) => Some(t),
            AssistantReply::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, AssistantReply::Empty)
    }
}
