//! Cause-chain and help aggregation

use std::collections::HashSet;

use super::cause::Cause;
use super::types::{MessageError, Status};

const SEPARATOR: &str = "; ";

impl Status {
    /// The message followed by every message down the cause chain.
    ///
    /// Nested statuses contribute their own `long_message`; a plain error
    /// contributes its text and ends the chain. No deduplication happens here,
    /// so a cause synthesized from the message repeats it.
    pub fn long_message(&self) -> String {
        match &self.cause {
            None => self.message.clone(),
            Some(Cause::Status(inner)) => {
                format!("{}{SEPARATOR}{}", self.message, inner.long_message())
            }
            Some(Cause::Error(error)) => format!("{}{SEPARATOR}{}", self.message, error),
        }
    }

    /// [`full_text`](Self::full_text) of this level followed by the cause chain
    pub fn long_full_text(&self) -> String {
        let text = self.full_text();
        match &self.cause {
            None => text,
            Some(Cause::Status(inner)) => format!("{text}{SEPARATOR}{}", inner.long_full_text()),
            Some(Cause::Error(error)) => format!("{text}{SEPARATOR}{error}"),
        }
    }

    /// Long message, details, text-shaped data and full help, `; `-joined.
    ///
    /// Empty segments are skipped.
    pub fn full_text(&self) -> String {
        let mut text = self.long_message();
        push_segment(&mut text, &self.details);
        if let Some(data) = self.data.as_deref().and_then(|payload| payload.as_text()) {
            push_segment(&mut text, data);
        }
        push_segment(&mut text, &self.full_help());
        text
    }

    /// Help for every audience plus each distinct per-audience override.
    ///
    /// Starts from the `all` slot (empty result when that is empty); every
    /// other slot whose text has not been emitted yet is appended as
    /// `; [API] text` / `; [CLI] text`.
    pub fn full_help(&self) -> String {
        let all = self.all_help();
        if all.is_empty() {
            return String::new();
        }

        let mut help = all.to_string();
        let mut seen: HashSet<&str> = HashSet::from([all]);
        for (help_type, text) in &self.help {
            if text.is_empty() || !seen.insert(text.as_str()) {
                continue;
            }
            help.push_str(&format!(
                "{SEPARATOR}[{}] {}",
                help_type.as_str().to_uppercase(),
                text
            ));
        }
        help
    }

    /// [`long_message`](Self::long_message) as a plain error
    pub fn long_error(&self) -> MessageError {
        MessageError::new(self.long_message())
    }

    /// [`long_full_text`](Self::long_full_text) as a plain error
    pub fn full_text_error(&self) -> MessageError {
        MessageError::new(self.long_full_text())
    }
}

fn push_segment(text: &mut String, segment: &str) {
    if segment.is_empty() {
        return;
    }
    if !text.is_empty() {
        text.push_str(SEPARATOR);
    }
    text.push_str(segment);
}
