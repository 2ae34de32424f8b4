//! Slash command parsing and input completion.
//!
//! Commands start with `/`; anything else is an outgoing message.
//! Completion is context-aware: command names after `/`, language names
//! after `/lang `, emoji codes after a `:`-prefixed word.

use veil_core::{Language, emoji};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a chat with a peer.
    Chat {
        /// Username or phone number.
        target: String,
    },
    /// Return to peer selection.
    Back,
    /// Toggle code-embedding mode.
    ToggleCode,
    /// Toggle cloak mode.
    ToggleCloak,
    /// Select the template language.
    Lang {
        /// Requested language name.
        language: String,
    },
    /// Send a photo from a file.
    Photo {
        /// Path to the image file.
        path: String,
    },
    /// Show the command summary.
    Help,
    /// Quit the client.
    Quit,
    /// Plain outgoing message.
    Message {
        /// Message text.
        content: String,
    },
    /// Unrecognized command.
    Unknown {
        /// The raw input.
        input: String,
    },
    /// Recognized command with missing or malformed arguments.
    InvalidArgs {
        /// Usage string to surface.
        usage: &'static str,
    },
}

/// Command names offered by completion, sorted.
const COMMANDS: &[&str] =
    &["/back", "/chat", "/help", "/lang", "/photo", "/quit", "/togglecloak", "/togglecode"];

/// Parse one input line.
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return Command::Message { content: trimmed.to_string() };
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or_default().to_ascii_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match head.as_str() {
        "/chat" => match arg {
            Some(target) => Command::Chat { target: target.to_string() },
            None => Command::InvalidArgs { usage: "/chat <username or phone>" },
        },
        "/back" => Command::Back,
        "/togglecode" => Command::ToggleCode,
        "/togglecloak" => Command::ToggleCloak,
        "/lang" => match arg {
            Some(language) => Command::Lang { language: language.to_string() },
            None => Command::InvalidArgs { usage: "/lang <c|cpp|java|python>" },
        },
        "/photo" => match arg {
            Some(path) => Command::Photo { path: path.to_string() },
            None => Command::InvalidArgs { usage: "/photo <file_path>" },
        },
        "/help" => Command::Help,
        "/quit" | "/exit" | "/q" => Command::Quit,
        _ => Command::Unknown { input: trimmed.to_string() },
    }
}

/// Complete the input line, if a completion applies.
///
/// Returns the full replacement line. `None` when nothing matches or
/// the line is already complete.
pub fn complete(input: &str) -> Option<String> {
    // Command names: a single '/'-word
    if input.starts_with('/') && !input.contains(' ') {
        return COMMANDS
            .iter()
            .find(|c| c.starts_with(input) && **c != input)
            .map(|c| (*c).to_string());
    }

    // Language names after /lang
    if let Some(partial) = input.strip_prefix("/lang ") {
        return Language::ALL
            .iter()
            .map(|l| l.name())
            .find(|n| n.starts_with(partial) && *n != partial)
            .map(|n| format!("/lang {n}"));
    }

    // Emoji codes on the final word
    let (head, last) = input.rsplit_once(' ').map_or(("", input), |(h, l)| (h, l));
    if last.starts_with(':') {
        return emoji::completions(last).find(|code| *code != last).map(|code| {
            if head.is_empty() { code.to_string() } else { format!("{head} {code}") }
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_message() {
        assert_eq!(parse("hello there"), Command::Message { content: "hello there".into() });
    }

    #[test]
    fn chat_requires_a_target() {
        assert_eq!(parse("/chat alice"), Command::Chat { target: "alice".into() });
        assert_eq!(parse("/chat"), Command::InvalidArgs { usage: "/chat <username or phone>" });
    }

    #[test]
    fn toggles_parse() {
        assert_eq!(parse("/togglecode"), Command::ToggleCode);
        assert_eq!(parse("/togglecloak"), Command::ToggleCloak);
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse("/TOGGLECODE"), Command::ToggleCode);
        assert_eq!(parse("/Lang python"), Command::Lang { language: "python".into() });
    }

    #[test]
    fn lang_requires_an_argument() {
        assert_eq!(parse("/lang java"), Command::Lang { language: "java".into() });
        assert_eq!(parse("/lang"), Command::InvalidArgs { usage: "/lang <c|cpp|java|python>" });
    }

    #[test]
    fn quit_aliases() {
        assert_eq!(parse("/quit"), Command::Quit);
        assert_eq!(parse("/exit"), Command::Quit);
        assert_eq!(parse("/q"), Command::Quit);
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(parse("/frobnicate"), Command::Unknown { input: "/frobnicate".into() });
    }

    #[test]
    fn completes_command_names() {
        assert_eq!(complete("/togglec").as_deref(), Some("/togglecloak"));
        assert_eq!(complete("/ch").as_deref(), Some("/chat"));
        assert_eq!(complete("/chat"), None);
    }

    #[test]
    fn completes_language_names() {
        assert_eq!(complete("/lang py").as_deref(), Some("/lang python"));
        assert_eq!(complete("/lang python"), None);
    }

    #[test]
    fn completes_emoji_codes() {
        assert_eq!(complete("hello :smi").as_deref(), Some("hello :smile:"));
        assert_eq!(complete(":thu").as_deref(), Some(":thumbsup:"));
        assert_eq!(complete("no codes here"), None);
    }
}
