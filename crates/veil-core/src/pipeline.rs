//! Outgoing message pipeline
//!
//! Combines emoji substitution, template embedding, and cloak encoding
//! according to the active session mode. Pure, synchronous, and free of
//! shared state: each session owns its own [`SessionMode`].
//!
//! The mode table is the behavior contract:
//!
//! | code | cloak | transmitted          | local echo                  |
//! |------|-------|----------------------|-----------------------------|
//! | off  | off   | emojified text       | emojified text              |
//! | on   | off   | code block           | same code block             |
//! | off  | on    | emojified text       | cloaked rendering           |
//! | on   | on    | code block           | delivery acknowledgment only|

use rand::Rng;

use crate::{cloak, emoji, template, template::Language};

/// Per-session transformation modes.
///
/// Mutated only by explicit user commands; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionMode {
    /// Wrap outgoing text in a code template.
    pub code: bool,
    /// Obfuscate the local echo of sent messages.
    pub cloak: bool,
    /// Template language, relevant only while `code` is on.
    pub language: Language,
}

impl Default for SessionMode {
    fn default() -> Self {
        Self { code: false, cloak: false, language: Language::C }
    }
}

impl SessionMode {
    /// Flip code-embedding mode. Returns the new value.
    pub fn toggle_code(&mut self) -> bool {
        self.code = !self.code;
        self.code
    }

    /// Flip cloak mode. Returns the new value.
    pub fn toggle_cloak(&mut self) -> bool {
        self.cloak = !self.cloak;
        self.cloak
    }
}

/// What the client shows locally for a sent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalEcho {
    /// Plain text.
    Plain(String),
    /// A code block, rendered as highlighted code by the display surface.
    Code {
        /// Fence tag language.
        language: Language,
        /// The full fenced block, identical to the transmitted payload.
        block: String,
    },
    /// Cloaked rendering of the text.
    Cloaked(String),
    /// Delivery acknowledgment only; plaintext and code are withheld.
    Delivered,
}

/// A transformed outgoing message: wire payload plus local echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    /// Payload handed to the transport.
    pub transmit: String,
    /// What to append to the local transcript.
    pub echo: LocalEcho,
}

/// Run the outgoing pipeline over one input line.
///
/// Emoji substitution always applies; template embedding and cloak
/// encoding follow the mode table. Template selection draws from the
/// injected random source.
pub fn transform<R: Rng>(mode: SessionMode, input: &str, rng: &mut R) -> Outgoing {
    let text = emoji::emojify(input);

    match (mode.code, mode.cloak) {
        (false, false) => Outgoing { transmit: text.clone(), echo: LocalEcho::Plain(text) },
        (true, false) => {
            let block = template::encode(&text, mode.language, rng);
            Outgoing {
                transmit: block.clone(),
                echo: LocalEcho::Code { language: mode.language, block },
            }
        },
        (false, true) => {
            let echo = LocalEcho::Cloaked(cloak::cloak(&text));
            Outgoing { transmit: text, echo }
        },
        (true, true) => Outgoing {
            transmit: template::encode(&text, mode.language, rng),
            echo: LocalEcho::Delivered,
        },
    }
}
