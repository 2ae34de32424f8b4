//! Template catalog and code embedding
//!
//! Embeds outgoing text into a randomly chosen source-code skeleton for
//! a fixed, closed set of languages. Each skeleton contains exactly one
//! `{{message}}` placeholder; after escaping and substitution the result
//! stays syntactically well-formed for its language.

use std::{fmt, str::FromStr};

use rand::Rng;
use thiserror::Error;

/// The single substitution point inside every template skeleton.
const PLACEHOLDER: &str = "{{message}}";

/// A language the template catalog supports. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C (string literals escape `"`).
    C,
    /// C++ (string literals escape `"`).
    Cpp,
    /// Java (string literals escape `\` and `"`).
    Java,
    /// Python (no escaping needed for embedded text).
    Python,
}

impl Language {
    /// Every supported language, in catalog order.
    pub const ALL: [Language; 4] = [Language::C, Language::Cpp, Language::Java, Language::Python];

    /// Canonical lowercase name, as used in `/lang` and fence tags.
    pub fn name(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Python => "python",
        }
    }

    /// Comma-separated list of all supported language names.
    pub fn supported_names() -> String {
        Language::ALL.map(Language::name).join(", ")
    }

    /// Template skeletons for this language. Never empty.
    pub fn templates(self) -> &'static [&'static str] {
        match self {
            Language::C => C_TEMPLATES,
            Language::Cpp => CPP_TEMPLATES,
            Language::Java => JAVA_TEMPLATES,
            Language::Python => PYTHON_TEMPLATES,
        }
    }

    /// Escape `text` for embedding in this language's string literal.
    ///
    /// Java escapes backslashes before quotes; the reverse order would
    /// double-escape the backslashes inserted by the quote pass.
    fn escape(self, text: &str) -> String {
        match self {
            Language::C | Language::Cpp => text.replace('"', "\\\""),
            Language::Java => text.replace('\\', "\\\\").replace('"', "\\\""),
            Language::Python => text.to_string(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a language name is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language '{requested}'. Supported languages are: {}", Language::supported_names())]
pub struct UnknownLanguage {
    /// The name that failed to parse.
    pub requested: String,
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Language::C),
            "cpp" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            "python" => Ok(Language::Python),
            _ => Err(UnknownLanguage { requested: s.to_string() }),
        }
    }
}

/// Embed `text` into a randomly chosen template for `language`.
///
/// Selection is uniform over the language's skeletons through the
/// injected random source. The placeholder is substituted exactly once;
/// input that happens to contain the literal placeholder token is not
/// re-expanded. The result is wrapped in a fenced code block tagged with
/// the language name.
pub fn encode<R: Rng>(text: &str, language: Language, rng: &mut R) -> String {
    let templates = language.templates();
    let skeleton = templates[rng.random_range(0..templates.len())];
    let body = skeleton.replacen(PLACEHOLDER, &language.escape(text), 1);
    format!("```{language}\n{body}\n```")
}

/// Embed `text` for a language named at runtime.
///
/// Unknown languages yield a fenced diagnostic block naming the
/// supported set instead of an error; callers surface it to the local
/// user.
pub fn encode_named<R: Rng>(text: &str, language: &str, rng: &mut R) -> String {
    match language.parse::<Language>() {
        Ok(lang) => encode(text, lang, rng),
        Err(e) => format!("```\nError: {e}\n```"),
    }
}

const C_TEMPLATES: &[&str] = &[
    r#"#include <stdio.h>
#include <string.h>

void printMessage(const char* msg) {
    printf("%s\n", msg);
}

int main() {
    printMessage("{{message}}");
    return 0;
}"#,
    r#"#include <stdio.h>
#include <string.h>

void echoMessage(const char* msg) {
    for (int i = 0; i < strlen(msg); i++) {
        printf("%c", msg[i]);
    }
    printf("\n");
}

int main() {
    echoMessage("{{message}}");
    return 0;
}"#,
    r#"#include <stdio.h>
#include <string.h>

void reportStatus(const char* status) {
    printf("Status report: %s\n", status);
    printf("Message length: %d bytes\n", (int)strlen(status));
}

int main() {
    reportStatus("{{message}}");
    return 0;
}"#,
];

const CPP_TEMPLATES: &[&str] = &[
    r#"#include <iostream>
#include <string>

void displayMessage(const std::string& msg) {
    std::cout << msg << std::endl;
}

int main() {
    displayMessage("{{message}}");
    return 0;
}"#,
    r#"#include <iostream>
#include <string>

class ConsoleMessenger {
public:
    void log(const std::string& msg) {
        std::cout << "LOG: " << msg << std::endl;
    }
};

int main() {
    ConsoleMessenger messenger;
    messenger.log("{{message}}");
    return 0;
}"#,
];

const JAVA_TEMPLATES: &[&str] = &[
    r#"class MyProgram {
    public static void main(String[] args) {
        System.out.println("{{message}}");
    }
}"#,
    r#"class MessageHandler {
    public void processMessage(String message) {
        System.out.println("Processing message: " + message);
    }
}

public class Main {
    public static void main(String[] args) {
        MessageHandler handler = new MessageHandler();
        handler.processMessage("{{message}}");
    }
}"#,
];

const PYTHON_TEMPLATES: &[&str] = &[
    r#"import sys

def output_message(msg):
    print(msg)

if __name__ == "__main__":
    output_message("{{message}}")"#,
    r#"class MessageProcessor:
    def __init__(self, message):
        self.message = message

    def display(self):
        print(f"Message: {self.message}")

if __name__ == "__main__":
    processor = MessageProcessor("{{message}}")
    processor.display()"#,
];

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn every_language_has_templates_with_one_placeholder() {
        for lang in Language::ALL {
            let templates = lang.templates();
            assert!(!templates.is_empty());
            for template in templates {
                assert_eq!(template.matches(PLACEHOLDER).count(), 1, "{lang}: {template}");
            }
        }
    }

    #[test]
    fn encode_is_fenced_and_tagged() {
        for lang in Language::ALL {
            let block = encode("hello", lang, &mut rng(1));
            assert!(block.starts_with(&format!("```{lang}\n")));
            assert!(block.ends_with("\n```"));
        }
    }

    #[test]
    fn encode_embeds_text_exactly_once() {
        for lang in Language::ALL {
            let block = encode("unique marker 4471", lang, &mut rng(2));
            assert_eq!(block.matches("unique marker 4471").count(), 1, "{lang}");
            assert!(!block.contains(PLACEHOLDER), "{lang}");
        }
    }

    #[test]
    fn placeholder_in_input_is_not_reexpanded() {
        let block = encode("say {{message}} twice", Language::Python, &mut rng(3));
        // The literal token survives from the input; it is never substituted again.
        assert_eq!(block.matches(PLACEHOLDER).count(), 1);
        assert_eq!(block.matches("say {{message}} twice").count(), 1);
    }

    #[test]
    fn c_escapes_quotes() {
        let block = encode(r#"say "hi""#, Language::C, &mut rng(4));
        assert!(block.contains(r#"say \"hi\""#));
    }

    #[test]
    fn java_escapes_backslash_before_quote() {
        let block = encode(r#"path\to "x""#, Language::Java, &mut rng(5));
        assert!(block.contains(r#"path\\to \"x\""#));
    }

    #[test]
    fn python_passes_text_through() {
        let block = encode("no escaping here", Language::Python, &mut rng(6));
        assert!(block.contains("no escaping here"));
    }

    #[test]
    fn selection_is_deterministic_under_fixed_seed() {
        let a = encode("hello", Language::C, &mut rng(7));
        let b = encode("hello", Language::C, &mut rng(7));
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_language_yields_diagnostic() {
        let block = encode_named("hello", "rust", &mut rng(8));
        assert!(block.contains("unsupported language 'rust'"));
        assert!(block.contains("c, cpp, java, python"));
        assert!(!block.contains("hello"));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("PYTHON".parse::<Language>(), Ok(Language::Python));
        assert!("rust".parse::<Language>().is_err());
    }
}
