//! Emoji substitution
//!
//! Replaces short `:code:` tokens in outgoing text with their glyphs.
//! Substitution is literal (non-regex) and applied sequentially in table
//! order. Glyphs never match code syntax, so a replacement's output is
//! not itself re-scanned.

/// Emoji code to glyph mapping, applied in order.
///
/// Codes are unique. Unmatched code-like substrings are left verbatim.
pub const EMOJI_TABLE: &[(&str, &str)] = &[
    (":smile:", "😊"),
    (":happy:", "😀"),
    (":sad:", "😔"),
    (":lol:", "😂"),
    (":thumbsup:", "👍"),
    (":shrug:", "🤷"),
    (":rocket:", "🚀"),
    (":fire:", "🔥"),
    (":cool:", "😎"),
    (":hot:", "🥵"),
    (":party:", "🥳"),
    (":heart:", "❤️"),
    (":broken_heart:", "💔"),
    (":two_hearts:", "💕"),
    (":sparkling_heart:", "💖"),
    (":revolving_hearts:", "💞"),
    (":cupid:", "💘"),
    (":heartbeat:", "💓"),
    (":heart_decoration:", "💟"),
    (":love_letter:", "💌"),
    (":kiss:", "😘"),
    (":kiss-mark:", "💋"),
    (":couple_with_heart:", "💑"),
    (":wink:", "😉"),
    (":crying:", "😢"),
    (":laughing:", "😆"),
    (":star_struck:", "🤩"),
    (":thinking:", "🤔"),
    (":tada:", "🎉"),
    (":100:", "💯"),
    (":eyes:", "👀"),
    (":pray:", "🙏"),
    (":ok_hand:", "👌"),
];

/// Replace every emoji code in `text` with its glyph.
///
/// Pure transform with no error conditions. Text without any codes is
/// returned unchanged.
pub fn emojify(text: &str) -> String {
    let mut out = text.to_string();
    for (code, glyph) in EMOJI_TABLE {
        if out.contains(code) {
            out = out.replace(code, glyph);
        }
    }
    out
}

/// Emoji codes starting with `prefix`, for input completion.
pub fn completions(prefix: &str) -> impl Iterator<Item = &'static str> + '_ {
    EMOJI_TABLE.iter().map(|(code, _)| *code).filter(move |code| code.starts_with(prefix))
}
