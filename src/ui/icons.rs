//! Named icon identifiers mapped to terminal glyphs.
//!
//! Identifiers follow the icon-font names used by the mock. An unknown name
//! degrades to [`FALLBACK`] rather than failing.

pub const FALLBACK: &str = "·";

pub fn glyph(name: &str) -> &'static str {
    match name {
        "home" => "⌂",
        "people" => "👥",
        "play-circle" => "▶",
        "person-circle" => "👤",
        "notifications" => "🔔",
        "menu" => "☰",
        "headset" => "🎧",
        "search" => "🔍",
        "message" => "✉",
        "photo" => "📷",
        "thumbs-up-outline" => "👍",
        "chatbubble-outline" => "💬",
        "send-outline" => "➤",
        _ => FALLBACK,
    }
}
