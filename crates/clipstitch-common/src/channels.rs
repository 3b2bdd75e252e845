//! Display names of the recorded channels.

/// Shown when a record carries no channel at all.
pub const UNKNOWN_CHANNEL_NAME: &str = "Unknown channel";

/// Known channel slugs and their display names.
pub const CHANNELS: &[(&str, &str)] = &[
    ("olgaenvivo_", "Olga en Vivo"),
    ("luzutv", "Luzu TV"),
    ("todonoticias", "Todo Noticias"),
    ("neuramedia", "Neura Media"),
    ("lanacion", "La Nación"),
    ("c5n", "C5N"),
    ("a24com", "A24"),
    ("telefenoticias", "Telefe Noticias"),
    ("urbanaplayfm", "Urbana Play FM"),
];

/// Human-readable name of a channel slug.
///
/// Lookup is case-insensitive; unknown slugs are returned as given.
///
/// # Examples
///
/// ```
/// use clipstitch_common::channels::channel_display_name;
///
/// assert_eq!(channel_display_name("todonoticias"), "Todo Noticias");
/// assert_eq!(channel_display_name("C5N"), "C5N");
/// assert_eq!(channel_display_name("radio10"), "radio10");
/// ```
pub fn channel_display_name(slug: &str) -> &str {
    let trimmed = slug.trim();
    if trimmed.is_empty() {
        return UNKNOWN_CHANNEL_NAME;
    }
    CHANNELS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(trimmed))
        .map(|(_, name)| *name)
        .unwrap_or(trimmed)
}
