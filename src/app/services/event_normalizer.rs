//! Event-type normalisation for storm-event records
//!
//! The raw `EVTYPE` field is free text entered by many hands over several
//! decades: mixed case, stray punctuation, embedded slashes and plus
//! signs. Normalisation is purely syntactic; semantically equivalent
//! labels such as "tstm wind" and "thunderstorm wind" remain distinct
//! groups.

/// Canonicalise a raw event-type label into a grouping key.
///
/// Lowercases the input and treats every blank or ASCII punctuation
/// character (the literal `+` included) as a separator. Runs of
/// separators collapse to a single interior space and leading/trailing
/// separators are dropped, so `"Tornado"`, `"tornado!"`, and
/// `" TORNADO "` all produce the same key.
///
/// Pure and idempotent: normalising an already-normalised key returns it
/// unchanged.
pub fn normalize_event_type(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.chars() {
        if ch.is_whitespace() || ch.is_ascii_punctuation() {
            // Leading separators produce no output at all
            pending_separator = !key.is_empty();
        } else {
            if pending_separator {
                key.push(' ');
                pending_separator = false;
            }
            for lowered in ch.to_lowercase() {
                key.push(lowered);
            }
        }
    }

    key
}
