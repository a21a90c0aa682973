// Text processing — markup stripping and word-frequency counting.
//
// Both halves are pure functions. The article extract arrives as HTML;
// clean::strip_markup turns it into plain text, and frequency::top_words
// counts it.

pub mod clean;
pub mod frequency;
