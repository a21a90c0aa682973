// Composition tests — verifying that the pure functions chain together
// correctly.
//
// These exercise the data flow strip_markup -> top_words ->
// serialize_counts without any network calls or database access. The
// inputs are shaped like real MediaWiki extract HTML.

use wordmill::text::clean::strip_markup;
use wordmill::text::frequency::{serialize_counts, top_words};

// ============================================================
// Chain: strip_markup -> top_words
// ============================================================

#[test]
fn markup_does_not_leak_into_counts() {
    let html = "<p>The <b>cat</b> is a small <a href=\"/wiki/Carnivore\">carnivorous</a> \
                mammal. The cat is domesticated.</p>";

    let counts = top_words(&strip_markup(html), 10);
    let words: Vec<&str> = counts.iter().map(|(w, _)| w.as_str()).collect();

    // No token should carry tag or attribute fragments.
    for word in &words {
        assert!(!word.contains('<'), "tag fragment leaked: {word}");
        assert!(!word.contains('>'), "tag fragment leaked: {word}");
        assert!(!word.contains("href"), "attribute leaked: {word}");
    }
    assert_eq!(counts[0], ("The".to_string(), 2));
    assert_eq!(counts[1], ("cat".to_string(), 2));
}

#[test]
fn paragraph_boundaries_separate_tokens() {
    // Without the inter-paragraph newline, "one.Two" would count as a
    // single token.
    let html = "<p>Paragraph one.</p>\n<p>Two follows.</p>";
    let counts = top_words(&strip_markup(html), 10);
    let words: Vec<&str> = counts.iter().map(|(w, _)| w.as_str()).collect();
    assert!(words.contains(&"one."));
    assert!(words.contains(&"Two"));
}

#[test]
fn heading_markup_is_flattened() {
    let html = "<h2><span id=\"Etymology\">Etymology</span></h2>\n<p>From Old English.</p>";
    let text = strip_markup(html);
    let counts = top_words(&text, 10);
    let words: Vec<&str> = counts.iter().map(|(w, _)| w.as_str()).collect();
    assert!(words.contains(&"Etymology"));
    assert!(words.contains(&"English."));
}

// ============================================================
// Chain: top_words -> serialize_counts
// ============================================================

#[test]
fn serialization_round_trips_the_scenario() {
    let counts = top_words("the cat sat on the mat the cat ran", 3);
    assert_eq!(serialize_counts(&counts), "the: 3, cat: 2, sat: 1");
}

#[test]
fn full_chain_from_extract_to_stored_string() {
    let html = "<p>the cat sat on the mat the cat ran</p>";
    let counts = top_words(&strip_markup(html), 3);
    assert_eq!(serialize_counts(&counts), "the: 3, cat: 2, sat: 1");
}

#[test]
fn single_word_article() {
    let counts = top_words(&strip_markup("<p>word</p>"), 5);
    assert_eq!(counts, vec![("word".to_string(), 1)]);
    assert_eq!(serialize_counts(&counts), "word: 1");
}
