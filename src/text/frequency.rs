// Word-frequency counting over whitespace-delimited tokens.
//
// Tokenization is deliberately naive: no lowercasing, no punctuation
// stripping, no stop words. "The" and "the" are different words, and
// "cat." is not "cat". Counts reflect the text exactly as written.

use std::collections::HashMap;

/// Count token occurrences and return the `n` most frequent, highest
/// count first.
///
/// Ties are broken by first appearance in the token stream: the sort is
/// stable over first-seen order, so a token that showed up earlier ranks
/// ahead of an equally-frequent later one. If the text has fewer than `n`
/// distinct tokens, all of them are returned.
pub fn top_words(text: &str, n: usize) -> Vec<(String, u64)> {
    // Tokens in first-seen order, with a side index for O(1) lookup.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u64)> = Vec::new();

    for token in text.split_whitespace() {
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by is stable, so equal counts keep their first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(n)
        .map(|(word, count)| (word.to_string(), count))
        .collect()
}

/// Render counted pairs in the form stored in the history log:
/// `"the: 3, cat: 2"`.
pub fn serialize_counts(counts: &[(String, u64)]) -> String {
    counts
        .iter()
        .map(|(word, count)| format!("{word}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}
