// HTML stripping — turn an article extract into plain text.
//
// The MediaWiki `prop=extracts` response is HTML (paragraphs, headings,
// the occasional inline markup). We parse it properly instead of
// regex-stripping so that entities decode and malformed fragments don't
// leak tag soup into the token stream.

use scraper::Html;

/// Strip all markup from raw extract HTML, returning the concatenated
/// text content.
///
/// Pure function; never errors. Input with no text content (or no input
/// at all) yields an empty or whitespace-only string, which callers treat
/// as the failure condition.
pub fn strip_markup(raw: &str) -> String {
    let document = Html::parse_document(raw);
    document.root_element().text().collect()
}
