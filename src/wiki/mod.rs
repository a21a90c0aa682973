// Wikipedia API client — topic lookup and article extract retrieval.
//
// Built on reqwest against the MediaWiki Action API. Two round-trips per
// article: resolve the topic to a page id, then fetch that page's extract.

pub mod article;
pub mod client;

pub use article::{fetch_article, Article, FetchError};
pub use client::WikiClient;
