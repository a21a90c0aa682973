// Wordmill: Wikipedia word-frequency analysis service
//
// This is the library root. Each module corresponds to one stage of the
// fetch -> clean -> count -> persist pipeline, plus the web layer that
// exposes it over HTTP.

pub mod config;
pub mod db;
pub mod pipeline;
pub mod text;
pub mod web;
pub mod wiki;
