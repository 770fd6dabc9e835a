//! Discourse search to Atom.
//!
//! Runs a keyword search against a Discourse forum and renders the matching
//! posts as an Atom feed.

pub mod config;
pub mod constants;
pub mod discourse;
pub mod feed;
pub mod output;
pub mod record;
