//! Scrape completed match listings and per-player overview statistics from
//! [vlr.gg](https://www.vlr.gg), and export the statistics as CSV.

pub use client::VlrClient;
pub use error::{Result, VlrError};
pub use model::*;

mod client;
mod error;
mod model;
mod output;
mod vlr_scraper;
