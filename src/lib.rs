//! Lapacho - a terminal-based investment briefing deck.
//!
//! Lapacho renders a bilingual, five-page briefing for an investment-advisory
//! firm in the terminal: animated statistics, comparison charts, and a
//! contact form, navigated with vim-style keys.
//!
//! # Features
//!
//! - Count-up statistics with cubic ease-out, fired once per page reveal
//! - Comparison bar charts with a visibility floor for small values
//! - English and Spanish content embedded at compile time
//! - Contact form with field validation and a pluggable submission sink
//! - Clipboard integration for the firm's contact card
//!
//! # Example
//!
//! ```ignore
//! use lapacho::content::{Deck, Locale};
//! use lapacho::numeric::extract_numeric;
//!
//! let deck = Deck::load(Locale::En)?;
//! let parsed = extract_numeric(&deck.home.stats[0].value);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod content;
pub mod counter;
pub mod error;
pub mod form;
pub mod numeric;
pub mod ui;
pub mod util;

pub use error::{LapachoError, Result};
