//! Economic indicators and market news server.
//!
//! Thin HTTP layer over three upstream providers: FRED for time series,
//! BLS for employment statistics, and NewsAPI for article search. JSON
//! endpoints are key-protected; the HTML pages are public and degrade to
//! an empty article list when an upstream misbehaves.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod indicators;
pub mod logging;
pub mod sanitize;
pub mod web;
