//! Public server-rendered pages.

pub mod pages;
