//! Roomplan Harness: everything between a user and the search engine.
//!
//! The harness plugs the kernel's world model into the search crate
//! ([`world::RoomWorld`]), reads maps, goals and configuration from text,
//! and turns search results into reports.
//!
//! The harness does NOT implement search or transitions; it delegates to
//! `roomplan_search` and `roomplan_kernel`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod error;
pub mod map_text;
pub mod report;
pub mod runner;
pub mod world;
pub mod worlds;
