//! Live station departures server.
//!
//! Fetches Transperth live train times for a single station, normalizes
//! every departure to a minutes-from-now countdown, splits the board into
//! Perth-bound and outbound lists sorted by imminence, and serves the
//! result as JSON.

pub mod board;
pub mod config;
pub mod domain;
pub mod transperth;
pub mod web;
