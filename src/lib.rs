//! # League Hub
//!
//! A small web application for running a sports league: player
//! registration and market, match listings, groups with team standings
//! and rosters, leaderboards, and league records. All state lives in a
//! single JSON document, read whole and written whole per request.
//!
//! ## Architecture
//!
//! - **models**: The league document and all nested entities, plus the
//!   mutation operations applied to it
//! - **storage**: The document store gateway over the persisted file
//! - **api**: Axum HTTP surface (JSON views, form mutations, sessions)
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
