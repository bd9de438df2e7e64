//! Core orchestration logic for hardentools
//!
//! This module contains the subject contract, grouping, orchestration and
//! reporting. All system access is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Direction, Selection, RunReport)
//! - `services/` - Grouping, orchestration, status flag, overview
//! - `ports/` - Trait definitions for subjects and persistence

pub mod models;
pub mod ports;
pub mod services;
