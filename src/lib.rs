// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mapty: log running and cycling workouts on a map
//!
//! This crate provides the backend for a single-page workout tracker. The
//! browser forwards map clicks, form submissions and list clicks; the
//! backend validates them, keeps the session's workouts in memory, and
//! answers with the render commands that keep the list and the map in sync.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod time_utils;

use config::Config;
use session::Session;
use tokio::sync::Mutex;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Events are applied one at a time, in arrival order.
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            config,
            session: Mutex::new(session),
        }
    }
}
