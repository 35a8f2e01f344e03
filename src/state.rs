//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool for board storage and the analysis engine. The
//! engine is immutable and shared; there is no per-board live state to
//! guard, so no locks live here.

use sqlx::PgPool;

use crate::analysis::Engine;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the pool and engine are both cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub engine: Engine,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, engine: Engine) -> Self {
        Self { pool, engine }
    }
}
