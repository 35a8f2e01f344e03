//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence concerns so route handlers can stay
//! focused on request validation and response shaping. The analysis engine
//! lives in `crate::analysis` and needs no service layer: it is pure.

pub mod board;
