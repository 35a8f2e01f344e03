//! Idea board server: board storage plus a local text-analysis engine that
//! suggests, clusters, summarizes, searches and classifies sticky-note ideas.

pub mod analysis;
pub mod config;
pub mod db;
pub mod routes;
pub mod services;
pub mod state;
