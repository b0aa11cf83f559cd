//! DDL viewer pane for a database management client.
//!
//! `app` holds the viewer controller and the ports it is injected with,
//! `infra` the in-memory adapters backing those ports, `ui` the ratatui
//! rendering of the viewer state.

pub mod app;
pub mod domain;
pub mod infra;
pub mod ui;
