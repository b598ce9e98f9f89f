// src/render/mod.rs

//! Derived state handed to the external renderer.
//!
//! - [`behavior`] tokenizes the `map[:rotation],...` behaviour specs given
//!   on the command line.
//! - [`helper`] holds [`RenderBehaviorHelper`]: per (map, rotation) render
//!   behaviour, zoom levels and the rotations each world was rendered in.
//! - [`template`] formats the per-map descriptor for the web front end.

pub mod behavior;
pub mod helper;
pub mod template;

pub use behavior::{BehaviorToken, parse_behavior_spec};
pub use helper::RenderBehaviorHelper;
