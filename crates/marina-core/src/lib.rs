//! `marina-core` — foundational types for the marinas position calculator.
//!
//! This crate is a dependency of every other `marina-*` crate.  It has no
//! `marina-*` dependencies and one external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `MarinaId`, `SegmentId`                               |
//! | [`geo`]         | `Point`, truncating float→integer conversion          |
//! | [`time`]        | `SimTime`                                             |
//! | [`node`]        | `Node` — one marina at one instant                    |
//! | [`config`]      | `GridConfig` and its standard defaults                |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod node;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    DEFAULT_MARINAS_DISTANCE, DEFAULT_NODES_PER_GROUP, DEFAULT_NODES_PER_LINE,
    DEFAULT_STEP_DURATION_SECS, GridConfig, SPEED_DIVISOR,
};
pub use error::{CoreError, CoreResult};
pub use geo::{Point, truncate};
pub use ids::{MarinaId, SegmentId};
pub use node::Node;
pub use time::SimTime;
