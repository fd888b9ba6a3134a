//! `nr-core` — foundational types for the `nr_rr` scenario toolkit.
//!
//! This crate is a dependency of every other `nr-*` crate.  It has no `nr-*`
//! dependencies and only `thiserror` and `serde` as external ones.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CellId`, `TerminalId`, `FlowId`, `BwpId`             |
//! | [`geo`]         | `Position` (metres, scenario-local frame)             |
//! | [`qos`]         | `QosClass` bearer enum                                |
//! | [`window`]      | `FlowWindow` (simulation time / traffic start)        |
//! | [`error`]       | `NrError`, `NrResult`                                 |

pub mod error;
pub mod geo;
pub mod ids;
pub mod qos;
pub mod window;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NrError, NrResult};
pub use geo::Position;
pub use ids::{BwpId, CellId, FlowId, TerminalId};
pub use qos::QosClass;
pub use window::FlowWindow;
