//! Field picker taskpane: root module wiring the state, the commands that
//! drive it, and the document operations they trigger.
//!
//! Responsibilities
//! - Own the single live `TaskpaneState` model (catalog, active tab, filter,
//!   sort direction, insertion strategy, pending notice).
//! - Dispatch `Msg` commands through `update::update`, the only place state
//!   and document change.
//! - Embed placeholder tokens with either insertion strategy and unwrap
//!   hidden regions on demand, through the `host::HostDocument` seam.
//!
//! Rendering, file picking and the bindings to a real word processor live
//! outside this crate; `host::MemoryDocument` stands in for the latter.

pub mod cleanup;
pub mod helpers;
pub mod host;
pub mod insertion;
mod messages;
mod props;
mod state;
mod update;

pub use host::{HostDocument, HostError, MemoryDocument, Transaction};
pub use insertion::InsertionStrategy;
pub use messages::Msg;
pub use props::TaskpaneProps;
pub use state::{ListView, TaskpaneState, ViewState};
pub use update::update;
