//! Session orchestration for the print-job seeder.
//!
//! The building blocks of one seeding run:
//!
//! - [`Session`] — queue, append-only results, and the
//!   `Ready -> Running -> {Complete | Stopping -> Stopped}` state machine.
//! - [`SessionRegistry`] — the shared id -> session map with creation,
//!   status queries, cancellation, and timed eviction.
//! - [`runner`] — the sequential execution loop that drives a session's
//!   queue through a [`Dispatch`] implementation.
//! - [`SessionEvent`] — the tagged progress events pushed to observers;
//!   transports are free to serialize them however they like.

pub mod dispatch;
pub mod events;
pub mod registry;
pub mod runner;
pub mod session;

pub use dispatch::Dispatch;
pub use events::SessionEvent;
pub use registry::{run_eviction, SessionRegistry, SessionSpec};
pub use session::{Session, SessionSnapshot, SessionStatus};
