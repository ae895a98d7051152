//! `fl-plan` — operations → steps → routes.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`operation`] | `Operation` (checked Load/Unload), `apply_operations`     |
//! | [`step`]      | `StepDraft`, `StepCommand`, validated `Step`, `Validation`|
//! | [`impact`]    | `SegmentImpact`, `RouteImpact`, `segment_impact`          |
//! | [`route`]     | `Route`, `RouteBook` (per-vehicle queues by departure)    |
//! | [`context`]   | `RoundContext` (points, zones, fleet; read-only)          |
//! | [`session`]   | `PlanningSession` (ledger + onboard + routes)             |
//! | [`error`]     | `PlanError`, `CapacityKind`, `PlanResult<T>`              |
//!
//! # State transitions
//!
//! ```text
//! StepDraft ──validate──▶ Validation { step, ledger', onboard' }
//!     │                        │
//!     │ (error: nothing        └─▶ PlanningSession swaps ledger/onboard,
//!     │  changed)                  appends Step
//!     ▼
//! PlanningSession::commit_route ──▶ Route (+ impact) ──▶ RouteBook
//! ```
//!
//! Validation never touches the session's ledger; it works on copies and
//! hands them back on success.  A failed call leaves every input as it was.

pub mod context;
pub mod error;
pub mod impact;
pub mod operation;
pub mod route;
pub mod session;
pub mod step;


pub use context::RoundContext;
pub use error::{CapacityKind, PlanError, PlanResult};
pub use impact::{segment_impact, RouteImpact, SegmentImpact};
pub use operation::{apply_operations, Operation, OperationKind};
pub use route::{Route, RouteBook};
pub use session::PlanningSession;
pub use step::{LoadSnapshot, Step, StepCommand, StepDraft, Validation};
