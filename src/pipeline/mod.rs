//! Daily run pipeline.
//!
//! Items from any [`ItemSource`](crate::gazette::ItemSource) flow through:
//! 1. `run_policies()`: every department policy over every item
//! 2. `DispatchPlan::build()`: relevant items grouped per department with recipients
//! 3. `RunSummary::from_runs()`: counts and the cross-department matrix
//!
//! Nothing here fetches, formats, or sends.

pub mod dispatch;
pub mod runner;
pub mod summary;

pub use dispatch::{Dispatch, DispatchPlan};
pub use runner::{Evaluation, PolicyRun, run_policies};
pub use summary::RunSummary;
