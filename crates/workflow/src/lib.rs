//! The confirm/execute workflow.
//!
//! A [`Form`] holds everything the user can edit (two paths and the toggle
//! lists). Confirming it runs, in order:
//!
//! 1. validate the document root (abort with no side effects if invalid);
//! 2. persist the form, if saving is enabled;
//! 3. delete every enabled cache, best-effort;
//! 4. pick one enabled DLC uniformly at random;
//! 5. install its theme (or clear the installed one).
//!
//! Steps 3 and 4 are not transactional: a failed pick does not restore
//! deleted caches.

pub mod error;
pub mod form;
pub mod workflow;

pub use error::WorkflowError;
pub use form::{Availability, Form};
pub use workflow::{ExecutionSummary, Options, State, Workflow};
