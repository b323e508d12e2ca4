//! Fault interceptor, error definitions, and the runtime types guarded
//! operations act on.
//!
//! Foundation crate -- no I/O dependencies. Interception needs
//! `panic = "unwind"`; under `panic = "abort"` nothing can be caught.

pub mod chan;
pub mod error;
pub mod hook;
pub mod interceptor;
pub mod types;

pub use chan::Chan;
pub use error::{BoxError, FaultLocation, GuardError, GuardResult};
pub use interceptor::{recover, recover_into};
pub use types::{Mapping, Seq, Window};
