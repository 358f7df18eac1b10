//! Managed line blocks for run-control files
//!
//! Maintains a single delimited block of lines inside an otherwise
//! user-owned text file (shell rc files and the like). The block is
//! inserted, rewritten, or removed as a unit; everything around it is
//! preserved byte for byte.

pub mod block;
pub mod error;
pub mod io;
pub mod reconcile;

pub use block::{END_LINE, START_LINE, Segments};
pub use error::{Error, Result};
pub use reconcile::reconcile;
