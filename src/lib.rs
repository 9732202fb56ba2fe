//! Space Garbage (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benchmarks share one import path.

pub use space_garbage_core as core;
pub use space_garbage_engine as engine;
pub use space_garbage_input as input;
pub use space_garbage_term as term;
pub use space_garbage_types as types;
