//! Application services (use cases).
//!
//! These services work on domain values only; quotes are always supplied by
//! the caller.

pub mod proposal;
