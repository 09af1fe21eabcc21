//! Workspace tooling package.
//!
//! Carries no code of its own; it exists so `rusty-hook` can install the
//! repository's pre-commit hooks during `cargo test`.
