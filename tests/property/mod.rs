//! Property-based tests for digest and commitment guarantees

mod determinism;
