//! Integration tests for the proof-of-invention commitment engine

mod config_integration;
mod digest_verification;
mod test_utils;
