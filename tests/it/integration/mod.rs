//! Integration tests: full pointer sessions across several operations.

mod replay_tests;
