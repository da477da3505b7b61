//! Unit tests for splitboard.

mod snapshot_tests;
mod split_tests;
