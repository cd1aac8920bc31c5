//! Tests for the bootstrap core.

mod support;
