//! Unit tests for the roster context.
