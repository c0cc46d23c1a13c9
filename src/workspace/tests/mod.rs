//! Unit tests for workspace membership.
