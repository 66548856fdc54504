//! Tests for the token codec and token cache service

mod fixtures;

mod cleanup_tests;
