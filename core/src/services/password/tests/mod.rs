//! Tests for the password hashing service

mod service_tests;
