//! Test Module
//!
//! Scenario suites for the StrokeAssist core.
//!
//! ## Test Categories
//! - `brain_tests`: Rule order, matching policy and canned answers
//! - `widget_tests`: Chat session flow, typing indicator, failure handling
