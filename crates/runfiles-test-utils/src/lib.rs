//! Shared test utilities for the runfiles workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`env`]: [`ScopedEnv`](env::ScopedEnv) for serialized, self-restoring
//!   environment mutation
//! - [`fixture`]: [`RunfilesFixture`](fixture::RunfilesFixture) builder for
//!   on-disk runfiles trees and manifests
//! - [`logging`]: tracing subscriber setup for tests

pub mod env;
pub mod fixture;
pub mod logging;
