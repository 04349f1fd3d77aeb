//! Binary Test Harness
//!
//! `TestServer` spawns the actual `envpaged` binary with a controlled
//! environment, exercising CLI parsing, config loading and the one-time
//! process environment capture.


pub use server::TestServer;
