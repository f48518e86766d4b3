//! Android test application: a single activity that shows a string
//! supplied by the native library and runs a small arithmetic self-test.
//!
//! The portable parts (arithmetic, layout resolution, the activity itself)
//! build on every target so they can be tested on the host. The JNI export
//! and the `android_main` entry point only exist on Android.

pub mod activity;
pub mod arith;
pub mod config;
pub mod error;
pub mod view;

#[cfg(target_os = "android")]
mod android;
#[cfg(target_os = "android")]
pub mod native;

pub use activity::{MainActivity, StringSource};
pub use arith::{self_test, sum, sum_to, SelfTestReport};
pub use config::Config;
pub use error::StartupError;

/// Greeting handed out by the native library.
pub const NATIVE_GREETING: &str = "Hello from Rust";
