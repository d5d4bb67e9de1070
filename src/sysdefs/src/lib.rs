//! Shared definitions for the rawunix crates.
//!
//! `constants` holds every numeric value the layer publishes or checks against,
//! together with the errno plumbing used by all forwarders. `data` holds the
//! plain records that lookups copy out of libc's static buffers.
pub mod constants;
pub mod data;
