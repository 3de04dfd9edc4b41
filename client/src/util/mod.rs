//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps `web-sys` glue out of components so state logic and SSR rendering
//! never touch the DOM directly.

pub mod viewport;
