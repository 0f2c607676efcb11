//! # Chartview
//!
//! A rotating browser view of batch simulation output. A simulation driven in
//! batch mode leaves one directory per run under a shared output root, each
//! holding the run's chart images and the `test_config` it was launched with.
//! Chartview serves those artifacts for visual review: every page load shows
//! one run's charts and config, then moves a shared cursor to the next run,
//! wrapping around at the end of the list.
//!
//! The filesystem is the data source — there is no database and no manifest.
//! Directory listings are taken fresh on every request, so runs added or
//! removed while the server is up show up (or disappear) on the next load.
//! The only state carried between requests is the rotation cursor.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Startup configuration, validated before the port is bound |
//! | [`scan`] | Lists run directories, their chart images, and reads run configs |
//! | [`cursor`] | The shared rotation index over the run list |
//! | [`render`] | Maud templates for the run page and its error/empty states |
//! | [`serve`] | The axum router, the single serving route, and the chart file layer |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Pages are generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Run directory names and config file contents are
//! arbitrary text produced by an external batch process; Maud escapes every
//! interpolation, so they cannot corrupt or inject into the page.
//!
//! ## One Snapshot Per Request
//!
//! The run list is enumerated once per request and that snapshot drives both
//! cursor selection and content reads. A run deleted mid-request surfaces as
//! a diagnostic 500 on that request only; the process stays up.
//!
//! ## Shared Cursor
//!
//! All viewers share one rotation cursor — reloading in two browser windows
//! interleaves the rotation between them. This matches how the tool is used:
//! a single operator paging through last night's batch.

pub mod config;
pub mod cursor;
pub mod render;
pub mod scan;
pub mod serve;
