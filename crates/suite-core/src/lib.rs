//! # CommandSuite Core Library
//!
//! The reactive state layer behind the CommandSuite dashboard. Everything
//! here is plain single-threaded state: discrete mutations driven by user
//! intents, a virtual-clock timer, and scroll observations, composed into
//! read-only view snapshots for whatever shell renders them.
//!
//! ## Modules
//!
//! - `catalog`: compiled-in reference tables (capabilities, industries,
//!   agent seed, pricing tiers)
//! - `compose`: view derivation and intent dispatch
//! - `overlay`: menu overlay state machine and the scroll-lock capability
//! - `preference`: the persisted dark/light display preference
//! - `random`: injectable random source for the simulator
//! - `selection`: tab, industry, and billing-interval selections
//! - `telemetry`: the timer-driven agent activity simulator
//! - `theme`: palette definitions for both variants
//! - `viewport`: scroll threshold and hero-visibility flags

pub mod catalog;
pub mod compose;
pub mod overlay;
pub mod preference;
pub mod random;
pub mod selection;
pub mod telemetry;
pub mod theme;
pub mod viewport;
