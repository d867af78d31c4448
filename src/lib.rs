//! # Buncafe - Catalog Engine for the Bun & Bean Cafe
//!
//! Buncafe is the data backbone of the Bun & Bean rabbit cafe site: every
//! drink, snack, treat, toy, rabbit, friendship level, reward tier, shop
//! item, daily message, and stamp icon, loaded once at startup and served
//! read-only for the life of the process.
//!
//! ## Features
//!
//! - **Static Catalog**: Ten reference tables built from built-in seed
//!   content, with optional JSON seed-file overrides per table.
//! - **Integrity Checked**: Duplicate ids, dangling cross-table references,
//!   ladder defects, and out-of-range stats fail loudly at load time with
//!   every violation listed.
//! - **Indexed Lookup**: Id lookups go through an index built at load, while
//!   listings and category filters preserve declaration order.
//! - **Typed References**: Soft references (a drink's rabbit, a rabbit's
//!   signature snack) resolve through methods that report a dangling id
//!   instead of silently returning nothing.
//! - **Daily Rotation**: Deterministic message-of-the-day selection and the
//!   stamp icon rotation sequence.
//! - **CLI**: Menu rendering, record inspection, validation, and seed-file
//!   export from one binary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use buncafe::catalog::Catalog;
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = Catalog::load()?;
//!
//!     let taro = catalog.drinks().get("taro-dream")?;
//!     println!("{} — {}", taro.name, taro.price);
//!
//!     let megumi = catalog.rabbits().get("megumi")?;
//!     let drink = catalog.signature_drink(megumi)?;
//!     println!("{} drinks {}", megumi.name, drink.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Tables, record types, loading, and integrity checks
//! - [`daily`] - Daily flavor text and the stamp icon rotation
//! - [`menu`] - Text rendering for menus, profiles, and the CLI surface
//! - [`config`] - TOML configuration for the CLI

pub mod catalog;
pub mod config;
pub mod daily;
pub mod menu;
