//! Streamify - Citizenship Planner State
//!
//! Reference data and planning state for the citizenship feature: a
//! built-in catalog of countries with naturalization requirement summaries,
//! and a per-user plan tracking which countries are in progress plus a
//! to-do shortlist.
//!
//! # Example
//!
//! ```rust
//! use streamify_planner::{catalog, CitizenshipPlan};
//!
//! let countries = catalog();
//! let portugal = countries.iter().find(|c| c.name == "Portugal").unwrap();
//!
//! let mut plan = CitizenshipPlan::new();
//! assert!(plan.add_country(portugal.clone()));
//! assert!(plan.is_planned(&portugal.id));
//! ```

#![forbid(unsafe_code)]

pub mod country;
pub mod plan;

pub use country::{catalog, Country};
pub use plan::CitizenshipPlan;
