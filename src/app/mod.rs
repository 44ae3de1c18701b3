//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in src/model/)
//! - Services (schedule worker in src/services/)
//! - Logic (pure business logic in src/logic/)
//! - UI rendering (in src/ui/)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod data;
pub(crate) mod filters;
pub(crate) mod navigation;
pub(crate) mod search;
pub(crate) mod selection;
pub(crate) mod sorting;
