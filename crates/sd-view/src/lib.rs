//! # sd-view
//!
//! The List-Detail Data View pattern for spacedash, free of any rendering:
//!
//! - [`state`]: `Loading → Ready | Error | Empty` and user-facing errors
//! - [`cycle`]: generation-tagged fetch cycles that drop stale results
//! - [`route`] / [`navigator`]: path routes, the sign-in guard, history
//! - [`cards`]: card view-models with the image placeholder
//! - [`screen`]: a route's settled view after one fetch cycle

pub mod cards;
pub mod cycle;
pub mod navigator;
pub mod route;
pub mod screen;
pub mod state;

pub use cards::{Card, Cards, PLACEHOLDER_IMAGE};
pub use cycle::{Resolution, Ticket, ViewController};
pub use navigator::{NavOutcome, Navigator};
pub use route::{Route, RouteError};
pub use screen::{LoadOptions, Screen, Views};
pub use state::{ErrorKind, ViewError, ViewMode, ViewPhase, ViewState};
