//! Entity structs for the space resources.
//!
//! All records are read-only copies of upstream payloads. Every field other
//! than `id` and `name` is optional: a missing or oddly shaped field never
//! fails a whole record (see [`loose`]).

mod agency;
mod astronaut;
mod launch;
pub mod loose;
mod program;

pub use agency::{Agency, AgencyRef};
pub use astronaut::Astronaut;
pub use launch::{Launch, LaunchStatus, Mission, Pad, Provider, RocketConfiguration};
pub use program::{MissionPatch, Program};

/// Common accessors the view layer needs from every resource.
pub trait Resource {
    /// Identifier used in detail routes.
    fn id(&self) -> &str;
    /// Display name.
    fn name(&self) -> &str;
    /// Resolved display image, if any.
    fn image(&self) -> Option<&str>;
}
