//! Network construction and the frozen network model.
//!
//! A [`NetworkBuilder`] is the only way to grow a network. Calling
//! [`NetworkBuilder::finalize`] moves it into an immutable [`NetworkModel`],
//! so a network cannot be changed once algorithms and validators see it.

mod builder;
mod model;
mod registry;

pub use builder::NetworkBuilder;
pub use model::NetworkModel;
pub use registry::IdentifierRegistry;
