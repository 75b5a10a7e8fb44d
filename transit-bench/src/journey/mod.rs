//! Journeys and their independent verification.
//!
//! Algorithms describe journeys purely as indices into a network. This
//! module turns those indices back into Conns and Paths
//! ([`reconstruct`]) and decides whether the result could actually be
//! travelled ([`check`], [`validate`]).

mod leg;
mod reconstruct;
#[cfg(test)]
pub(crate) mod test_network;
mod validate;

pub use leg::{Journey, Leg, LegKind, ResolvedLeg};
pub use reconstruct::{ReconstructError, reconstruct};
pub use validate::{Verdict, check, validate};
