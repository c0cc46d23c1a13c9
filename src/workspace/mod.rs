//! Workspace membership and invitations.
//!
//! Members are invited into a workspace as pending and become active once
//! they accept. Declining an invitation and removing a member are the same
//! operation.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
