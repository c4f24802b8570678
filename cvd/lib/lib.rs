//! `cvd` keeps track of instance groups for the cuttlefish device orchestration tooling.
//!
//! # Overview
//!
//! An instance group is a set of virtual device instances that share a host home directory.
//! This crate holds the in-memory bookkeeping for such groups:
//! - Registering instances with group-local uniqueness of their ids
//! - Membership queries
//! - A stable identity derived from the group's home directory
//! - Discovery of the group's generated `cuttlefish_config.json`
//!
//! Launching, stopping and persisting groups is left to the caller.
//!
//! # Usage Example
//!
//! ```rust
//! use cvd::selector::InstanceGroupRecord;
//!
//! let mut group = InstanceGroupRecord::new("/tmp/g1", "/opt/cuttlefish/bin");
//! group.add_instance(1)?;
//! group.add_instance(2)?;
//!
//! assert!(group.has_instance(1));
//! assert!(group.add_instance(1).is_err());
//! # Ok::<(), cvd::CvdError>(())
//! ```
//!
//! # Modules
//!
//! - [`config`] - Default names and paths
//! - [`selector`] - Instance group and instance records

#![warn(missing_docs)]

mod error;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub mod config;
pub mod selector;

pub use error::*;
