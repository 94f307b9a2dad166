//! Core fleet logic, independent of any CLI or output concerns.
//!
//! Data flows leaves-first: [`discovery`] lists candidate directories,
//! [`filter`] keeps the ones that are repositories, and [`FleetExecutor`]
//! applies the requested [`Operation`] to every target, returning a sorted
//! [`ResultBatch`].

pub mod discovery;
mod executor;
pub mod filter;
mod operation;
mod result;
mod strategy;

pub use executor::{FleetExecutor, DEFAULT_PROGRAM};
pub use filter::filter_repositories;
pub use operation::Operation;
pub use result::{CommandResult, ResultBatch};
pub use strategy::{
    clone_args, existing_target_args, Strategy, GIT_DIR_FLAG, METADATA_DIR, WORK_TREE_FLAG,
};
