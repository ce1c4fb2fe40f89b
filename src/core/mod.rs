//! Core library components.
//!
//! The encrypted token store, the suggestion pipeline and the pieces they
//! share. Nothing in here prints to the terminal; user-facing output lives
//! in [`crate::cli`].

pub mod cipher;
pub mod commit_type;
pub mod config;
pub mod constants;
pub mod git;
pub mod store;
pub mod suggest;
pub mod types;
