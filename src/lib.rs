/// Handles argument parsing and the `create`, `list` and `preview` commands.
pub mod cli;

/// Built-in folder structures.
pub mod catalog;

/// User catalog files.
pub mod config;

/// Constants used across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Creates the directories of a structure.
pub mod engine;

/// Validation and lookup around the engine.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Tree rendering for `preview`.
pub mod preview;

/// Lookup table of registered structures.
pub mod registry;

/// Folder structure and generation option types.
pub mod structure;

/// Project name and path validators.
pub mod validation;
