//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod slice_command;

pub use command_traits::{Command, CommandFactory};
pub use slice_command::SliceCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::slicer::errors::SliceResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct ShapesliceCommandFactory;

impl ShapesliceCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ShapesliceCommandFactory
    }
}

impl Default for ShapesliceCommandFactory {
    fn default() -> Self {
        ShapesliceCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for ShapesliceCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SliceResult<Box<dyn Command + 'a>> {
        // Slicing is the only operation the tool performs
        Ok(Box::new(SliceCommand::new(args, logger)?))
    }
}
