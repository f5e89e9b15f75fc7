//! Main module for qhelp library functionality

pub mod config;
pub mod decoding;
pub mod error;
pub mod naming;
pub mod parsing;
pub mod rendering;
pub mod site;
pub mod testing;
pub mod topic;
