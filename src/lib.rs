//! Plate Gate Library
//!
//! License plate access control: normalize OCR text, extract a plate,
//! decide access against allow/deny lists, and append an audit record.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod output;
pub mod pipeline;
pub mod scanner;
pub mod types;
pub mod vision;
