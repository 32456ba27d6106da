//! # Claude Contextline
//!
//! A one-line statusline for Claude Code sessions showing context-window
//! utilization, the last user prompt, and update status.
//!
//! ## Overview
//!
//! The binary reads Claude Code's statusLine hook JSON from stdin, scans the
//! session transcript backwards for the most recent token usage and user
//! prompt, and prints a single ANSI-colored line:
//! - Workspace directory and git branch
//! - Model name and a context-utilization progress bar
//! - Session id, tool version (with update check), clock, last prompt
//!
//! Everything fails open: a missing transcript, unreadable git ref, or
//! unreachable release endpoint still produces a complete line.

/// Command-line argument parsing and configuration
pub mod cli;

/// Context-window limits and utilization math
pub mod context;

/// ANSI line rendering
pub mod display;

/// Git branch lookup from the HEAD ref file
pub mod git;

/// Data models for the hook payload and transcript records
pub mod models;

/// Reverse transcript scan for usage and prompt extraction
pub mod transcript;

/// Utility functions for stdin, paths, and formatting
pub mod utils;

/// Update check against the Claude Code release feed, with an on-disk cache
pub mod version;
