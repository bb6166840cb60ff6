//! Grocery List Library
//!
//! This library provides the core functionality for building a grocery list
//! and texting it to a phone through a carrier's email-to-SMS gateway, with
//! REST and MCP (Model Context Protocol) surfaces.

// Domain modules
pub mod delivery;
pub mod list;
pub mod mcp;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
