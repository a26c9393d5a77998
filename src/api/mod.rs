//! API module for HTTP endpoints
//!
//! This module provides the REST surface over the rotation store: roster
//! queries, award and lifecycle commands, and text views.

pub mod http;
pub mod rest;
