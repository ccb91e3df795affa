//! Quickest-route planner for the London Underground.
//!
//! Loads a map of stations, lines and timed connections, and answers:
//! "What is the quickest way from this station to that one?"

pub mod config;
pub mod domain;
pub mod graph;
pub mod network;
pub mod planner;
pub mod web;
