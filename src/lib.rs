//! Heartwise - Heart Health Risk Assessment
//!
//! This crate implements the page flow of a heart health assessment: which
//! page a visitor may reach given what is in their session, the forms that
//! move them between pages, and a pluggable prediction provider behind the
//! results page.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
