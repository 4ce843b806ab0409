//! Funnelcraft - Visitor Engagement & Conversion Core
//!
//! This crate implements the domain core of a product landing page backend:
//! visitors are tracked per session, their engagement is scored, and they
//! convert by submitting contact details, triggering a welcome email and
//! analytics events.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
