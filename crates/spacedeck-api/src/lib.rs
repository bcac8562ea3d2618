//! # spacedeck-api - Backend Client
//!
//! HTTP client for the Book My Space REST backend. One [`ApiClient`] serves
//! every resource in the catalog; per-resource differences (endpoint path,
//! envelope key, multipart vs JSON bodies) come from the resource's
//! `ResourceSpec`.
//!
//! Request body construction lives in [`encode`] as pure functions so it can
//! be tested without a server.

pub mod client;
pub mod encode;

pub use client::ApiClient;
pub use encode::{approval_body, json_body, plan_parts, PartPlan};
