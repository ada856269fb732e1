//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`language::Language`] - detected query language
//! - [`string`] - file-name helpers for exported topics
//! - [`validation`] - configuration issues and their severity

pub mod error;
pub mod language;
pub mod string;
pub mod validation;
