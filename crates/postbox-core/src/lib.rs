//! # Postbox Core
//!
//! The domain layer of the Postbox blog API.
//! This crate holds the post entity, its validation rules, the record store
//! port and the service that maps store outcomes to domain errors.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
