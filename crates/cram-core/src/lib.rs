//! # cram-core
//!
//! Core domain types for Cram.
//!
//! This crate provides the foundational types shared across all Cram crates:
//! - Entity structs mirroring the Cram API wire format (notes, conversation
//!   messages, questions, graded results)
//! - Status enums with state machine transitions for the upload and quiz flows
//! - Local id minting for optimistic chat messages
//! - Upload file validation (size cap, MIME allow-list) and its error type

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod validate;
