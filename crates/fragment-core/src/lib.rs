// ABOUTME: Core library for the fragment server, containing the configuration document model.
// ABOUTME: This crate defines the shared data model and credential checks used by the server.

pub mod auth;
pub mod document;

pub use document::{ConfigDocument, Options, PublicKey, SigningKey};
