//! Domain Layer - Core client types.
//!
//! Transport-agnostic types shared by the streaming services: feed kinds,
//! subscription verbs, account selection and money.

/// Money value object.
pub mod money;

/// Feed kinds, subscription defaults and account selection.
pub mod subscription;
