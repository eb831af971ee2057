//!
//! # User Directory and Task Registry
//!
//! All persistence operations live here, behind plain async functions the
//! route layer invokes. Each operation acquires its own pooled connection at
//! entry and holds it for exactly the duration of the operation; the handle
//! returns to the pool when it drops, on every exit path. Uniqueness and
//! referential-integrity checks are left to Postgres constraints rather than
//! application-level locking, so concurrent writers race at the storage
//! layer and the loser receives a structured `Conflict`/`Referential` error
//! through the mapping in [`crate::error`].

pub mod tasks;
pub mod users;
