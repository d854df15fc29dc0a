//! # Bankload Models
//!
//! Typed identifiers and request/response DTOs for the banking gateway API.
//!
//! # Modules
//!
//! - [`ids`]: Opaque, strongly-typed identifiers for gateway entities
//! - [`users`]: User creation and lookup
//! - [`accounts`]: Account opening and listing
//! - [`cards`]: Card issuing
//! - [`operations`]: Operation requests (one variant per kind) and queries
//! - [`documents`]: Tariff and contract documents
//!
//! # Example
//!
//! ```ignore
//! use bankload_models::ids::{AccountId, CardId};
//! use bankload_models::operations::{MakeOperationRequest, OperationBase, OperationStatus};
//!
//! let request = MakeOperationRequest::top_up(
//!     OperationBase::new(OperationStatus::Completed, 100.0),
//!     card_id,
//!     account_id,
//! );
//! assert_eq!(request.path(), "/api/v1/operations/make-top-up-operation");
//! ```

pub mod accounts;
pub mod cards;
pub mod documents;
pub mod ids;
pub mod operations;
pub mod users;

pub use ids::{AccountId, CardId, OperationId, UserId};
