//! # Bankload Gateway
//!
//! Clients for the banking gateway, one capability trait per resource:
//!
//! - [`UsersGateway`]: create and look up users
//! - [`AccountsGateway`]: open deposit, savings, debit card and credit card accounts
//! - [`CardsGateway`]: issue virtual and physical cards
//! - [`OperationsGateway`]: make operations and query their history
//! - [`DocumentsGateway`]: fetch tariff and contract documents
//!
//! Callers depend on the traits only. [`http`] provides the HTTP
//! implementation; with the `test-utils` feature, [`mock::RecordingGateway`]
//! implements every trait in memory and records each call.
//!
//! # Example
//!
//! ```ignore
//! use bankload_config::GatewayHttpConfig;
//! use bankload_gateway::{Fakers, http::build_gateway_http_clients};
//! use std::sync::Arc;
//!
//! let clients = build_gateway_http_clients(&GatewayHttpConfig::from_env(), Arc::new(Fakers))?;
//! let user = clients.users.create_user().await?.user;
//! let account = clients.accounts.open_debit_card_account(&user.id).await?.account;
//! ```

pub mod client;
pub mod error;
pub mod fakers;
pub mod http;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use client::{
    AccountsGateway, CardsGateway, DocumentsGateway, GatewayClients, GatewayFuture,
    OperationsGateway, UsersGateway,
};
pub use error::GatewayError;
pub use fakers::{FakeData, Fakers};
