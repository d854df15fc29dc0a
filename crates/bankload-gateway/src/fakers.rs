//! Fake request data.
//!
//! Gateway clients fill request bodies from a [`FakeData`] source so tests can
//! swap in deterministic values.

use bankload_models::operations::OperationStatus;
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use rand::seq::SliceRandom;

const CATEGORIES: &[&str] = &[
    "groceries",
    "restaurants",
    "taxi",
    "electronics",
    "pharmacy",
    "clothing",
    "travel",
    "entertainment",
];

const PAYMENT_PURPOSES: &[&str] = &[
    "Utilities",
    "Internet",
    "Mobile",
    "Rent",
    "Insurance",
];

const OPERATION_STATUSES: &[OperationStatus] = &[
    OperationStatus::Failed,
    OperationStatus::Completed,
    OperationStatus::Pending,
    OperationStatus::InProgress,
];

/// Source of values for generated request bodies.
pub trait FakeData: Send + Sync {
    fn email(&self) -> String;
    fn first_name(&self) -> String;
    fn last_name(&self) -> String;
    fn middle_name(&self) -> String;
    fn phone_number(&self) -> String;
    fn amount(&self) -> f64;
    fn category(&self) -> String;
    fn merchant(&self) -> String;
    fn operation_status(&self) -> OperationStatus;
    fn atm_id(&self) -> String;
    fn bill_id(&self) -> String;
    fn payment_purpose(&self) -> String;
}

/// Random data backed by the `fake` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fakers;

impl FakeData for Fakers {
    fn email(&self) -> String {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!(
            "{}.{}+{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            &suffix[..8]
        )
    }

    fn first_name(&self) -> String {
        FirstName().fake()
    }

    fn last_name(&self) -> String {
        LastName().fake()
    }

    fn middle_name(&self) -> String {
        FirstName().fake()
    }

    fn phone_number(&self) -> String {
        PhoneNumber().fake()
    }

    fn amount(&self) -> f64 {
        let cents = rand::thread_rng().gen_range(100..=100_000u32);
        f64::from(cents) / 100.0
    }

    fn category(&self) -> String {
        pick(CATEGORIES).to_string()
    }

    fn merchant(&self) -> String {
        CompanyName().fake()
    }

    fn operation_status(&self) -> OperationStatus {
        OPERATION_STATUSES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(OperationStatus::Completed)
    }

    fn atm_id(&self) -> String {
        format!("ATM-{:06}", rand::thread_rng().gen_range(0..1_000_000u32))
    }

    fn bill_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    fn payment_purpose(&self) -> String {
        pick(PAYMENT_PURPOSES).to_string()
    }
}

fn pick(values: &'static [&'static str]) -> &'static str {
    values.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
}
