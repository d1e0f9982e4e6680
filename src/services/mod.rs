//! Application services - Composition of use cases, transport and storage.

pub mod container;
mod current_account;

pub use container::{UseCaseContainer, UseCases};
pub use current_account::CurrentAccount;

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockUseCaseContainer;
