//! Signup command - Creates an account and stores it as the current one.

use domain::AddAccountParams;

use crate::cli::args::SignupArgs;
use crate::errors::AppResult;
use crate::presentation::validate_form;
use crate::services::UseCaseContainer;

/// Execute the signup command
pub async fn execute(args: SignupArgs, container: &dyn UseCaseContainer) -> AppResult<String> {
    let params = AddAccountParams {
        name: args.name,
        email: args.email,
        password: args.password,
        password_confirmation: args.password_confirmation,
    };
    validate_form(&params)?;

    tracing::debug!("Creating account for {}", params.email);
    let account = container.add_account().add(params).await?;
    container.current_account().set(&account)?;

    Ok(format!("Conta criada. Bem-vindo(a), {}!", account.name().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::protocols::{MockGetStorage, MockSetStorage};
    use crate::errors::AppError;
    use crate::services::{CurrentAccount, MockUseCaseContainer};
    use domain::{AccountModel, AddAccount, DomainError, MockAddAccount};
    use serde_json::json;
    use std::sync::Arc;

    fn args() -> SignupArgs {
        SignupArgs {
            name: "A".to_string(),
            email: "a@a.com".to_string(),
            password: "12345".to_string(),
            password_confirmation: "12345".to_string(),
        }
    }

    fn current_account(expected_sets: usize) -> Arc<CurrentAccount> {
        let mut setter = MockSetStorage::new();
        setter
            .expect_set()
            .withf(|key, value| {
                key == "account" && *value == Some(json!({"accessToken": "t", "name": "A"}))
            })
            .times(expected_sets)
            .returning(|_, _| Ok(()));
        Arc::new(CurrentAccount::new(Arc::new(MockGetStorage::new()), Arc::new(setter)))
    }

    #[tokio::test]
    async fn test_signup_stores_account() {
        let mut add_account = MockAddAccount::new();
        add_account
            .expect_add()
            .withf(|params| params.email == "a@a.com" && params.password_confirmation == "12345")
            .times(1)
            .returning(|_| {
                Ok(AccountModel::from_value(json!({"accessToken": "t", "name": "A"})).unwrap())
            });
        let add_account: Arc<dyn AddAccount> = Arc::new(add_account);
        let account = current_account(1);

        let mut container = MockUseCaseContainer::new();
        container
            .expect_add_account()
            .returning(move || add_account.clone());
        container
            .expect_current_account()
            .returning(move || account.clone());

        let output = execute(args(), &container).await.unwrap();
        assert_eq!(output, "Conta criada. Bem-vindo(a), A!");
    }

    #[tokio::test]
    async fn test_email_in_use_does_not_store() {
        let mut add_account = MockAddAccount::new();
        add_account
            .expect_add()
            .times(1)
            .returning(|_| Err(DomainError::EmailInUse));
        let add_account: Arc<dyn AddAccount> = Arc::new(add_account);

        let mut container = MockUseCaseContainer::new();
        container
            .expect_add_account()
            .returning(move || add_account.clone());
        container.expect_current_account().never();

        let error = execute(args(), &container).await.unwrap_err();
        assert!(matches!(error, AppError::Domain(DomainError::EmailInUse)));
    }

    #[tokio::test]
    async fn test_invalid_form_never_calls_api() {
        let mut container = MockUseCaseContainer::new();
        container.expect_add_account().never();

        let mut form = args();
        form.password_confirmation = "54321".to_string();

        let error = execute(form, &container).await.unwrap_err();
        assert!(matches!(error, AppError::Validation(_)));
    }
}
