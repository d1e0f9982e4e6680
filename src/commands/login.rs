//! Login command - Authenticates and stores the account.

use domain::AuthenticationParams;

use crate::cli::args::LoginArgs;
use crate::errors::AppResult;
use crate::presentation::validate_form;
use crate::services::UseCaseContainer;

/// Execute the login command
pub async fn execute(args: LoginArgs, container: &dyn UseCaseContainer) -> AppResult<String> {
    let params = AuthenticationParams {
        email: args.email,
        password: args.password,
    };
    validate_form(&params)?;

    let account = container.authentication().auth(params).await?;
    container.current_account().set(&account)?;

    Ok(format!("Bem-vindo(a), {}!", account.name().unwrap_or_default()))
}
