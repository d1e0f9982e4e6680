//! Logout command.

use crate::errors::AppResult;
use crate::services::UseCaseContainer;

pub fn execute(container: &dyn UseCaseContainer) -> AppResult<String> {
    container.current_account().clear()?;
    Ok("Sessão encerrada.".to_string())
}
