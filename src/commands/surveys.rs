//! Surveys command - Lists the surveys of the current account.

use crate::errors::AppResult;
use crate::presentation::{render_survey_list, ErrorHandler};
use crate::services::UseCaseContainer;

/// Execute the surveys command
pub async fn execute(container: &dyn UseCaseContainer) -> AppResult<String> {
    match container.load_survey_list().load_all().await {
        Ok(surveys) => Ok(render_survey_list(&surveys)),
        Err(error) => Err(ErrorHandler::new(container.current_account()).to_app_error(error)),
    }
}
