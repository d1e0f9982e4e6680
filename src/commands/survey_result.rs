//! Survey result commands - Show a result, or answer and show the update.

use domain::SaveSurveyResultParams;

use crate::cli::args::{AnswerArgs, ResultArgs};
use crate::errors::AppResult;
use crate::presentation::{ErrorHandler, SurveyResultView};
use crate::services::UseCaseContainer;

/// Execute the result command
pub async fn show(args: ResultArgs, container: &dyn UseCaseContainer) -> AppResult<String> {
    match container.load_survey_result(&args.survey_id).load().await {
        Ok(result) => Ok(SurveyResultView::from(&result).to_string()),
        Err(error) => Err(ErrorHandler::new(container.current_account()).to_app_error(error)),
    }
}

/// Execute the answer command
pub async fn answer(args: AnswerArgs, container: &dyn UseCaseContainer) -> AppResult<String> {
    let params = SaveSurveyResultParams { answer: args.answer };

    match container.save_survey_result(&args.survey_id).save(params).await {
        Ok(result) => Ok(SurveyResultView::from(&result).to_string()),
        Err(error) => Err(ErrorHandler::new(container.current_account()).to_app_error(error)),
    }
}
