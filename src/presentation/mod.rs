//! Presentation layer - Text views of models and errors.

mod calendar;
mod error_handler;
mod survey_list;
mod survey_result;
mod validation;

pub use calendar::Calendar;
pub use error_handler::{ErrorHandler, Outcome};
pub use survey_list::{render_survey_list, SurveyItemView, EMPTY_LIST_MESSAGE};
pub use survey_result::{AnswerView, SurveyResultView};
pub use validation::validate_form;
