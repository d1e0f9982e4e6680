//! Survey list screen.

use domain::SurveyModel;

use super::Calendar;

pub const EMPTY_LIST_MESSAGE: &str = "Nenhuma enquete disponível";

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyItemView {
    pub id: String,
    pub question: String,
    pub calendar: Calendar,
    pub answered: bool,
}

impl From<&SurveyModel> for SurveyItemView {
    fn from(survey: &SurveyModel) -> Self {
        Self {
            id: survey.id.clone(),
            question: survey.question.clone(),
            calendar: Calendar::from(&survey.date),
            answered: survey.did_answer,
        }
    }
}

impl std::fmt::Display for SurveyItemView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.answered { "respondida" } else { "pendente" };
        write!(f, "[{}] {} ({}) id={}", self.calendar, self.question, status, self.id)
    }
}

pub fn render_survey_list(surveys: &[SurveyModel]) -> String {
    if surveys.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }
    surveys
        .iter()
        .map(|survey| SurveyItemView::from(survey).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
