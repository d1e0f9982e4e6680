//! Survey result screen.

use domain::{SurveyResultAnswerModel, SurveyResultModel};

use super::Calendar;

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerView {
    pub answer: String,
    pub percent: String,
    pub image: Option<String>,
    pub active: bool,
}

impl From<&SurveyResultAnswerModel> for AnswerView {
    fn from(answer: &SurveyResultAnswerModel) -> Self {
        Self {
            answer: answer.answer.clone(),
            percent: format!("{}%", answer.percent),
            image: answer.image.clone(),
            active: answer.is_current_account_answer,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResultView {
    pub question: String,
    pub calendar: Calendar,
    pub answers: Vec<AnswerView>,
}

impl From<&SurveyResultModel> for SurveyResultView {
    fn from(result: &SurveyResultModel) -> Self {
        Self {
            question: result.question.clone(),
            calendar: Calendar::from(&result.date),
            answers: result.answers.iter().map(AnswerView::from).collect(),
        }
    }
}

impl std::fmt::Display for SurveyResultView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[{}] {}", self.calendar, self.question)?;
        for (index, answer) in self.answers.iter().enumerate() {
            let marker = if answer.active { "*" } else { " " };
            write!(f, "{} {}. {} ({})", marker, index + 1, answer.answer, answer.percent)?;
            if let Some(image) = &answer.image {
                write!(f, " <{}>", image)?;
            }
            if index + 1 < self.answers.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
