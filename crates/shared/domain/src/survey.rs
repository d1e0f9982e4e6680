//! Survey and survey result models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Survey as listed on the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyModel {
    pub id: String,
    pub question: String,
    pub date: DateTime<Utc>,
    pub did_answer: bool,
}

/// One answer of a survey result, with its share of the votes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResultAnswerModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub answer: String,
    pub count: u64,
    pub percent: f64,
    pub is_current_account_answer: bool,
}

/// Aggregated result of a survey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResultModel {
    pub question: String,
    pub date: DateTime<Utc>,
    pub answers: Vec<SurveyResultAnswerModel>,
}

impl SurveyResultModel {
    /// Answer chosen by the current account, if any
    pub fn current_answer(&self) -> Option<&SurveyResultAnswerModel> {
        self.answers.iter().find(|a| a.is_current_account_answer)
    }
}

/// Body of a save request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSurveyResultParams {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use serde_json::json;

    #[test]
    fn test_survey_result_from_api_json() {
        let result: SurveyResultModel = serde_json::from_value(json!({
            "question": "Question",
            "date": "2022-12-21T10:00:00Z",
            "answers": [
                {"image": "any_image", "answer": "any_answer", "count": 7, "percent": 70, "isCurrentAccountAnswer": true},
                {"answer": "any_answer_2", "count": 3, "percent": 30, "isCurrentAccountAnswer": false}
            ]
        }))
        .unwrap();

        assert_eq!(result.date.day(), 21);
        assert_eq!(result.answers[0].image.as_deref(), Some("any_image"));
        assert_eq!(result.answers[1].image, None);
        assert_eq!(result.current_answer().map(|a| a.answer.as_str()), Some("any_answer"));
    }

    #[test]
    fn test_survey_list_item_uses_camel_case() {
        let survey = SurveyModel {
            id: "any_id".to_string(),
            question: "Question".to_string(),
            date: Utc.with_ymd_and_hms(2022, 12, 21, 0, 0, 0).unwrap(),
            did_answer: true,
        };
        let value = serde_json::to_value(&survey).unwrap();
        assert_eq!(value["didAnswer"], json!(true));
    }
}
