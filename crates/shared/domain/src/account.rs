//! Account models used by signup and login.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Signup form data, sent to the API as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountParams {
    #[validate(length(min = 1, message = "Campo obrigatório: nome"))]
    pub name: String,

    #[validate(email(message = "Email inválido"))]
    pub email: String,

    #[validate(length(min = 5, message = "A senha deve ter no mínimo 5 caracteres"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "As senhas não conferem"))]
    pub password_confirmation: String,
}

/// Login form data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AuthenticationParams {
    #[validate(email(message = "Email inválido"))]
    pub email: String,

    #[validate(length(min = 5, message = "A senha deve ter no mínimo 5 caracteres"))]
    pub password: String,
}

/// Account returned by the API after signup or login.
///
/// The object is kept exactly as received. Only `accessToken` and `name`
/// have accessors; every other field passes through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountModel(Map<String, Value>);

impl AccountModel {
    /// Build an account from a JSON value; `None` unless it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.0.get("accessToken").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_params() -> AddAccountParams {
        AddAccountParams {
            name: "A".to_string(),
            email: "a@a.com".to_string(),
            password: "12345".to_string(),
            password_confirmation: "12345".to_string(),
        }
    }

    #[test]
    fn test_params_serialize_with_camel_case_keys() {
        let value = serde_json::to_value(valid_params()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "A",
                "email": "a@a.com",
                "password": "12345",
                "passwordConfirmation": "12345"
            })
        );
    }

    #[test]
    fn test_params_validation() {
        assert!(valid_params().validate().is_ok());

        let mut params = valid_params();
        params.email = "not-an-email".to_string();
        assert!(params.validate().is_err());

        let mut params = valid_params();
        params.password_confirmation = "54321".to_string();
        let errors = params.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password_confirmation"));

        let mut params = valid_params();
        params.name = String::new();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_account_keeps_unknown_fields() {
        let body = json!({"id": "1", "name": "A", "accessToken": "t", "extra": [1, 2]});
        let account = AccountModel::from_value(body.clone()).unwrap();

        assert_eq!(account.access_token(), Some("t"));
        assert_eq!(account.name(), Some("A"));
        assert_eq!(serde_json::to_value(&account).unwrap(), body);
    }

    #[test]
    fn test_account_rejects_non_object() {
        assert!(AccountModel::from_value(json!([1, 2])).is_none());
        assert!(AccountModel::from_value(Value::Null).is_none());
    }
}
