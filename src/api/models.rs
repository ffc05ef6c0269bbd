use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

pub const NON_STRING_FIELDS: &str = "question and context must be strings.";

/// Body of `POST /ask`. Fields are kept as raw JSON so that any falsy value
/// (`null`, `""`, `0`, `false`, `[]`, `{}`) counts as missing rather than as a
/// type error.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub context: Option<Value>,
}

impl QuestionRequest {
    /// Parse a request body regardless of its declared content type.
    pub fn from_json(raw: &[u8]) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_slice(raw).map_err(|e| AppError::InvalidBody(e.to_string()))?;
        if !value.is_object() {
            return Err(AppError::InvalidBody(
                "request body must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| AppError::InvalidBody(e.to_string()))
    }

    /// Returns both fields when each is truthy and a string.
    pub fn fields(&self) -> Result<(&str, &str), AppError> {
        let (Some(question), Some(context)) = (truthy(&self.question), truthy(&self.context))
        else {
            return Err(AppError::MissingField);
        };

        match (question.as_str(), context.as_str()) {
            (Some(question), Some(context)) => Ok((question, context)),
            _ => Err(AppError::InvalidBody(NON_STRING_FIELDS.to_string())),
        }
    }
}

fn truthy(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|value| match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    })
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextComparisonInput {
    pub text1: String,
    pub text2: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchComparisonInput {
    pub ground_truth: Vec<String>,
    pub generated_answers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SimilarityScore {
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BatchSimilarityScore {
    pub scores: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub answerer: &'static str,
}
