use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::DiarioError;

/// `axum::Json` whose rejections are reported in the v1 error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(DiarioError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for DiarioError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> DiarioError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            if let Some(field) = extract_missing_field(&message) {
                DiarioError::Validation(format!("Missing required field: {field}"))
            } else {
                DiarioError::Validation(format!("Invalid JSON: {message}"))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            DiarioError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            DiarioError::Validation("Missing `Content-Type: application/json` header".to_string())
        }
        JsonRejection::BytesRejection(_) => {
            DiarioError::Internal("Failed to read request body".to_string())
        }
        _ => DiarioError::Validation(rejection.body_text()),
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_extracted() {
        let message = "Failed to deserialize the JSON body into the target type: missing field `titulo` at line 1 column 20";
        assert_eq!(extract_missing_field(message), Some("titulo"));
    }

    #[test]
    fn other_messages_have_no_field() {
        assert_eq!(extract_missing_field("invalid type: integer"), None);
    }
}
