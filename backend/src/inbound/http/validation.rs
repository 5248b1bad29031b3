//! Translation of contact validation failures into HTTP error payloads.

use serde_json::{Value, json};

use crate::domain::{ContactValidationErrors, Error};

/// Build an `invalid_request` error listing every offending field.
///
/// ```text
/// {"code":"invalid_request","message":"missing required field: phone",
///  "details":{"fields":[{"field":"phone","code":"missing_field"}]}}
/// ```
pub(crate) fn contact_validation_error(errors: &ContactValidationErrors) -> Error {
    let fields: Vec<Value> = errors
        .iter()
        .map(|error| {
            json!({
                "field": error.field().as_str(),
                "code": error.code(),
            })
        })
        .collect();
    Error::invalid_request(errors.to_string()).with_details(json!({ "fields": fields }))
}
