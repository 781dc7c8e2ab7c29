use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    let payload = json!({
                        "error": rejection.body_text(),
                    });
                    (rejection.status(), axum::Json(payload))
                })?;

        json_value.validate().map_err(|validation_errors| {
            let payload = json!({
                "error": format_validation_errors(&validation_errors),
                "details": format_validation_errors_detailed(&validation_errors),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload))
        })?;

        Ok(Self(json_value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "email" => "Invalid email format".to_string(),
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            error_messages.push(format!("{field}: {message}"));
        }
    }

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| match e.code.as_ref() {
                        "email" => "Invalid email format".to_string(),
                        "length" => "Invalid length".to_string(),
                        "range" => "Value out of range".to_string(),
                        _ => format!("Invalid {field}"),
                    })
            })
            .collect();
        error_map.insert(field.to_string(), json!(messages));
    }

    json!(error_map)
}

#[cfg(test)]
mod tests {
    use crate::domain::requests::{
        auth::RegisterRequest,
        product::UpdateProductRequest,
        sale::CreateSaleRequest,
    };
    use validator::Validate;

    fn valid_register() -> RegisterRequest {
        RegisterRequest {
            email: "user@example.com".into(),
            password: "secret-pass".into(),
            cpf: "12345678901".into(),
            name: "Valid Name".into(),
            role: 0,
        }
    }

    #[test]
    fn test_register_request_boundaries() {
        assert!(valid_register().validate().is_ok());

        let mut bad_email = valid_register();
        bad_email.email = "not-an-email".into();
        assert!(bad_email.validate().is_err());

        let mut short_password = valid_register();
        short_password.password = "12345".into();
        assert!(short_password.validate().is_err());

        let mut short_cpf = valid_register();
        short_cpf.cpf = "123".into();
        assert!(short_cpf.validate().is_err());

        let mut long_cpf = valid_register();
        long_cpf.cpf = "123456789012".into();
        assert!(long_cpf.validate().is_err());

        let mut short_name = valid_register();
        short_name.name = "ab".into();
        assert!(short_name.validate().is_err());
    }

    #[test]
    fn test_sale_request_boundaries() {
        let valid = CreateSaleRequest {
            product_id: 1,
            quantity: 1,
            price: 0.5,
        };
        assert!(valid.validate().is_ok());

        let zero_quantity = CreateSaleRequest {
            quantity: 0,
            ..valid.clone()
        };
        assert!(zero_quantity.validate().is_err());

        let free_sale = CreateSaleRequest {
            price: 0.0,
            ..valid
        };
        assert!(free_sale.validate().is_err());
    }

    #[test]
    fn test_update_product_rejects_unknown_fields() {
        let payload = r#"{"id": 1, "quantity": 50}"#;

        let parsed = serde_json::from_str::<UpdateProductRequest>(payload);

        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_product_accepts_partial_payload() {
        let payload = r#"{"id": 1, "price": 9.99}"#;

        let parsed: UpdateProductRequest = serde_json::from_str(payload).unwrap();

        assert_eq!(parsed.price, Some(9.99));
        assert!(parsed.name.is_none());
        assert!(parsed.category_id.is_none());
    }
}
