use serde::{Deserialize, Serialize};

/// A user record shaped from one spreadsheet row.
///
/// Values are forwarded exactly as the sheet provides them. A cell the
/// provider omitted (trailing empty cells are trimmed from rows) becomes an
/// absent field and is left out of the serialized body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    /// Text or number, whatever the cell held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idade: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(
        nome: impl Into<String>,
        idade: impl Into<serde_json::Value>,
        email: impl Into<String>,
    ) -> Self {
        User {
            nome: Some(nome.into()),
            idade: Some(idade.into()),
            email: Some(email.into()),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let idade = self
            .idade
            .as_ref()
            .map(|value| match value {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .unwrap_or_default();

        write!(
            f,
            "{} ({}) <{}>",
            self.nome.as_deref().unwrap_or_default(),
            idade,
            self.email.as_deref().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_numeric_age_unchanged() {
        let user = User::new("A", 30, "a@x.com");
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"nome": "A", "idade": 30, "email": "a@x.com"})
        );
    }

    #[test]
    fn test_serializes_text_values_unchanged() {
        let user = User::new("X", "5", "x@y.com");
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"nome":"X","idade":"5","email":"x@y.com"}"#
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let user = User {
            nome: Some("Only Name".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"nome": "Only Name"})
        );
    }

    #[test]
    fn test_display() {
        let user = User::new("Ana", "42", "ana@example.com");
        assert_eq!(user.to_string(), "Ana (42) <ana@example.com>");
    }
}
