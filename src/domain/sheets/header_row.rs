use serde_json::Value;
use thiserror::Error;

use crate::domain::user::User;

pub const NAME_COLUMN: &str = "Nome";
pub const AGE_COLUMN: &str = "Idade";
pub const EMAIL_COLUMN: &str = "Email";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Column '{column}' not found in header row")]
pub struct MissingColumnError {
    pub column: &'static str,
}

/// Positions of the user columns inside the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserColumns {
    nome: usize,
    idade: usize,
    email: usize,
}

impl UserColumns {
    /// Header matching is case-sensitive; surrounding whitespace is ignored.
    /// When a header repeats, the leftmost cell wins.
    pub fn from_header_row(header_row: &[Value]) -> Result<Self, MissingColumnError> {
        let position = |column: &'static str| {
            header_row
                .iter()
                .position(|cell| cell_text(cell).trim() == column)
                .ok_or(MissingColumnError { column })
        };

        Ok(UserColumns {
            nome: position(NAME_COLUMN)?,
            idade: position(AGE_COLUMN)?,
            email: position(EMAIL_COLUMN)?,
        })
    }

    /// Cells missing from the row stay absent, so an empty row maps to an
    /// empty user.
    pub fn user_from_row(&self, row: &[Value]) -> User {
        User {
            nome: row.get(self.nome).map(cell_text),
            idade: row.get(self.idade).cloned(),
            email: row.get(self.email).map(cell_text),
        }
    }
}

/// Shapes the values of a whole sheet into users, one per data row, keeping
/// row order.
///
/// The first row is the header row; a sheet without one has no `Nome` column.
pub fn users_from_values(values: Vec<Vec<Value>>) -> Result<Vec<User>, MissingColumnError> {
    let mut rows = values.into_iter();
    let header_row = rows.next().unwrap_or_default();

    let columns = UserColumns::from_header_row(&header_row)?;
    Ok(rows.map(|row| columns.user_from_row(&row)).collect())
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(cells: Value) -> Vec<Value> {
        cells.as_array().cloned().unwrap()
    }

    #[test]
    fn test_maps_rows_in_order() {
        let values = vec![
            row(json!(["Nome", "Idade", "Email"])),
            row(json!(["A", 30, "a@x.com"])),
            row(json!(["B", "41", "b@x.com"])),
        ];

        let users = users_from_values(values).unwrap();

        assert_eq!(
            users,
            vec![User::new("A", 30, "a@x.com"), User::new("B", "41", "b@x.com")]
        );
    }

    #[test]
    fn test_columns_found_by_header_not_position() {
        let values = vec![
            row(json!(["Email", "Extra", "Nome", "Idade"])),
            row(json!(["x@y.com", "ignored", "X", "5"])),
        ];

        let users = users_from_values(values).unwrap();

        assert_eq!(users, vec![User::new("X", "5", "x@y.com")]);
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let header = row(json!(["nome", "Idade", "Email"]));
        assert_eq!(
            UserColumns::from_header_row(&header),
            Err(MissingColumnError {
                column: NAME_COLUMN
            })
        );
    }

    #[test]
    fn test_header_surrounding_whitespace_ignored() {
        let header = row(json!([" Nome ", "Idade", "Email\n"]));
        assert!(UserColumns::from_header_row(&header).is_ok());
    }

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let values = vec![row(json!(["Nome", "Email"])), row(json!(["A", "a@x.com"]))];
        let err = users_from_values(values).unwrap_err();
        assert_eq!(err.column, AGE_COLUMN);
        assert_eq!(err.to_string(), "Column 'Idade' not found in header row");
    }

    #[test]
    fn test_trimmed_row_leaves_fields_absent() {
        let values = vec![row(json!(["Nome", "Idade", "Email"])), row(json!(["A"]))];

        let users = users_from_values(values).unwrap();

        assert_eq!(
            users,
            vec![User {
                nome: Some("A".to_string()),
                idade: None,
                email: None,
            }]
        );
    }

    #[test]
    fn test_every_data_row_becomes_a_user() {
        let values = vec![
            row(json!(["Nome", "Idade", "Email"])),
            row(json!(["A", "1", "a@x.com"])),
            row(json!([])),
            row(json!(["", "", ""])),
            row(json!(["C", "3", "c@x.com"])),
        ];

        let users = users_from_values(values).unwrap();

        assert_eq!(
            users,
            vec![
                User::new("A", "1", "a@x.com"),
                User::default(),
                User::new("", "", ""),
                User::new("C", "3", "c@x.com"),
            ]
        );
        assert_eq!(serde_json::to_string(&users[1]).unwrap(), "{}");
    }

    #[test]
    fn test_sheet_without_header_row_is_missing_columns() {
        assert_eq!(
            users_from_values(Vec::new()),
            Err(MissingColumnError {
                column: NAME_COLUMN
            })
        );
    }

    #[test]
    fn test_header_only_sheet_yields_no_users() {
        let values = vec![row(json!(["Nome", "Idade", "Email"]))];
        assert!(users_from_values(values).unwrap().is_empty());
    }
}
