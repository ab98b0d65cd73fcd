use std::fmt::Formatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(String);

impl A1Notation {
    /// Addresses every cell of the sheet with the given title.
    ///
    /// The title is always quoted; embedded single quotes are doubled as the
    /// Sheets API expects.
    /// # Examples
    /// ```
    /// use sheet_sync::domain::sheets::a1_notation::A1Notation;
    /// assert_eq!(A1Notation::whole_sheet("Users").as_ref(), "'Users'");
    /// assert_eq!(A1Notation::whole_sheet("Ana's").as_ref(), "'Ana''s'");
    /// ```
    pub fn whole_sheet(sheet_title: &str) -> Self {
        A1Notation(format!("'{}'", sheet_title.replace('\'', "''")))
    }
}

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
