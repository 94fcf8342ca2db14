//! Validated identifier primitives shared across the skrining crates.

/// Errors that can occur when constructing a [`SubjectId`].
#[derive(Debug, thiserror::Error)]
pub enum SubjectIdError {
    /// The identifier was empty or contained only whitespace
    #[error("subject identifier cannot be empty")]
    Empty,
}

/// Opaque reference to the person a risk profile belongs to.
///
/// The engine never interprets this value. It is copied verbatim onto every
/// recommendation record so persistence and notification collaborators can key
/// their own storage by it; ownership of the user account itself lives with
/// the authentication collaborator.
///
/// The only guarantee a `SubjectId` carries is that it is non-empty:
/// surrounding whitespace is trimmed at construction and an identifier with
/// nothing left after trimming is rejected. Deserialisation goes through the
/// same validation, so a record parsed from the wire holds the same guarantee
/// as one built in process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectId(String);

impl SubjectId {
    /// Creates a `SubjectId` from a raw identifier string, trimming
    /// surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectIdError::Empty`] if nothing remains after trimming.
    pub fn new(input: &str) -> Result<Self, SubjectIdError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SubjectIdError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for SubjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for SubjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SubjectId::new(&raw).map_err(serde::de::Error::custom)
    }
}
