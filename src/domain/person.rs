use std::fmt;

use uuid::Uuid;

/// A student.
///
/// The name is fixed at construction. Each student also carries a stable
/// identity, so that two students with the same name (for example, one deleted
/// and one re-added) are never confused when checking enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    id: Uuid,
    name: String,
}

impl Student {
    /// Creates a new student with a fresh identity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// The student's name, as given at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if `other` is the same student (not merely the same
    /// name).
    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A professor, identified only by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Professor {
    name: String,
}

impl Professor {
    /// Creates a new professor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The professor's name, as given at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Professor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
