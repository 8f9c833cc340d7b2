//! Domain models for course enrollment.
//!
//! This module contains the entity records (students, professors and
//! courses), the name matching rule they share, and configuration.

/// Course records and their enrolled students.
pub mod course;
pub use course::Course;

/// Configuration loading and saving.
pub mod config;
pub use config::{Config, ConfigError};

mod person;
pub use person::{Professor, Student};

/// Returns `true` if two names differ at most in letter casing.
///
/// Names are compared character by character. Two characters match if they
/// are equal, if their uppercase forms are equal, or if the lowercase forms of
/// those uppercase forms are equal. This treats final and medial sigma alike,
/// and dotted capital I alike with i.
///
/// This is the only notion of identity for professors, and the lookup rule
/// for students and courses.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_match(x, y))
}

fn chars_match(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_uppercase(a), simple_uppercase(b));
    upper_a == upper_b || simple_lowercase(upper_a) == simple_lowercase(upper_b)
}

/// Single-character uppercase mapping. Characters whose uppercase form
/// expands (`ß` to `SS`) map to themselves.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Single-character lowercase mapping.
///
/// The only expanding lowercase form is `İ` to `i` plus a combining dot; its
/// leading `i` is the single-character mapping.
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::names_match;

    #[test]
    fn matching_ignores_case() {
        assert!(names_match("Alice", "alice"));
        assert!(names_match("DR. SMITH", "dr. smith"));
        assert!(names_match("", ""));
    }

    #[test]
    fn matching_is_otherwise_exact() {
        assert!(!names_match("Dr. Smith", "Dr Smith"));
        assert!(!names_match("Alice", "Alice "));
        assert!(!names_match("CS101", "CS1O1"));
    }

    #[test]
    fn matching_handles_non_ascii() {
        assert!(names_match("Zoë", "ZOË"));
        assert!(!names_match("Zoë", "Zoe"));
    }

    #[test]
    fn matching_treats_sigma_forms_alike() {
        assert!(names_match("ΟΔΟΣ", "οδος"));
        assert!(names_match("ΝΙΚΟΣ", "νικος"));
        assert!(names_match("νικοσ", "νικος"));
    }

    #[test]
    fn matching_treats_dotted_capital_i_as_i() {
        assert!(names_match("İ", "i"));
        assert!(names_match("İlker", "ilker"));
        assert!(names_match("İlker", "ILKER"));
    }

    #[test]
    fn matching_never_expands_characters() {
        assert!(!names_match("Straße", "STRASSE"));
        assert!(!names_match("ß", "s"));
        assert!(names_match("ß", "ß"));
    }
}
