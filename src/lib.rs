//! In-memory Course Registry
//!
//! Students, professors and courses are kept in a [`Directory`] owned by the
//! caller and manipulated through [`UserService`] and [`CourseService`].

pub mod domain;
pub use domain::{Config, Course, Professor, Student};

/// In-memory storage of students, professors and courses.
pub mod storage;
pub use storage::Directory;

/// Operations over a [`Directory`].
pub mod service;
pub use service::{CourseService, UserService};
