mod course;
mod user;

pub use course::CourseService;
pub use user::UserService;
