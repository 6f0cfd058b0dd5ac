pub mod assignments;
pub mod dashboard;
pub mod reviews;
pub mod submissions;
pub mod users;
