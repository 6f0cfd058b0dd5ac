pub mod assignments;
pub mod dashboard;
pub mod reviews;
pub mod session;
pub mod submissions;

pub use assignments::AssignmentService;
pub use dashboard::DashboardService;
pub use reviews::ReviewService;
pub use session::SessionService;
pub use submissions::SubmissionService;

#[cfg(test)]
pub(crate) mod test_support;
