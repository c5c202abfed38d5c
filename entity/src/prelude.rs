pub use super::issue::Entity as Issue;
pub use super::project::Entity as Project;
pub use super::project_member::Entity as ProjectMember;
pub use super::task::Entity as Task;
pub use super::user::Entity as User;
