//! Relation sets requested through the `include` query parameter.

use crate::server::{error::AppError, util::parse::parse_include};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectRelations {
    pub tasks: bool,
    pub issues: bool,
    pub members: bool,
}

impl ProjectRelations {
    pub const NAMES: [&'static str; 3] = ["tasks", "issues", "members"];

    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let names = parse_include(raw, &Self::NAMES)?;

        Ok(Self {
            tasks: names.contains(&"tasks"),
            issues: names.contains(&"issues"),
            members: names.contains(&"members"),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkItemRelations {
    pub project: bool,
    pub assigned_to: bool,
}

impl WorkItemRelations {
    pub const NAMES: [&'static str; 2] = ["project", "assignedTo"];

    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let names = parse_include(raw, &Self::NAMES)?;

        Ok(Self {
            project: names.contains(&"project"),
            assigned_to: names.contains(&"assignedTo"),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserRelations {
    /// Tasks assigned to the user.
    pub tasks: bool,
    /// Projects the user is a member of.
    pub projects: bool,
}

impl UserRelations {
    pub const NAMES: [&'static str; 2] = ["tasks", "projects"];

    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let names = parse_include(raw, &Self::NAMES)?;

        Ok(Self {
            tasks: names.contains(&"tasks"),
            projects: names.contains(&"projects"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_project_relations() {
        let relations = ProjectRelations::parse(Some("members,tasks")).unwrap();
        assert!(relations.tasks);
        assert!(relations.members);
        assert!(!relations.issues);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(WorkItemRelations::parse(Some("assignedTo")).unwrap().assigned_to);
        assert!(WorkItemRelations::parse(Some("assignedto")).is_err());
    }

    #[test]
    fn no_include_means_no_relations() {
        assert_eq!(UserRelations::parse(None).unwrap(), UserRelations::default());
    }
}
