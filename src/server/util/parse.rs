use crate::server::error::AppError;

/// Splits a comma separated `include` query value into relation names.
///
/// # Arguments
/// - `raw` - The query value, e.g. `"tasks, members"`
/// - `allowed` - Relation names the resource understands
///
/// # Returns
/// - `Ok(Vec<&str>)` - Requested names, blanks skipped
/// - `Err(AppError::Validation)` - A name is not in `allowed`
pub fn parse_include<'a>(raw: Option<&'a str>, allowed: &[&str]) -> Result<Vec<&'a str>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let mut names = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !allowed.contains(&name) {
            return Err(AppError::Validation(format!(
                "Unknown relation '{}', expected one of: {}",
                name,
                allowed.join(", ")
            )));
        }
        names.push(name);
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_names() {
        let names = parse_include(Some("tasks, members,,"), &["tasks", "issues", "members"]).unwrap();
        assert_eq!(names, vec!["tasks", "members"]);
    }

    #[test]
    fn missing_value_means_no_relations() {
        assert!(parse_include(None, &["tasks"]).unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            parse_include(Some("owner"), &["tasks"]),
            Err(AppError::Validation(_))
        ));
    }
}
