use crate::domain::Project;

/// Everything the views are rendered from
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BoardState {
    pub projects: Vec<Project>,
    /// Always a code present in `projects`, or `None`
    pub selected_code: Option<String>,
}

impl BoardState {
    pub const fn new() -> Self {
        Self {
            projects: Vec::new(),
            selected_code: None,
        }
    }

    pub fn find(&self, code: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.code == code)
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected_code.as_deref().and_then(|code| self.find(code))
    }

    /// Project to show on startup: the deep-linked one when it exists,
    /// otherwise the first in the list.
    pub fn initial_selection(&self, deep_link: Option<&str>) -> Option<&Project> {
        deep_link
            .and_then(|code| self.find(code))
            .or_else(|| self.projects.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(codes: &[&str]) -> BoardState {
        BoardState {
            projects: codes
                .iter()
                .map(|code| Project {
                    code: (*code).to_string(),
                    title: format!("Project {code}"),
                    author: "Jo".to_string(),
                    target_date: None,
                    tasks: Vec::new(),
                })
                .collect(),
            selected_code: None,
        }
    }

    #[test]
    fn deep_link_wins_over_first_project() {
        let state = state(&["ABC", "XYZ"]);
        let project = state.initial_selection(Some("XYZ"));
        assert_eq!(project.map(|p| p.code.as_str()), Some("XYZ"));
    }

    #[test]
    fn unknown_deep_link_falls_back_to_first() {
        let state = state(&["ABC", "XYZ"]);
        assert_eq!(
            state.initial_selection(Some("nope")).map(|p| p.code.as_str()),
            Some("ABC")
        );
        assert_eq!(
            state.initial_selection(None).map(|p| p.code.as_str()),
            Some("ABC")
        );
    }

    #[test]
    fn empty_list_has_no_initial_selection() {
        assert_eq!(BoardState::new().initial_selection(Some("ABC")), None);
    }

    #[test]
    fn selected_project_follows_code() {
        let mut state = state(&["ABC", "XYZ"]);
        assert_eq!(state.selected_project(), None);
        state.selected_code = Some("XYZ".to_string());
        assert_eq!(state.selected_project().map(|p| p.title.as_str()), Some("Project XYZ"));
    }
}
