/// Where the board finds its data and its mount points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// URL of the project list, relative to the page
    pub data_url: String,
    /// Query parameter holding the selected project code
    pub query_param: String,
    pub year_mount: String,
    pub list_mount: String,
    pub details_mount: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_url: "projects.json".to_string(),
            query_param: "code".to_string(),
            year_mount: "year".to_string(),
            list_mount: "project-list".to_string(),
            details_mount: "project-details".to_string(),
        }
    }
}

impl BoardConfig {
    /// Replaces the data URL when the host page provides a non-blank one
    #[must_use]
    pub fn with_data_url(mut self, data_url: Option<String>) -> Self {
        if let Some(url) = data_url.filter(|url| !url.trim().is_empty()) {
            self.data_url = url.trim().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_page() {
        let config = BoardConfig::default();
        assert_eq!(config.data_url, "projects.json");
        assert_eq!(config.query_param, "code");
        assert_eq!(config.list_mount, "project-list");
    }

    #[test]
    fn blank_override_keeps_default() {
        let config = BoardConfig::default().with_data_url(Some("  ".to_string()));
        assert_eq!(config.data_url, "projects.json");

        let config = BoardConfig::default().with_data_url(Some("data/q3.json".to_string()));
        assert_eq!(config.data_url, "data/q3.json");
    }
}
