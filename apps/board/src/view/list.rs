use crate::domain::Project;
use crate::view::{Element, Node};

pub const ROW_CLASS: &str = "project-list-item";
pub const ACTIVE_CLASS: &str = "active";
/// Attribute tagging each row with its project code
pub const CODE_ATTR: &str = "data-code";

/// One selectable row per project, in load order
pub fn render_project_list(projects: &[Project]) -> Vec<Node> {
    projects.iter().map(render_row).collect()
}

fn render_row(project: &Project) -> Node {
    Element::new("button")
        .class(ROW_CLASS)
        .attr("type", "button")
        .attr(CODE_ATTR, project.code.clone())
        .child(Element::new("span").class("project-title").text(project.title.clone()))
        .child(Element::new("span").class("project-author").text(project.author.clone()))
        .into()
}

/// Whether a row tagged `row_code` should carry the active marker
pub fn is_active(row_code: &str, selected: Option<&str>) -> bool {
    selected == Some(row_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(code: &str, title: &str, author: &str) -> Project {
        Project {
            code: code.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            target_date: None,
            tasks: Vec::new(),
        }
    }

    #[test]
    fn renders_a_tagged_row_per_project() {
        let projects = vec![project("A1", "Alpha", "Ann"), project("B2", "Beta", "Bo")];
        let rows = render_project_list(&projects);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].to_html(),
            "<button class=\"project-list-item\" type=\"button\" data-code=\"A1\">\
             <span class=\"project-title\">Alpha</span>\
             <span class=\"project-author\">Ann</span></button>"
        );
        let Node::Element(second) = &rows[1] else {
            panic!("row should be an element");
        };
        assert_eq!(second.get_attr(CODE_ATTR), Some("B2"));
    }

    fn active_rows(rows: &[Node], selected: Option<&str>) -> Vec<bool> {
        rows.iter()
            .map(|row| match row {
                Node::Element(element) => element
                    .get_attr(CODE_ATTR)
                    .is_some_and(|code| is_active(code, selected)),
                Node::Text(_) => false,
            })
            .collect()
    }

    #[test]
    fn exactly_one_row_is_active_for_a_known_code() {
        let projects = vec![
            project("A1", "Alpha", "Ann"),
            project("B2", "Beta", "Bo"),
            project("C3", "Gamma", "Cy"),
        ];

        let rows = render_project_list(&projects);

        assert_eq!(active_rows(&rows, Some("B2")), [false, true, false]);
        assert_eq!(active_rows(&rows, Some("ZZ")), [false, false, false]);
        assert_eq!(active_rows(&rows, None), [false, false, false]);
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(render_project_list(&[]).is_empty());
        assert!(!is_active("A1", None));
    }
}
