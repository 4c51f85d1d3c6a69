use crate::domain::{Project, Task, TaskStatus};
use crate::format::{format_date, Progress};
use crate::view::{Element, Node};

const PROMPT: &str = "Select a project from the list to see more details.";
const NO_TASKS: &str = "No tasks listed yet.";
const LOAD_FAILED: &str = "Sorry, I couldn’t load the project list.";

fn muted(text: &str) -> Node {
    Element::new("p").class("muted").text(text).into()
}

/// Content of the details pane for the selected project, or the prompt
pub fn render_project_details(project: Option<&Project>) -> Vec<Node> {
    let Some(project) = project else {
        return vec![muted(PROMPT)];
    };

    let progress = Progress::of(project);

    let header = Element::new("div")
        .class("project-header")
        .child(Element::new("h2").text(project.title.clone()))
        .child(
            Element::new("p")
                .class("project-author-line")
                .text(format!("by {}", project.author)),
        );

    let mut progress_value = Element::new("span").class("meta-value");
    if progress.is_complete() {
        progress_value = progress_value.class("project-complete");
    }

    let meta = Element::new("div")
        .class("project-meta")
        .child(meta_row("Code:", Element::new("span").class("meta-value").text(project.code.clone())))
        .child(meta_row(
            "Target date:",
            Element::new("span")
                .class("meta-value")
                .text(format_date(project.target_date.as_deref())),
        ))
        .child(meta_row("Progress:", progress_value.text(progress.summary())));

    vec![
        header.into(),
        meta.into(),
        Element::new("h3").text("Tasks").into(),
        render_tasks(&project.tasks),
    ]
}

fn meta_row(label: &str, value: Element) -> Element {
    Element::new("div")
        .child(Element::new("span").class("meta-label").text(label))
        .child(value)
}

fn render_tasks(tasks: &[Task]) -> Node {
    if tasks.is_empty() {
        return muted(NO_TASKS);
    }

    Element::new("ul")
        .class("task-list")
        .children(tasks.iter().map(render_task))
        .into()
}

fn render_task(task: &Task) -> Node {
    let status = task.effective_status();

    let tooltip = match status {
        TaskStatus::Done => format!(
            "Completed on {}",
            format_date(task.completion_text().as_deref())
        ),
        TaskStatus::InProgress => "Currently in progress".to_string(),
        TaskStatus::Todo => "Not started yet".to_string(),
    };

    let mut label = Element::new("span").class("task-label").text(task.task.clone());
    if status == TaskStatus::InProgress {
        label = label.child(
            Element::new("span")
                .class("task-badge")
                .class("task-badge-in-progress")
                .text("In progress"),
        );
    }

    Element::new("li")
        .class("task-item")
        .attr("data-status", status.as_str())
        .child(
            Element::new("span")
                .class("task-status")
                .class(status.css_class())
                .attr("title", tooltip)
                .text(status.icon()),
        )
        .child(label)
        .into()
}

/// Static message shown when the project list could not be loaded
pub fn render_load_failure() -> Vec<Node> {
    vec![muted(LOAD_FAILED)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Completion;
    use crate::view::to_html;
    use pretty_assertions::assert_eq;

    fn task(label: &str, status: Option<&str>, complete: Option<Completion>) -> Task {
        Task {
            task: label.to_string(),
            status: status.map(str::to_string),
            complete,
        }
    }

    fn project(tasks: Vec<Task>) -> Project {
        Project {
            code: "ABC".to_string(),
            title: "Garden shed".to_string(),
            author: "Robin".to_string(),
            target_date: Some("2025-11-29".to_string()),
            tasks,
        }
    }

    fn statuses(nodes: &[Node]) -> Vec<(String, String)> {
        let mut marks = Vec::new();
        for node in nodes {
            node.find_by_class("task-status", &mut marks);
        }
        marks
            .into_iter()
            .map(|mark| {
                (
                    mark.classes.join(" "),
                    mark.get_attr("title").unwrap_or_default().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn no_project_shows_prompt() {
        assert_eq!(
            to_html(&render_project_details(None)),
            "<p class=\"muted\">Select a project from the list to see more details.</p>"
        );
    }

    #[test]
    fn renders_header_and_metadata() {
        let project = project(vec![task("Base", Some("done"), None)]);
        let nodes = render_project_details(Some(&project));
        let text: String = nodes.iter().map(Node::text_content).collect();

        assert!(text.contains("Garden shed"));
        assert!(text.contains("by Robin"));
        assert!(text.contains("Code:ABC"));
        assert!(text.contains("Target date:29 November 2025"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let project = project(vec![
            task("Base", Some("done"), Some(Completion::Date("2025-10-02".into()))),
            task("Walls", Some("in_progress"), None),
        ]);
        assert_eq!(
            render_project_details(Some(&project)),
            render_project_details(Some(&project))
        );
    }

    #[test]
    fn empty_task_list_shows_both_messages() {
        let html = to_html(&render_project_details(Some(&project(Vec::new()))));

        assert!(html.contains("No tasks listed yet."));
        assert!(html.contains("0 of 0 tasks complete"));
        assert!(!html.contains("project-complete"));
    }

    #[test]
    fn all_done_is_celebrated() {
        let project = project(vec![
            task("Base", Some("done"), None),
            task("Roof", None, Some(Completion::Flag(true))),
        ]);
        let html = to_html(&render_project_details(Some(&project)));

        assert!(html.contains("<span class=\"meta-value project-complete\">🎉 Project Complete! 🎉</span>"));
        assert!(!html.contains("tasks complete"));
    }

    #[test]
    fn task_rows_reflect_each_status() {
        let project = project(vec![
            task("Base", Some("done"), Some(Completion::Date("2025-10-02".into()))),
            task("Walls", Some("in_progress"), None),
            task("Roof", None, Some(Completion::Flag(false))),
            task("Door", None, Some(Completion::Flag(true))),
        ]);
        let nodes = render_project_details(Some(&project));

        assert_eq!(
            statuses(&nodes),
            vec![
                ("task-status done".to_string(), "Completed on 2 October 2025".to_string()),
                ("task-status in-progress".to_string(), "Currently in progress".to_string()),
                ("task-status pending".to_string(), "Not started yet".to_string()),
                ("task-status done".to_string(), "Completed on true".to_string()),
            ]
        );

        let mut badges = Vec::new();
        for node in &nodes {
            node.find_by_class("task-badge-in-progress", &mut badges);
        }
        assert_eq!(badges.len(), 1);

        let html = to_html(&nodes);
        assert!(html.contains("2 of 4 tasks complete"));
    }

    #[test]
    fn done_without_date_uses_placeholder() {
        let project = project(vec![task("Base", Some("done"), None)]);
        assert_eq!(
            statuses(&render_project_details(Some(&project))),
            vec![("task-status done".to_string(), "Completed on —".to_string())]
        );
    }

    #[test]
    fn load_failure_message() {
        assert_eq!(
            to_html(&render_load_failure()),
            "<p class=\"muted\">Sorry, I couldn’t load the project list.</p>"
        );
    }
}
