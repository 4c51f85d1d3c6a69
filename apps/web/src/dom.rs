use project_board::view::list::{is_active, ACTIVE_CLASS, CODE_ATTR};
use project_board::view::Node;
use project_board::{BoardConfig, Surface};
use thiserror::Error;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::describe_js_error;

/// Errors raised while attaching to the host page
#[derive(Error, Debug)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("mount point #{0} not found")]
    MissingMount(String),

    #[error("could not bind {event} listener: {message}")]
    Listener { event: &'static str, message: String },
}

/// The page elements the board renders into
pub struct DomSurface {
    document: Document,
    year: Element,
    list: Element,
    details: Element,
}

impl DomSurface {
    pub fn mount(document: &Document, config: &BoardConfig) -> Result<Self, MountError> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| MountError::MissingMount(id.to_string()))
        };

        Ok(Self {
            document: document.clone(),
            year: find(&config.year_mount)?,
            list: find(&config.list_mount)?,
            details: find(&config.details_mount)?,
        })
    }

    pub const fn list(&self) -> &Element {
        &self.list
    }

    /// Data source override declared on the list element (`data-src`)
    pub fn data_source(&self) -> Option<String> {
        self.list.get_attribute("data-src")
    }

    fn build(&self, node: &Node) -> Result<web_sys::Node, JsValue> {
        match node {
            Node::Text(text) => Ok(self.document.create_text_node(text).into()),
            Node::Element(spec) => {
                let element = self.document.create_element(spec.tag)?;
                if !spec.classes.is_empty() {
                    element.set_class_name(&spec.classes.join(" "));
                }
                for (name, value) in &spec.attrs {
                    element.set_attribute(name, value)?;
                }
                for child in &spec.children {
                    element.append_child(&self.build(child)?)?;
                }
                Ok(element.into())
            }
        }
    }

    fn replace(&self, target: &Element, nodes: &[Node]) {
        target.set_text_content(None);
        for node in nodes {
            let appended = self
                .build(node)
                .and_then(|built| target.append_child(&built));
            if let Err(err) = appended {
                warn!(error = %describe_js_error(&err), "Failed to mount node");
            }
        }
    }
}

impl Surface for DomSurface {
    fn set_year(&mut self, year: u32) {
        self.year.set_text_content(Some(&year.to_string()));
    }

    fn replace_list(&mut self, rows: &[Node]) {
        self.replace(&self.list, rows);
    }

    fn mark_active(&mut self, selected: Option<&str>) {
        let rows = self.list.children();
        for index in 0..rows.length() {
            let Some(row) = rows.item(index) else {
                continue;
            };
            let active = row
                .get_attribute(CODE_ATTR)
                .is_some_and(|code| is_active(&code, selected));
            if let Err(err) = row.class_list().toggle_with_force(ACTIVE_CLASS, active) {
                warn!(error = %describe_js_error(&err), "Failed to toggle active row");
            }
        }
    }

    fn replace_details(&mut self, content: &[Node]) {
        self.replace(&self.details, content);
    }
}
