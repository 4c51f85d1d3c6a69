use tracing::{debug, error, info};

use crate::app::state::BoardState;
use crate::config::BoardConfig;
use crate::domain::Project;
use crate::loader::LoadError;
use crate::location::{read_param, write_param, AddressBar};
use crate::view::{self, Node};

/// The three mount points the board draws into.
///
/// Implementations replace content wholesale; the board never asks for a
/// partial patch other than the active-row marker.
pub trait Surface {
    fn set_year(&mut self, year: u32);

    fn replace_list(&mut self, rows: &[Node]);

    /// Marks rows whose code equals `selected` as active and clears the rest
    fn mark_active(&mut self, selected: Option<&str>);

    fn replace_details(&mut self, content: &[Node]);
}

/// Selection controller: the single owner of [`BoardState`]
#[derive(Debug)]
pub struct Board<S, A> {
    state: BoardState,
    surface: S,
    address: A,
    query_param: String,
}

impl<S: Surface, A: AddressBar> Board<S, A> {
    pub fn new(config: &BoardConfig, surface: S, address: A) -> Self {
        Self {
            state: BoardState::new(),
            surface,
            address,
            query_param: config.query_param.clone(),
        }
    }

    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn address(&self) -> &A {
        &self.address
    }

    pub fn show_year(&mut self, year: u32) {
        self.surface.set_year(year);
    }

    /// Consumes the result of the one-off project load.
    pub fn start(&mut self, loaded: Result<Vec<Project>, LoadError>) {
        match loaded {
            Ok(projects) => {
                info!(count = projects.len(), "Loaded project list");
                self.state.projects = projects;
                self.render_project_list();

                let deep_link = read_param(&self.address.search(), &self.query_param);
                let initial = self
                    .state
                    .initial_selection(deep_link.as_deref())
                    .map(|project| project.code.clone());

                match initial {
                    Some(code) => {
                        self.select_project(&code);
                    }
                    None => self.render_project_details(),
                }
            }
            Err(err) => {
                error!(error = %err, "Error loading project list");
                self.surface.replace_details(&view::render_load_failure());
            }
        }
    }

    /// Selects the project with `code`.
    ///
    /// Unknown codes are ignored and leave the current selection in place;
    /// the return value is `false` for them.
    pub fn select_project(&mut self, code: &str) -> bool {
        if self.state.find(code).is_none() {
            debug!(code, "Ignoring selection of unknown project");
            return false;
        }

        debug!(code, "Selecting project");
        self.state.selected_code = Some(code.to_string());
        self.update_active_list_item();
        self.render_project_details();

        let query = write_param(&self.address.search(), &self.query_param, code);
        self.address.replace_search(&query);
        true
    }

    pub fn render_project_list(&mut self) {
        let rows = view::render_project_list(&self.state.projects);
        self.surface.replace_list(&rows);
        self.update_active_list_item();
    }

    pub fn update_active_list_item(&mut self) {
        self.surface.mark_active(self.state.selected_code.as_deref());
    }

    pub fn render_project_details(&mut self) {
        let content = view::render_project_details(self.state.selected_project());
        self.surface.replace_details(&content);
    }
}
