use crate::{
    controller::Controller,
    opener::{Opener, SystemOpener},
    view::{Row, TreeView},
};
use std::path::Path;

/// Application State
pub struct App<O: Opener = SystemOpener> {
    pub controller: Controller<TreeView, O>,
    pub show_help: bool,
}

impl<O: Opener> App<O> {
    pub fn new(controller: Controller<TreeView, O>) -> Self {
        Self {
            controller,
            show_help: false,
        }
    }

    pub fn view(&self) -> &TreeView {
        self.controller.presenter()
    }

    pub fn view_mut(&mut self) -> &mut TreeView {
        self.controller.presenter_mut()
    }

    pub fn current_path(&self) -> &Path {
        self.controller.current_directory().path()
    }

    pub fn clear_status(&mut self) {
        self.view_mut().status_message = None;
    }

    fn selected(&self) -> Option<Row> {
        self.view().selected_row().cloned()
    }

    /// Navigate into the selected directory or open the selected file
    pub fn activate_selected(&mut self) {
        let Some(row) = self.selected() else {
            return;
        };
        let node = self.controller.current_directory().find(&row.path).cloned();
        if let Some(node) = node {
            self.controller.on_activated(&node);
        }
    }

    /// Load the selected directory in place, or step into it when already loaded
    pub fn expand_selected(&mut self) {
        let Some(row) = self.selected() else {
            return;
        };
        if row.is_loaded_directory() {
            // Step onto the first child, if there is one
            let first_child = self
                .view()
                .state
                .selected()
                .and_then(|i| self.view().rows.get(i + 1))
                .filter(|next| next.depth > row.depth)
                .map(|next| next.path.clone());
            if let Some(path) = first_child {
                self.view_mut().select_path(&path);
            }
        } else if row.is_directory() {
            self.controller.on_expand_requested(&row.path);
        }
    }

    /// Collapse the selected directory, or its parent row, or go up a level
    pub fn collapse_selected(&mut self) {
        let Some(index) = self.view().state.selected() else {
            self.go_up();
            return;
        };
        let Some(row) = self.selected() else {
            return;
        };
        if row.is_loaded_directory() {
            self.controller.collapse(&row.path);
        } else if let Some(parent) = self.view().parent_row(index).cloned() {
            self.controller.collapse(&parent.path);
            self.view_mut().select_path(&parent.path);
        } else {
            self.go_up();
        }
    }

    /// Go up one level, keeping the directory we came from selected
    pub fn go_up(&mut self) {
        let previous = self.current_path().to_path_buf();
        match self.controller.go_up() {
            Ok(()) => {
                self.view_mut().select_path(&previous);
            }
            Err(err) => self.controller.report(err),
        }
    }

    /// Reload the current directory from disk
    pub fn refresh(&mut self) {
        match self.controller.refresh() {
            Ok(()) => self.view_mut().status_message = Some("Refresh complete!".to_string()),
            Err(err) => self.controller.report(err),
        }
    }

    pub fn cycle_sort(&mut self) {
        let mode = self.view().sort_mode.next();
        self.view_mut().sort_mode = mode;
        self.controller.redraw();
        self.view_mut().status_message = Some(format!("Sort: {}", mode.name()));
    }
}
