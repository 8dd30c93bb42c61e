use crate::{
    controller::Presenter,
    node::{DirectoryNode, Node},
    sort::SortMode,
    utils::display_name,
};
use ratatui::widgets::ListState;
use std::path::{Path, PathBuf};

const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    File { size: Option<u64> },
    /// `loaded` decides between the collapsed and the expanded marker.
    Directory { loaded: bool },
}

/// One visible line of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub path: PathBuf,
    pub name: String,
    pub depth: usize,
    pub kind: RowKind,
}

impl Row {
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, RowKind::Directory { .. })
    }

    pub fn is_loaded_directory(&self) -> bool {
        matches!(self.kind, RowKind::Directory { loaded: true })
    }
}

/// Presentation state: the displayed subtree flattened into rows.
#[derive(Debug, Default)]
pub struct TreeView {
    pub root: PathBuf,
    pub rows: Vec<Row>,
    pub state: ListState,
    pub status_message: Option<String>,
    pub sort_mode: SortMode,
}

impl TreeView {
    pub fn new(sort_mode: SortMode) -> Self {
        Self {
            sort_mode,
            ..Self::default()
        }
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.state.selected().and_then(|i| self.rows.get(i))
    }

    pub fn position(&self, path: &Path) -> Option<usize> {
        self.rows.iter().position(|row| row.path == path)
    }

    /// Selects the row for `path` if it is visible.
    pub fn select_path(&mut self, path: &Path) -> bool {
        match self.position(path) {
            Some(i) => {
                self.state.select(Some(i));
                true
            }
            None => false,
        }
    }

    /// Nearest row above `index` with a smaller depth.
    pub fn parent_row(&self, index: usize) -> Option<&Row> {
        let depth = self.rows.get(index)?.depth;
        self.rows
            .get(..index)?
            .iter()
            .rev()
            .find(|row| row.depth < depth)
    }

    pub fn directory_count(&self) -> usize {
        self.rows.iter().filter(|row| row.depth == 0 && row.is_directory()).count()
    }

    pub fn file_count(&self) -> usize {
        self.rows.iter().filter(|row| row.depth == 0 && !row.is_directory()).count()
    }

    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + PAGE_SIZE).min(self.rows.len() - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(PAGE_SIZE),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn go_to_first(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn go_to_last(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(self.rows.len() - 1));
        }
    }

    fn push_rows(&mut self, directory: &DirectoryNode, depth: usize) {
        let Some(children) = directory.children() else {
            return;
        };
        for child in self.sort_mode.arrange(children) {
            let kind = match child {
                Node::File(file) => RowKind::File { size: file.size() },
                Node::Directory(dir) => RowKind::Directory {
                    loaded: dir.is_loaded(),
                },
            };
            self.rows.push(Row {
                path: child.path().to_path_buf(),
                name: display_name(child.path()),
                depth,
                kind,
            });
            if let Node::Directory(dir) = child {
                self.push_rows(dir, depth + 1);
            }
        }
    }
}

impl Presenter for TreeView {
    /// Rebuilds the rows. The selection follows its path while the root stays
    /// the same, and resets to the top when the root changes.
    fn render(&mut self, directory: &DirectoryNode) {
        let same_root = self.root == directory.path();
        let previous_index = self.state.selected();
        let previous_path = self.selected_row().map(|row| row.path.clone());

        self.root = directory.path().to_path_buf();
        self.rows.clear();
        self.push_rows(directory, 0);

        let selected = if self.rows.is_empty() {
            None
        } else if same_root {
            previous_path
                .and_then(|path| self.position(&path))
                .or_else(|| previous_index.map(|i| i.min(self.rows.len() - 1)))
                .or(Some(0))
        } else {
            Some(0)
        };
        self.state.select(selected);
    }

    fn notify(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
