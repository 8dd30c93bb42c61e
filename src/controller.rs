use crate::{
    error::{BrowseError, BrowseResult},
    node::{DirectoryNode, Node},
    opener::Opener,
    utils::absolute_path,
};
use std::{io, path::Path};
use tracing::{info, warn};

/// The presentation side of the browser.
pub trait Presenter {
    /// Redraw from the currently displayed directory.
    fn render(&mut self, directory: &DirectoryNode);

    /// Show a short message to the user, e.g. a failed expansion.
    fn notify(&mut self, message: String);
}

/// Owns the current directory and turns presentation events into tree
/// operations. A `Controller` only exists once a starting directory has
/// been loaded.
pub struct Controller<P, O> {
    current_directory: DirectoryNode,
    presenter: P,
    opener: O,
}

impl<P: Presenter, O: Opener> Controller<P, O> {
    /// Loads `starting_path` and renders it. An error here is fatal to startup.
    pub fn initialize(starting_path: impl AsRef<Path>, presenter: P, opener: O) -> BrowseResult<Self> {
        let current_directory = load_directory(starting_path.as_ref())?;
        info!(path = %current_directory.path().display(), "initialized");

        let mut controller = Self {
            current_directory,
            presenter,
            opener,
        };
        controller.presenter.render(&controller.current_directory);
        Ok(controller)
    }

    /// Replaces the current directory with a freshly loaded one.
    /// On failure nothing changes.
    pub fn navigate(&mut self, path: impl AsRef<Path>) -> BrowseResult<()> {
        let directory = load_directory(path.as_ref())?;
        info!(path = %directory.path().display(), "navigated");
        self.current_directory = directory;
        self.presenter.render(&self.current_directory);
        Ok(())
    }

    /// Directories are navigated into, files go to the opener.
    pub fn activate(&mut self, node: &Node) -> BrowseResult<()> {
        match node {
            Node::Directory(dir) => self.navigate(dir.path()),
            Node::File(file) => Ok(self.opener.open(file.path())?),
        }
    }

    /// Loads the children of a directory inside the displayed tree.
    pub fn expand(&mut self, path: &Path) -> BrowseResult<()> {
        let directory = self
            .current_directory
            .find_directory_mut(path)
            .ok_or_else(|| {
                BrowseError::not_accessible(
                    path,
                    io::Error::new(io::ErrorKind::NotFound, "not in the displayed tree"),
                )
            })?;
        directory.load_children()?;
        self.presenter.render(&self.current_directory);
        Ok(())
    }

    /// Forgets the children of a nested directory. The current directory
    /// always stays loaded.
    pub fn collapse(&mut self, path: &Path) {
        if path == self.current_directory.path() {
            return;
        }
        if let Some(directory) = self.current_directory.find_directory_mut(path) {
            directory.unload();
            self.presenter.render(&self.current_directory);
        }
    }

    /// Navigates to the parent of the current directory, if there is one.
    pub fn go_up(&mut self) -> BrowseResult<()> {
        match self.current_directory.path().parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.navigate(parent)
            }
            None => Ok(()),
        }
    }

    /// Renders again without touching the tree, e.g. after a sort change.
    pub fn redraw(&mut self) {
        self.presenter.render(&self.current_directory);
    }

    pub fn refresh(&mut self) -> BrowseResult<()> {
        let path = self.current_directory.path().to_path_buf();
        self.navigate(path)
    }

    pub fn on_expand_requested(&mut self, path: &Path) {
        if let Err(err) = self.expand(path) {
            self.report(err);
        }
    }

    pub fn on_activated(&mut self, node: &Node) {
        if let Err(err) = self.activate(node) {
            self.report(err);
        }
    }

    /// Failures stop here: logged and shown, never raised further.
    pub fn report(&mut self, err: BrowseError) {
        warn!(error = %err, "operation failed");
        self.presenter.notify(err.to_string());
    }

    pub fn current_directory(&self) -> &DirectoryNode {
        &self.current_directory
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }
}

fn load_directory(path: &Path) -> BrowseResult<DirectoryNode> {
    let path = absolute_path(path).map_err(|source| BrowseError::not_accessible(path, source))?;
    let mut directory = DirectoryNode::new(path);
    directory.load_children()?;
    Ok(directory)
}
