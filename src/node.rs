use crate::error::{BrowseError, BrowseResult};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::debug;

/// An entry of the browsable hierarchy. Identity is the path.
#[derive(Debug, Clone)]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

/// A leaf entry.
#[derive(Debug, Clone)]
pub struct FileNode {
    path: PathBuf,
    size: Option<u64>,
}

/// Whether a directory has been listed yet. An empty directory is
/// `Loaded(vec![])`, never `NotLoaded`.
#[derive(Debug, Clone)]
enum Children {
    NotLoaded,
    Loaded(Vec<Node>),
}

/// A directory entry owning its children.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    path: PathBuf,
    children: Children,
}

fn final_component(path: &Path) -> io::Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no final component", path.display()),
            )
        })
}

impl Node {
    pub fn path(&self) -> &Path {
        match self {
            Node::File(file) => file.path(),
            Node::Directory(dir) => dir.path(),
        }
    }

    pub fn name(&self) -> io::Result<String> {
        final_component(self.path())
    }

    /// Fixed by the variant; the filesystem is not consulted again.
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.path() == other.path()
    }
}

impl Eq for Node {}

impl From<FileNode> for Node {
    fn from(file: FileNode) -> Self {
        Node::File(file)
    }
}

impl From<DirectoryNode> for Node {
    fn from(dir: DirectoryNode) -> Self {
        Node::Directory(dir)
    }
}

impl FileNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: None,
        }
    }

    pub fn with_size(mut self, size: Option<u64>) -> Self {
        self.size = size;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> io::Result<String> {
        final_component(&self.path)
    }

    /// Size in bytes as seen when the parent was listed.
    pub fn size(&self) -> Option<u64> {
        self.size
    }
}

impl DirectoryNode {
    /// Creates an unloaded directory node.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            children: Children::NotLoaded,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> io::Result<String> {
        final_component(&self.path)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.children, Children::Loaded(_))
    }

    /// `None` until the directory has been listed.
    pub fn children(&self) -> Option<&[Node]> {
        match &self.children {
            Children::Loaded(children) => Some(children),
            Children::NotLoaded => None,
        }
    }

    /// Lists the directory and replaces the children with fresh nodes.
    ///
    /// On failure the previous children are kept as they were.
    pub fn load_children(&mut self) -> BrowseResult<&[Node]> {
        let children = read_children(&self.path)?;
        debug!(path = %self.path.display(), count = children.len(), "loaded children");
        self.children = Children::Loaded(children);
        Ok(self.children().unwrap_or_default())
    }

    /// Drops the children and goes back to `NotLoaded`.
    pub fn unload(&mut self) {
        self.children = Children::NotLoaded;
    }

    /// Looks up a node among the loaded descendants.
    pub fn find(&self, path: &Path) -> Option<&Node> {
        self.children()?.iter().find_map(|child| {
            if child.path() == path {
                Some(child)
            } else if let Node::Directory(dir) = child
                && path.starts_with(&dir.path)
            {
                dir.find(path)
            } else {
                None
            }
        })
    }

    /// Looks up this directory or a loaded descendant directory.
    pub fn find_directory_mut(&mut self, path: &Path) -> Option<&mut DirectoryNode> {
        if self.path == path {
            return Some(self);
        }
        let Children::Loaded(children) = &mut self.children else {
            return None;
        };
        children.iter_mut().find_map(|child| match child {
            Node::Directory(dir) if path.starts_with(&dir.path) => dir.find_directory_mut(path),
            _ => None,
        })
    }
}

impl PartialEq for DirectoryNode {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for DirectoryNode {}

/// Immediate entries of `path` in enumeration order. Symlinks count as
/// directories when their target is one.
fn read_children(path: &Path) -> BrowseResult<Vec<Node>> {
    let not_accessible = |source: io::Error| BrowseError::not_accessible(path, source);

    let mut children = Vec::new();
    for entry in fs::read_dir(path).map_err(not_accessible)? {
        let entry = entry.map_err(not_accessible)?;
        let entry_path = entry.path();
        let file_type = entry.file_type().map_err(not_accessible)?;
        let is_dir = if file_type.is_symlink() {
            entry_path.is_dir()
        } else {
            file_type.is_dir()
        };

        if is_dir {
            children.push(Node::Directory(DirectoryNode::new(entry_path)));
        } else {
            let size = fs::metadata(&entry_path).ok().map(|m| m.len());
            children.push(Node::File(FileNode::new(entry_path).with_size(size)));
        }
    }
    Ok(children)
}
