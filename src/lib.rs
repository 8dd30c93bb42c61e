pub mod app;
pub mod args;
pub mod colors;
pub mod controller;
pub mod error;
pub mod logging;
pub mod node;
pub mod opener;
pub mod sort;
pub mod ui;
pub mod utils;
pub mod view;

pub use app::App;
pub use args::Args;
pub use controller::{Controller, Presenter};
pub use error::{BrowseError, BrowseResult, OpenError};
pub use node::{DirectoryNode, FileNode, Node};
pub use opener::{Opener, SystemOpener};
pub use sort::SortMode;
pub use view::TreeView;
