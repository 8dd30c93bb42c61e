use crate::{node::Node, utils::display_name};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Directory enumeration order, as listed.
    #[default]
    Native,
    Name,
    DirsFirst,
}

impl SortMode {
    pub fn next(&self) -> Self {
        match self {
            SortMode::Native => SortMode::Name,
            SortMode::Name => SortMode::DirsFirst,
            SortMode::DirsFirst => SortMode::Native,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortMode::Native => "native",
            SortMode::Name => "name",
            SortMode::DirsFirst => "dirs first",
        }
    }

    /// Display order of one directory level. The nodes themselves are untouched.
    pub fn arrange<'a>(&self, children: &'a [Node]) -> Vec<&'a Node> {
        let mut ordered: Vec<&Node> = children.iter().collect();
        match self {
            SortMode::Native => {}
            SortMode::Name => ordered.sort_by(|a, b| by_name(a, b)),
            SortMode::DirsFirst => ordered.sort_by(|a, b| {
                b.is_directory()
                    .cmp(&a.is_directory())
                    .then_with(|| by_name(a, b))
            }),
        }
        ordered
    }
}

fn by_name(a: &Node, b: &Node) -> Ordering {
    display_name(a.path())
        .to_lowercase()
        .cmp(&display_name(b.path()).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{DirectoryNode, FileNode};

    fn sample() -> Vec<Node> {
        vec![
            FileNode::new("/p/b.txt").into(),
            DirectoryNode::new("/p/lib").into(),
            FileNode::new("/p/A.txt").into(),
        ]
    }

    fn names(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| display_name(n.path())).collect()
    }

    #[test]
    fn native_keeps_listing_order() {
        let children = sample();
        assert_eq!(names(&SortMode::Native.arrange(&children)), ["b.txt", "lib", "A.txt"]);
    }

    #[test]
    fn name_is_case_insensitive() {
        let children = sample();
        assert_eq!(names(&SortMode::Name.arrange(&children)), ["A.txt", "b.txt", "lib"]);
    }

    #[test]
    fn dirs_first_then_name() {
        let children = sample();
        assert_eq!(names(&SortMode::DirsFirst.arrange(&children)), ["lib", "A.txt", "b.txt"]);
    }

    #[test]
    fn next_cycles_through_all_modes() {
        let mode = SortMode::default();
        assert_eq!(mode.next().next().next(), mode);
    }
}
