//! Tree renderer
//!
//! Renders a [`TreeIndex`] as an indented tree with box-drawing connectors:
//!
//! ```text
//! app/
//! ├── blog/
//! │   └── page.tsx
//! └── page.tsx
//! ```

use std::io::{self, Write};

use crate::core::model::{DirectoryNode, TreeIndex};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUE_INDENT: &str = "│   ";
const LAST_INDENT: &str = "    ";

/// Writes a tree index line by line
pub struct TreeRenderer<'a> {
    index: &'a TreeIndex,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(index: &'a TreeIndex) -> Self {
        Self { index }
    }

    /// Write the root line followed by every indexed entry
    pub fn render_to<W: Write>(&self, root_name: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}/", root_name)?;
        if let Some(root) = self.index.root() {
            self.render_children(root, "", out)?;
        }
        Ok(())
    }

    /// Render to a string
    #[cfg(test)]
    pub fn render(&self, root_name: &str) -> String {
        let mut buf = Vec::new();
        self.render_to(root_name, &mut buf)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn render_children<W: Write>(
        &self,
        node: &DirectoryNode,
        prefix: &str,
        out: &mut W,
    ) -> io::Result<()> {
        // Sets iterate in ascending order; directories go first
        let entries: Vec<(&String, bool)> = node
            .subdirectories
            .iter()
            .map(|name| (name, true))
            .chain(node.files.iter().map(|name| (name, false)))
            .collect();

        let count = entries.len();
        for (idx, (name, is_dir)) in entries.into_iter().enumerate() {
            let is_last = idx == count - 1;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };

            if !is_dir {
                writeln!(out, "{}{}{}", prefix, connector, name)?;
                continue;
            }

            writeln!(out, "{}{}{}/", prefix, connector, name)?;
            let child_prefix = format!(
                "{}{}",
                prefix,
                if is_last { LAST_INDENT } else { CONTINUE_INDENT }
            );
            if let Some(child) = self.index.get(&node.child_path(name)) {
                self.render_children(child, &child_prefix, out)?;
            }
        }

        Ok(())
    }
}

/// Print the tree of `index` under the display name `root_name`
pub fn print_tree<W: Write>(index: &TreeIndex, root_name: &str, out: &mut W) -> io::Result<()> {
    TreeRenderer::new(index).render_to(root_name, out)
}
