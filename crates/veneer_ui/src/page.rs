//! Page tree with id index and locator resolution
//!
//! A [`Page`] owns the root node sequence a screen built for one request and
//! indexes every declared id. It is the resolution context for [`Locator`]s
//! and, on the client side of a simulation, the mutable surface that
//! [`UpdateMessage`]s are applied to.
//!
//! Id uniqueness is checked at construction: every node that participates in
//! actions or is an update target must be addressable unambiguously.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::UiError;
use crate::locator::Locator;
use crate::node::{NodeKind, UiNode};
use crate::update::UpdateMessage;

/// Tree path from the root sequence down to one node. The first element
/// indexes into the roots, the rest into successive child lists.
type NodePath = Vec<usize>;

/// An indexed page: root nodes plus an id lookup table.
#[derive(Debug, Clone)]
pub struct Page {
    roots: Vec<UiNode>,
    index: FxHashMap<String, NodePath>,
}

impl Page {
    /// Index the given root sequence.
    ///
    /// Fails with [`UiError::DuplicateId`] if two nodes declare the same id.
    pub fn new(roots: Vec<UiNode>) -> Result<Self, UiError> {
        let mut index = FxHashMap::default();
        for (i, root) in roots.iter().enumerate() {
            index_node(root, vec![i], &mut index)?;
        }
        Ok(Self { roots, index })
    }

    /// The root node sequence.
    pub fn roots(&self) -> &[UiNode] {
        &self.roots
    }

    /// Look up a node by id.
    pub fn find_by_id(&self, id: &str) -> Option<&UiNode> {
        self.index.get(id).map(|path| self.node_at(path))
    }

    /// Iterate over every node in the page, depth-first.
    pub fn iter(&self) -> impl Iterator<Item = &UiNode> {
        let mut stack: Vec<&UiNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Resolve a locator to a node.
    ///
    /// Relative locators resolve against `source_id`, the id of the node the
    /// triggering event fired on.
    pub fn resolve(&self, locator: &Locator, source_id: Option<&str>) -> Result<&UiNode, UiError> {
        self.resolve_path(locator, source_id)
            .map(|path| self.node_at(&path))
    }

    /// Apply one targeted update to this tree, client-style.
    ///
    /// A locator that matches no node is a no-op, surfaced only as a log
    /// entry. Unknown field names are ignored per field, also with a log
    /// entry.
    pub fn apply(&mut self, msg: &UpdateMessage, source_id: Option<&str>) {
        let path = match self.resolve_path(&msg.locator, source_id) {
            Ok(path) => path,
            Err(err) => {
                warn!(locator = %msg.locator, %err, "update target not found, dropping update");
                return;
            }
        };
        let node = node_at_mut(&mut self.roots, &path);
        for (field, value) in &msg.fields {
            match field.as_str() {
                "value" => match node.kind {
                    NodeKind::Label | NodeKind::Textbox | NodeKind::Button => {
                        node.props.text = Some(value.clone());
                    }
                    _ => debug!(kind = ?node.kind, "value update on non-text node ignored"),
                },
                "sclass" => node.props.sclass = Some(value.clone()),
                "style" => node.props.style = Some(value.clone()),
                "width" => node.props.width = Some(value.clone()),
                "placeholder" => node.props.placeholder = Some(value.clone()),
                other => debug!(field = other, "unknown update field ignored"),
            }
        }
    }

    fn resolve_path(&self, locator: &Locator, source_id: Option<&str>) -> Result<NodePath, UiError> {
        match locator {
            Locator::ById(id) => self
                .index
                .get(id)
                .cloned()
                .ok_or_else(|| UiError::MissingTarget(locator.to_string())),
            relative => {
                let source_id = source_id
                    .ok_or_else(|| UiError::MissingSourceContext(relative.to_string()))?;
                let source = self
                    .index
                    .get(source_id)
                    .ok_or_else(|| UiError::MissingTarget(format!("#{source_id}")))?;
                self.relative_path(relative, source)
                    .ok_or_else(|| UiError::MissingTarget(relative.to_string()))
            }
        }
    }

    fn relative_path(&self, locator: &Locator, source: &NodePath) -> Option<NodePath> {
        match locator {
            Locator::This => Some(source.clone()),
            Locator::Parent => {
                if source.len() > 1 {
                    Some(source[..source.len() - 1].to_vec())
                } else {
                    // Root-level nodes have no parent.
                    None
                }
            }
            Locator::NextSibling => self.sibling_path(source, 1),
            Locator::PreviousSibling => self.sibling_path(source, -1),
            Locator::ById(_) => unreachable!("absolute locator in relative resolution"),
        }
    }

    fn sibling_path(&self, source: &NodePath, offset: isize) -> Option<NodePath> {
        let (last, prefix) = source.split_last()?;
        let sibling = last.checked_add_signed(offset)?;
        let sibling_count = if prefix.is_empty() {
            self.roots.len()
        } else {
            self.node_at(prefix).children.len()
        };
        if sibling >= sibling_count {
            return None;
        }
        let mut path = prefix.to_vec();
        path.push(sibling);
        Some(path)
    }

    fn node_at(&self, path: &[usize]) -> &UiNode {
        let (first, rest) = path.split_first().expect("node path is never empty");
        rest.iter().fold(&self.roots[*first], |node, &i| &node.children[i])
    }
}

fn node_at_mut<'a>(roots: &'a mut [UiNode], path: &[usize]) -> &'a mut UiNode {
    let (first, rest) = path.split_first().expect("node path is never empty");
    rest.iter()
        .fold(&mut roots[*first], |node, &i| &mut node.children[i])
}

fn index_node(
    node: &UiNode,
    path: NodePath,
    index: &mut FxHashMap<String, NodePath>,
) -> Result<(), UiError> {
    if let Some(id) = &node.id {
        if index.insert(id.clone(), path.clone()).is_some() {
            return Err(UiError::DuplicateId(id.clone()));
        }
    }
    for (i, child) in node.children.iter().enumerate() {
        let mut child_path = path.clone();
        child_path.push(i);
        index_node(child, child_path, index)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{hlayout, label_with_id, textbox, vlayout};
    use crate::update::Updater;

    fn sample_page() -> Page {
        Page::new(vec![vlayout(vec![
            hlayout(vec![textbox("tb1"), textbox("tb2")]),
            label_with_id("lb1"),
        ])])
        .unwrap()
    }

    #[test]
    fn test_find_by_id() {
        let page = sample_page();
        assert!(page.find_by_id("tb2").is_some());
        assert!(page.find_by_id("nope").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Page::new(vec![textbox("x"), textbox("x")]).unwrap_err();
        assert_eq!(err, UiError::DuplicateId("x".into()));
    }

    #[test]
    fn test_resolve_by_id() {
        let page = sample_page();
        let node = page.resolve(&Locator::of_id("lb1"), None).unwrap();
        assert_eq!(node.id.as_deref(), Some("lb1"));
    }

    #[test]
    fn test_resolve_relative_needs_source() {
        let page = sample_page();
        let err = page.resolve(&Locator::Parent, None).unwrap_err();
        assert!(matches!(err, UiError::MissingSourceContext(_)));
    }

    #[test]
    fn test_resolve_siblings() {
        let page = sample_page();
        let next = page.resolve(&Locator::NextSibling, Some("tb1")).unwrap();
        assert_eq!(next.id.as_deref(), Some("tb2"));
        let prev = page.resolve(&Locator::PreviousSibling, Some("tb2")).unwrap();
        assert_eq!(prev.id.as_deref(), Some("tb1"));
        // tb2 is the last child, so it has no next sibling.
        assert!(page.resolve(&Locator::NextSibling, Some("tb2")).is_err());
    }

    #[test]
    fn test_resolve_parent_of_root_fails() {
        let page = Page::new(vec![textbox("only")]).unwrap();
        assert!(page.resolve(&Locator::Parent, Some("only")).is_err());
    }

    #[test]
    fn test_apply_sets_label_value() {
        let mut page = sample_page();
        let msg = Updater::new().value("alice").into_message(Locator::of_id("lb1"));
        page.apply(&msg, None);
        assert_eq!(page.find_by_id("lb1").unwrap().text(), Some("alice"));
    }

    #[test]
    fn test_apply_missing_target_is_noop() {
        let mut page = sample_page();
        let before = page.roots().to_vec();
        let msg = Updater::new().value("x").into_message(Locator::of_id("tzX"));
        page.apply(&msg, None);
        assert_eq!(page.roots(), &before[..]);
    }

    #[test]
    fn test_iter_walks_depth_first() {
        let page = sample_page();
        let ids: Vec<_> = page.iter().filter_map(|n| n.id.as_deref()).collect();
        assert_eq!(ids, vec!["tb1", "tb2", "lb1"]);
    }
}
