//! Widget tree walking

use crate::error::{EogtricksError, Result};
use std::collections::VecDeque;

/// Host-assigned widget identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A node in the host's widget tree
pub trait Widget {
    fn id(&self) -> WidgetId;

    fn children(&self) -> Vec<&dyn Widget>;

    /// Orientation if this widget is a scrollbar
    fn scrollbar_orientation(&self) -> Option<Orientation> {
        None
    }
}

/// Visit `root` and all its descendants, breadth first.
pub fn walk<'a>(root: &'a dyn Widget) -> impl Iterator<Item = &'a dyn Widget> + 'a {
    let mut queue = VecDeque::from([root]);
    std::iter::from_fn(move || {
        let widget = queue.pop_front()?;
        queue.extend(widget.children());
        Some(widget)
    })
}

/// The view's horizontal and vertical scrollbars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scrollbars {
    pub horizontal: WidgetId,
    pub vertical: WidgetId,
}

/// Find both scrollbars below `root`. The last one found of each
/// orientation wins.
pub fn find_scrollbars(root: &dyn Widget) -> Result<Scrollbars> {
    let mut horizontal = None;
    let mut vertical = None;

    for widget in walk(root) {
        match widget.scrollbar_orientation() {
            Some(Orientation::Horizontal) => horizontal = Some(widget.id()),
            Some(Orientation::Vertical) => vertical = Some(widget.id()),
            None => {}
        }
    }

    match (horizontal, vertical) {
        (Some(horizontal), Some(vertical)) => Ok(Scrollbars {
            horizontal,
            vertical,
        }),
        (None, _) => Err(EogtricksError::MissingWidget(
            "horizontal scrollbar".to_string(),
        )),
        (_, None) => Err(EogtricksError::MissingWidget(
            "vertical scrollbar".to_string(),
        )),
    }
}

/// Plain widget tree node, used by in-memory hosts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetNode {
    pub id: WidgetId,
    pub scrollbar: Option<Orientation>,
    pub children: Vec<WidgetNode>,
}

impl WidgetNode {
    pub fn container(id: u64, children: Vec<WidgetNode>) -> Self {
        WidgetNode {
            id: WidgetId(id),
            scrollbar: None,
            children,
        }
    }

    pub fn scrollbar(id: u64, orientation: Orientation) -> Self {
        WidgetNode {
            id: WidgetId(id),
            scrollbar: Some(orientation),
            children: Vec::new(),
        }
    }
}

impl Widget for WidgetNode {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn children(&self) -> Vec<&dyn Widget> {
        self.children.iter().map(|c| c as &dyn Widget).collect()
    }

    fn scrollbar_orientation(&self) -> Option<Orientation> {
        self.scrollbar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> WidgetNode {
        WidgetNode::container(
            1,
            vec![
                WidgetNode::container(2, vec![WidgetNode::container(4, vec![])]),
                WidgetNode::container(
                    3,
                    vec![
                        WidgetNode::scrollbar(5, Orientation::Horizontal),
                        WidgetNode::scrollbar(6, Orientation::Vertical),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn walk_is_breadth_first() {
        let root = tree();
        let ids: Vec<u64> = walk(&root).map(|w| w.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn walk_single_node() {
        let root = WidgetNode::container(9, vec![]);
        assert_eq!(walk(&root).count(), 1);
    }

    #[test]
    fn finds_both_scrollbars() {
        let root = tree();
        let bars = find_scrollbars(&root).unwrap();
        assert_eq!(bars.horizontal, WidgetId(5));
        assert_eq!(bars.vertical, WidgetId(6));
    }

    #[test]
    fn missing_scrollbar_is_an_error() {
        let root = WidgetNode::container(
            1,
            vec![WidgetNode::scrollbar(2, Orientation::Vertical)],
        );
        match find_scrollbars(&root) {
            Err(EogtricksError::MissingWidget(what)) => assert!(what.contains("horizontal")),
            other => panic!("Expected MissingWidget, got {:?}", other),
        }
    }
}
