use serde::{Deserialize, Serialize};

/// Identifier of a taxonomy node.
pub type CategoryId = u64;

/// A node in the category taxonomy.
///
/// Categories form a forest of trees at most three levels deep
/// (root, section, leaf). Nodes reference their parent and children by
/// identifier only, never by owning pointer, so the structure cannot form
/// a reference cycle and needs no smart-pointer plumbing.
///
/// # Examples
///
/// ```
/// use geodir_types::category::Category;
///
/// let food = Category::new(1, "Food", None);
/// let dairy = Category::new(3, "Dairy", Some(food.id));
/// assert!(food.is_root());
/// assert!(dairy.is_leaf());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Identifier of the parent node, absent for roots.
    pub parent_id: Option<CategoryId>,
    /// Identifiers of the direct children, in insertion order.
    pub children: Vec<CategoryId>,
}

impl Category {
    /// Create a new taxonomy node with no children.
    ///
    /// # Arguments
    ///
    /// * `id` - Node identifier
    /// * `name` - Display name
    /// * `parent_id` - Parent node identifier, `None` for a root
    pub fn new(id: CategoryId, name: impl Into<String>, parent_id: Option<CategoryId>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
            children: Vec::new(),
        }
    }

    /// Whether this node is a tree root (has no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether this node is a leaf (has no children).
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let node = Category::new(7, "Trucks", Some(2));
        assert_eq!(node.id, 7);
        assert_eq!(node.name, "Trucks");
        assert_eq!(node.parent_id, Some(2));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_root_and_leaf_flags() {
        let mut root = Category::new(1, "Cars", None);
        assert!(root.is_root());
        assert!(root.is_leaf());

        root.children.push(2);
        assert!(root.is_root());
        assert!(!root.is_leaf());

        let child = Category::new(2, "Spare parts", Some(1));
        assert!(!child.is_root());
        assert!(child.is_leaf());
    }
}
