//! Unbalanced binary search tree without duplicates.
//!
//! The empty tree, at the root or at any child position, is `None`. Every
//! recursive step checks for it before looking at a node.

use crate::tree::TreeOps;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// Set of ordered values. `insert` consumes the tree and returns it with its
/// new root, so rebind the result: `tree = tree.insert(value)`.
pub struct OrderedTree<T: Ord> {
    root: Link<T>,
    len: usize,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// Borrowing iterator over the values in ascending order.
pub struct Iter<'a, T: Ord> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

/// Consuming iterator over the values in ascending order.
pub struct IntoIter<T: Ord> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T: Ord> OrderedTree<T> {
    pub fn new() -> Self {
        OrderedTree { root: None, len: 0 }
    }

    /// Inserts `value` and returns the tree with its new root.
    ///
    /// An empty tree becomes a single node, so the result has to be rebound:
    /// `tree = tree.insert(value)`. Inserting a value that is already present
    /// returns the tree unchanged.
    #[must_use = "insert returns the tree with its new root, rebind it"]
    pub fn insert(mut self, value: T) -> Self {
        let (root, inserted) = insert_at(self.root.take(), value);
        self.root = root;
        if inserted {
            self.len += 1;
        }
        self
    }

    pub fn contains(&self, value: &T) -> bool {
        contains_at(&self.root, value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest path from the root down to a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }

    pub fn first(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        Some(&cur.value)
    }

    pub fn last(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Some(&cur.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(&self.root);
        iter
    }
}

fn insert_at<T: Ord>(link: Link<T>, value: T) -> (Link<T>, bool) {
    let Some(mut node) = link else {
        return (Some(Node::leaf(value)), true);
    };

    let inserted = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, inserted) = insert_at(node.left.take(), value);
            node.left = left;
            inserted
        }
        Ordering::Greater => {
            let (right, inserted) = insert_at(node.right.take(), value);
            node.right = right;
            inserted
        }
        Ordering::Equal => false,
    };
    (Some(node), inserted)
}

fn contains_at<T: Ord>(link: &Link<T>, value: &T) -> bool {
    match link {
        None => false,
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => contains_at(&node.left, value),
            Ordering::Greater => contains_at(&node.right, value),
            Ordering::Equal => true,
        },
    }
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T: Ord> TreeOps<T> for OrderedTree<T> {
    fn insert(&mut self, value: T) -> bool {
        let before = self.len;
        *self = OrderedTree::insert(mem::take(self), value);
        self.len > before
    }

    fn contains(&self, value: &T) -> bool {
        contains_at(&self.root, value)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            TreeOps::insert(self, value);
        }
    }
}

impl<'a, T: Ord> Iter<'a, T> {
    fn push_left(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<'a, T: Ord> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> IntoIter<T> {
    fn push_left(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left(node.right.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(self.root.take());
        iter
    }
}

// Right subtrees still hanging off the stack would otherwise drop recursively.
impl<T: Ord> Drop for IntoIter<T> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}

impl<T: Ord> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: fmt::Debug + Ord> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
