use std::collections::BTreeSet;

pub trait TreeOps<T> {
    fn insert(&mut self, value: T) -> bool;
    fn contains(&self, value: &T) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> TreeOps<T> for BTreeSet<T> {
    fn insert(&mut self, value: T) -> bool {
        BTreeSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::TreeOps;
    use crate::OrderedTree;
    use std::collections::BTreeSet;

    fn fill<T: TreeOps<i32>>(tree: &mut T, values: &[i32]) -> usize {
        values.iter().filter(|&&value| tree.insert(value)).count()
    }

    #[test]
    fn implementations_agree() {
        let values = [5, 3, 10, 2, 3, 5, 7];
        let mut ordered = OrderedTree::new();
        let mut btree = BTreeSet::new();

        assert_eq!(fill(&mut ordered, &values), 5);
        assert_eq!(fill(&mut btree, &values), 5);
        assert_eq!(TreeOps::len(&ordered), TreeOps::len(&btree));
        for i in 0..12 {
            assert_eq!(
                TreeOps::contains(&ordered, &i),
                TreeOps::contains(&btree, &i)
            );
        }
    }

    #[test]
    fn empty_by_default() {
        assert!(TreeOps::<i32>::is_empty(&OrderedTree::new()));
        assert!(TreeOps::<i32>::is_empty(&BTreeSet::new()));
    }
}
