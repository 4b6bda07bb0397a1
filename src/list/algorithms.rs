use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Deep copy: walks the source front to back and clones every element
    /// into a fresh chain. The clone shares no node with the source.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    /// Walks the chain from the front; *O*(*n*). For checked access use
    /// [`List::get`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        self.get(index).expect("index out of bounds")
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("index out of bounds")
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchored_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    #[test]
    fn list_compare() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2, 4]);
        let d = List::from_iter([1, 2]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(a < c);
        assert!(d < a);
    }

    #[test]
    fn list_clone_is_independent() {
        let mut original = List::from_iter([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(original, copy);
        assert_eq!(copy.len(), 3);

        copy.push_back(4);
        *copy.front_mut().unwrap() = 10;
        assert!(original.iter().copied().eq(vec![1, 2, 3]));

        original.pop_front();
        assert!(copy.iter().copied().eq(vec![10, 2, 3, 4]));
    }

    #[test]
    fn list_clone_from_replaces_contents() {
        let mut list = List::from_iter(0..5);
        let other = List::from_iter(7..9);
        list.clone_from(&other);
        assert_eq!(list, other);
    }

    #[test]
    fn list_hash_matches_equality() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_index() {
        let mut list = List::from_iter([5, 6, 7]);
        assert_eq!(list[0], 5);
        assert_eq!(list[2], 7);
        list[1] = 60;
        assert_eq!(list[1], 60);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn list_index_out_of_bounds() {
        let list = List::from_iter([5, 6, 7]);
        let _ = list[3];
    }

    #[test]
    fn list_contains() {
        let list = List::from_iter(0..5);
        assert!(list.contains(&4));
        assert!(!list.contains(&5));
    }
}
