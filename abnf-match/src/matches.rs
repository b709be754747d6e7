//! The result set returned by every matcher.

use std::fmt;

/// The complete set of valid match lengths for a matcher.
///
/// Offsets are kept sorted and deduplicated. An empty set means the
/// matcher did not match; a set containing `0` means the empty match is
/// one of the valid outcomes, which is distinct from "no match".
///
/// # Examples
///
/// ```
/// use abnf_match::Matches;
///
/// let mut m = Matches::single(2);
/// m.insert(1);
/// m.insert(2);
/// assert_eq!(m, [1, 2]);
/// assert_eq!(m.longest(), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Matches(Vec<usize>);

impl Matches {
    /// Creates an empty set (no match).
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a set holding exactly one offset.
    #[must_use]
    pub fn single(offset: usize) -> Self {
        Self(vec![offset])
    }

    /// Adds an offset, keeping the set ordered.
    pub fn insert(&mut self, offset: usize) {
        if let Err(idx) = self.0.binary_search(&offset) {
            self.0.insert(idx, offset);
        }
    }

    /// Merges every offset of `other` into this set.
    pub fn union_with(&mut self, other: &Self) {
        if other.0.is_empty() {
            return;
        }
        if self.0.is_empty() {
            self.0.clone_from(&other.0);
            return;
        }

        let (lhs, rhs) = (&self.0, &other.0);
        let mut merged = Vec::with_capacity(lhs.len() + rhs.len());
        let (mut i, mut j) = (0, 0);
        while i < lhs.len() && j < rhs.len() {
            match lhs[i].cmp(&rhs[j]) {
                std::cmp::Ordering::Less => {
                    merged.push(lhs[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    merged.push(rhs[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    merged.push(lhs[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&lhs[i..]);
        merged.extend_from_slice(&rhs[j..]);
        self.0 = merged;
    }

    /// Returns true if `offset` is a valid match length.
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        self.0.binary_search(&offset).is_ok()
    }

    /// Returns the longest match (maximal munch), if any.
    #[must_use]
    pub fn longest(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Returns the shortest match, if any.
    #[must_use]
    pub fn shortest(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Returns true if the matcher did not match.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of distinct match lengths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the offsets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Returns the offsets as an ascending slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Returns a copy of this set with every offset moved by `-base`.
    ///
    /// Offsets below `base` are dropped.
    #[must_use]
    pub fn relative_to(&self, base: usize) -> Self {
        Self(self.0.iter().filter_map(|o| o.checked_sub(base)).collect())
    }
}

impl FromIterator<usize> for Matches {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut offsets: Vec<usize> = iter.into_iter().collect();
        offsets.sort_unstable();
        offsets.dedup();
        Self(offsets)
    }
}

impl Extend<usize> for Matches {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.0.extend(iter);
        self.0.sort_unstable();
        self.0.dedup();
    }
}

impl IntoIterator for Matches {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl<const N: usize> PartialEq<[usize; N]> for Matches {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl PartialEq<[usize]> for Matches {
    fn eq(&self, other: &[usize]) -> bool {
        self.0.as_slice() == other
    }
}

impl fmt::Display for Matches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, offset) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{offset}")?;
        }
        f.write_str("}")
    }
}
