use crate::Cost;

use std::sync::Arc;

/// A finished Path and its total Cost.
///
/// The steps are stored in the order the search engine produced them: target first,
/// start-adjacent Tile last, with the start Tile itself excluded (a start == target
/// search yields an empty Path). [`reversed`](Path::reversed) provides a
/// walking-order view without copying the steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    steps: Arc<[P]>,
    cost: Cost,
    is_reversed: bool,
}

impl<P> Path<P> {
    /// Creates a Path from the recorded steps and their total Cost.
    pub fn new(steps: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            steps: steps.into(),
            cost,
            is_reversed: false,
        }
    }

    /// The total Cost of walking this Path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of steps (the start Tile is not a step).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` for the trivial Path of a start == target search.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// A view of the same Path with the step order flipped.
    pub fn reversed(&self) -> Path<P> {
        Path {
            steps: self.steps.clone(),
            cost: self.cost,
            is_reversed: !self.is_reversed,
        }
    }

    /// Returns an Iterator over the steps.
    pub fn iter(&self) -> Iter<P> {
        Iter {
            iter: self.steps.iter(),
            reversed: self.is_reversed,
        }
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        let index = if self.is_reversed {
            self.steps.len() - index - 1
        } else {
            index
        };
        &self.steps[index]
    }
}

/// Iterator over the steps of a [`Path`].
#[derive(Debug)]
pub struct Iter<'a, P> {
    iter: std::slice::Iter<'a, P>,
    reversed: bool,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;
    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next_back()
        } else {
            self.iter.next()
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<P> DoubleEndedIterator for Iter<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next()
        } else {
            self.iter.next_back()
        }
    }
}
impl<P> ExactSizeIterator for Iter<'_, P> {}
impl<P> std::iter::FusedIterator for Iter<'_, P> {}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        // we can't just use slice's eq because self might be reversed
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        let mut iter = self.iter();
        match iter.next() {
            None => write!(fmt, "<empty>"),
            Some(first) => {
                write!(fmt, "{}", first)?;
                for p in iter {
                    write!(fmt, " -> {}", p)?;
                }
                Ok(())
            }
        }
    }
}
