use crate::{Assignment, AssignmentIterator};
use std::fmt::{Display, Error, Formatter};
use std::mem::swap;
use std::ops::Index;

impl Assignment {
    /// Create a new assignment from a vector of values (one per variable column).
    pub fn new(values: Vec<bool>) -> Assignment {
        Assignment(values)
    }

    /// Create an assignment with all variables set to true.
    pub fn all_true(num_vars: usize) -> Assignment {
        Assignment(vec![true; num_vars])
    }

    /// Create an assignment with all variables set to false.
    pub fn all_false(num_vars: usize) -> Assignment {
        Assignment(vec![false; num_vars])
    }

    /// Create the assignment of the given table `row` (counting from zero, header excluded).
    ///
    /// The first variable is the most significant bit of the row index and `true` precedes
    /// `false`, i.e. a zero bit means `true`. The `row` must be smaller than `2^num_vars`.
    pub fn from_row_index(num_vars: usize, row: usize) -> Assignment {
        Assignment(
            (0..num_vars)
                .map(|i| {
                    let shift = num_vars - 1 - i;
                    shift >= usize::BITS as usize || (row >> shift) & 1 == 0
                })
                .collect(),
        )
    }

    /// Value of the variable at the given column index.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).cloned()
    }

    /// Number of variables in this assignment.
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Convert the assignment to its underlying vector.
    pub fn vector(self) -> Vec<bool> {
        self.0
    }

    pub fn values(&self) -> &[bool] {
        &self.0
    }

    /// **(internal)** "Decrement" this assignment if possible. Interpret the assignment as
    /// a bit-vector (first variable most significant, `true` is one) and perform a standard
    /// decrement. Starting from `all_true`, this visits all assignments in table order.
    pub(crate) fn next(&self) -> Option<Assignment> {
        let mut next_vec = self.0.clone();
        let mut borrow = true; // initially, we want to decrement
        for bit in next_vec.iter_mut().rev() {
            let new_value = *bit ^ borrow;
            let new_borrow = !*bit && borrow;
            *bit = new_value;
            borrow = new_borrow;
            if !new_borrow {
                break;
            } // if there is no borrow, we can just break
        }

        if borrow {
            None
        } else {
            Some(Assignment(next_vec))
        }
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.0.is_empty() {
            write!(f, "[]")?;
        } else {
            write!(f, "[{}", if self.0[0] { 1 } else { 0 })?;
            for i in 1..self.0.len() {
                write!(f, ",{}", if self.0[i] { 1 } else { 0 })?
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Allow indexing of `Assignment` using variable column indices.
impl Index<usize> for Assignment {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AssignmentIterator {
    /// Create a new iterator over all `2^num_vars` assignments.
    ///
    /// For zero variables, the iterator yields exactly one (empty) assignment.
    pub fn new(num_vars: usize) -> AssignmentIterator {
        AssignmentIterator {
            next_assignment: Some(Assignment::all_true(num_vars)),
        }
    }
}

impl Iterator for AssignmentIterator {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(assignment) = &self.next_assignment {
            // Compute the next assignment and then swap it with the current value.
            let mut result = assignment.next();
            swap(&mut result, &mut self.next_assignment);
            result
        } else {
            None
        }
    }
}
