//! Positional likeness between two strings
//!
//! Likeness is what a terminal reports after a wrong password: the number of
//! positions where the guess and the password hold the same character.

/// Count positions where `a` and `b` hold the same character
///
/// Comparison is exact (case-sensitive) and stops at the shorter of the two
/// strings; differing lengths never fail, they just bound the count.
///
/// # Examples
/// ```
/// use hacking_solver::core::likeness;
///
/// assert_eq!(likeness("ABC", "ABD"), 2);
/// assert_eq!(likeness("ABC", "XYZ"), 0);
/// assert_eq!(likeness("AB", "ABCDE"), 2);
/// ```
#[must_use]
pub fn likeness(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x == y).count()
}
