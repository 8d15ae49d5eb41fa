//! `assert_close!` for floats and for the nested containers that solves
//! produce (solution vectors, snapshot matrices, optional solutions).
//!
//! ```ignore
//! assert_close!(x, 2.0);                        // default tolerances
//! assert_close!(abs=1e-6, solution, expected);
//! assert_close!(rel=1e-9, abs=1e-12, a, b, "while checking {}", name);
//! ```

#[macro_use]
extern crate failure;

use std::fmt;

/// Default relative tolerance.  (the default absolute tolerance is zero)
pub const DEFAULT_REL_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!([$rel, $abs] $($rest)+)
    };
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!([$rel, $abs] $($rest)+)
    };
    (abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!([$crate::DEFAULT_REL_TOL, $abs] $($rest)+)
    };
    (rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!([$rel, 0.0] $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::__assert_close_impl!([$crate::DEFAULT_REL_TOL, 0.0] $($rest)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_impl {
    ([$rel:expr, $abs:expr] $a:expr, $b:expr $(,)*) => {
        $crate::__assert_close_impl!([$rel, $abs] $a, $b, "not nearly equal!")
    };
    ([$rel:expr, $abs:expr] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let tol = $crate::Tolerances { rel: $rel, abs: $abs };
        let (a, b) = (&$a, &$b);
        if let Err(e) = $crate::CheckClose::check_close(a, b, tol) {
            panic!(
                "{}\n left: {:?}\nright: {:?}\n{}",
                format!($($fmt)+), a, b, e,
            );
        }
    }};
}

/// Like `assert_close!`, but only in debug builds.
#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub rel: f64,
    pub abs: f64,
}

impl Tolerances {
    /// Python's `math.isclose`, which is symmetric in `a` and `b`.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        assert!(self.rel >= 0.0);
        assert!(self.abs >= 0.0);

        // also catches infinities of the same sign
        if a == b { return true; }
        if a.is_infinite() || b.is_infinite() { return false; }

        // NaN falls through to false here
        (a - b).abs() <= self.abs.max(self.rel * a.abs()).max(self.rel * b.abs())
    }
}

/// Where and how two values differ.
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    Values { left: f64, right: f64 },
    Lengths { left: usize, right: usize },
    Presence { left: bool, right: bool },
}

#[derive(Debug, Fail, Clone, PartialEq)]
pub struct CheckCloseError {
    /// Index path from the outermost container down to the mismatch.
    pub path: Vec<usize>,
    pub mismatch: Mismatch,
    pub tol: Tolerances,
}

impl CheckCloseError {
    fn at(mut self, index: usize) -> Self {
        self.path.insert(0, index);
        self
    }
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "first mismatch at {:?}: ", self.path)?;
        match self.mismatch {
            Mismatch::Values { left, right } => {
                write!(f, "{:?} vs {:?} (diff {:e}, tol: {:?})", left, right, (left - right).abs(), self.tol)
            },
            Mismatch::Lengths { left, right } => write!(f, "length {} vs {}", left, right),
            Mismatch::Presence { left, right } => {
                let word = |b| if b { "Some" } else { "None" };
                write!(f, "{} vs {}", word(left), word(right))
            },
        }
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        match tol.is_close(*self, *other) {
            true => Ok(()),
            false => Err(CheckCloseError {
                path: vec![],
                mismatch: Mismatch::Values { left: *self, right: *other },
                tol,
            }),
        }
    }
}

impl<'a, 'b, A, B> CheckClose<&'b B> for &'a A
where A: ?Sized + CheckClose<B>, B: ?Sized,
{
    fn check_close(&self, other: &&'b B, tol: Tolerances) -> Result<(), CheckCloseError>
    { (**self).check_close(*other, tol) }
}

impl<A: CheckClose<B>, B> CheckClose<[B]> for [A] {
    fn check_close(&self, other: &[B], tol: Tolerances) -> Result<(), CheckCloseError> {
        if self.len() != other.len() {
            return Err(CheckCloseError {
                path: vec![],
                mismatch: Mismatch::Lengths { left: self.len(), right: other.len() },
                tol,
            });
        }
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.at(i))?;
        }
        Ok(())
    }
}

impl<A: CheckClose<B>, B> CheckClose<Vec<B>> for Vec<A> {
    fn check_close(&self, other: &Vec<B>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<A: CheckClose<B>, B> CheckClose<[B]> for Vec<A> {
    fn check_close(&self, other: &[B], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(other, tol) }
}

impl<A: CheckClose<B>, B> CheckClose<Vec<B>> for [A] {
    fn check_close(&self, other: &Vec<B>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.check_close(&other[..], tol) }
}

impl<A: CheckClose<B>, B> CheckClose<Option<B>> for Option<A> {
    fn check_close(&self, other: &Option<B>, tol: Tolerances) -> Result<(), CheckCloseError> {
        match (self, other) {
            (Some(a), Some(b)) => a.check_close(b, tol),
            (None, None) => Ok(()),
            (a, b) => Err(CheckCloseError {
                path: vec![],
                mismatch: Mismatch::Presence { left: a.is_some(), right: b.is_some() },
                tol,
            }),
        }
    }
}
