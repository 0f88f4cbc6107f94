//! Operator overloading for specification combinators.
//!
//! `&`, `|` and `!` on the [`Spec`] wrapper:
//!
//! ```ignore
//! let rule = Spec(Cohort::Official) & !Spec(Cohort::Vocational);
//! ```

use crate::specification::{And, Not, Or, Specification};
use std::ops::{BitAnd, BitOr, Not as StdNot};

/// Wrapper struct to enable operator overloading on specifications.
#[derive(Debug, Clone)]
pub struct Spec<S>(pub S);

impl<A, B> BitAnd<Spec<B>> for Spec<A> {
    type Output = Spec<And<A, B>>;

    fn bitand(self, rhs: Spec<B>) -> Self::Output {
        Spec(And(self.0, rhs.0))
    }
}

impl<A, B> BitOr<Spec<B>> for Spec<A> {
    type Output = Spec<Or<A, B>>;

    fn bitor(self, rhs: Spec<B>) -> Self::Output {
        Spec(Or(self.0, rhs.0))
    }
}

impl<A> StdNot for Spec<A> {
    type Output = Spec<Not<A>>;

    fn not(self) -> Self::Output {
        Spec(Not(self.0))
    }
}

impl<Ctx, S> Specification<Ctx> for Spec<S>
where
    S: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx)
    }
}
