//! Core Specification trait and combinators.

use std::sync::Arc;

/// A predicate over some context, composable with other predicates.
pub trait Specification<Ctx>: Send + Sync {
    /// Check if the specification is satisfied by the given context.
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool;

    /// Combine this specification with another using AND logic.
    fn and<S: Specification<Ctx>>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Combine this specification with another using OR logic.
    fn or<S: Specification<Ctx>>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    /// Negate this specification.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

/// AND combinator for specifications.
#[derive(Debug, Clone)]
pub struct And<A, B>(pub A, pub B);

impl<Ctx, A, B> Specification<Ctx> for And<A, B>
where
    A: Specification<Ctx>,
    B: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx) && self.1.is_satisfied_by(ctx)
    }
}

/// OR combinator for specifications.
#[derive(Debug, Clone)]
pub struct Or<A, B>(pub A, pub B);

impl<Ctx, A, B> Specification<Ctx> for Or<A, B>
where
    A: Specification<Ctx>,
    B: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx) || self.1.is_satisfied_by(ctx)
    }
}

/// NOT combinator for specifications.
#[derive(Debug, Clone)]
pub struct Not<A>(pub A);

impl<Ctx, A> Specification<Ctx> for Not<A>
where
    A: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        !self.0.is_satisfied_by(ctx)
    }
}

/// A specification that always returns true.
#[derive(Debug, Clone, Copy)]
pub struct AlwaysTrue;

impl<Ctx> Specification<Ctx> for AlwaysTrue {
    fn is_satisfied_by(&self, _ctx: &Ctx) -> bool {
        true
    }
}

/// A specification that always returns false.
#[derive(Debug, Clone, Copy)]
pub struct AlwaysFalse;

impl<Ctx> Specification<Ctx> for AlwaysFalse {
    fn is_satisfied_by(&self, _ctx: &Ctx) -> bool {
        false
    }
}

/// A boxed specification for dynamic dispatch.
pub type BoxedSpec<Ctx> = Arc<dyn Specification<Ctx>>;

impl<Ctx> Specification<Ctx> for BoxedSpec<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.as_ref().is_satisfied_by(ctx)
    }
}

/// All specifications in the collection must be satisfied.
pub struct AllOf<Ctx> {
    specs: Vec<BoxedSpec<Ctx>>,
}

impl<Ctx> AllOf<Ctx> {
    pub fn new(specs: Vec<BoxedSpec<Ctx>>) -> Self {
        Self { specs }
    }
}

impl<Ctx> Specification<Ctx> for AllOf<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied_by(ctx))
    }
}

/// At least one specification in the collection must be satisfied.
pub struct AnyOf<Ctx> {
    specs: Vec<BoxedSpec<Ctx>>,
}

impl<Ctx> AnyOf<Ctx> {
    pub fn new(specs: Vec<BoxedSpec<Ctx>>) -> Self {
        Self { specs }
    }
}

impl<Ctx> Specification<Ctx> for AnyOf<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied_by(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IsEven;

    impl Specification<i32> for IsEven {
        fn is_satisfied_by(&self, ctx: &i32) -> bool {
            ctx % 2 == 0
        }
    }

    struct IsPositive;

    impl Specification<i32> for IsPositive {
        fn is_satisfied_by(&self, ctx: &i32) -> bool {
            *ctx > 0
        }
    }

    #[test]
    fn test_method_combinators() {
        let rule = IsEven.and(IsPositive);
        assert!(rule.is_satisfied_by(&4));
        assert!(!rule.is_satisfied_by(&-4));
        assert!(!rule.is_satisfied_by(&3));

        let rule = IsEven.or(IsPositive);
        assert!(rule.is_satisfied_by(&-4));
        assert!(rule.is_satisfied_by(&3));
        assert!(!rule.is_satisfied_by(&-3));

        let rule = IsEven.not();
        assert!(rule.is_satisfied_by(&3));
    }

    #[test]
    fn test_all_of_any_of() {
        let specs: Vec<BoxedSpec<i32>> = vec![Arc::new(IsEven), Arc::new(IsPositive)];
        assert!(AllOf::new(specs.clone()).is_satisfied_by(&2));
        assert!(!AllOf::new(specs.clone()).is_satisfied_by(&1));
        assert!(AnyOf::new(specs.clone()).is_satisfied_by(&1));
        assert!(!AnyOf::new(specs).is_satisfied_by(&-1));

        // empty collections behave like the identity of their operator
        assert!(AllOf::<i32>::new(Vec::new()).is_satisfied_by(&0));
        assert!(!AnyOf::<i32>::new(Vec::new()).is_satisfied_by(&0));
    }
}
