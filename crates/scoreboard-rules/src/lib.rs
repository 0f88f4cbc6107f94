//! Composable team and submission filters.
//!
//! Cohort membership ("girl", "official", ...) and the submission-listing
//! predicates are expressed as small specifications that can be combined
//! with `&`, `|` and `!`, or built at runtime from a JSON rule tree.
//!
//! # Example
//!
//! ```ignore
//! use scoreboard_rules::prelude::*;
//!
//! let official_girls = Spec(Cohort::Official) & Spec(Cohort::Girl);
//! if official_girls.is_satisfied_by(&team) {
//!     // ...
//! }
//! ```

pub mod config;
pub mod context;
pub mod operators;
pub mod registry;
pub mod rules;
pub mod specification;

pub use config::RuleConfig;
pub use registry::{belongs_to_group, group_registry, group_spec, RuleError};

/// Prelude module - import everything you need with `use scoreboard_rules::prelude::*`
pub mod prelude {
    pub use crate::config::RuleConfig;
    pub use crate::context::RunContext;
    pub use crate::operators::Spec;
    pub use crate::registry::{
        belongs_to_group, group_registry, group_spec, RuleError, SpecRegistry,
    };
    pub use crate::rules::*;
    pub use crate::specification::{
        AllOf, AlwaysFalse, AlwaysTrue, And, AnyOf, BoxedSpec, Not, Or, Specification,
    };
}
