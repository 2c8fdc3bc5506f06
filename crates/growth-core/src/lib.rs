//! Weight-for-age Z-score resolution.
//!
//! - [`arguments`]: raw argument validation and parsing
//! - [`resolver`]: band lookup and interpolation against a reference table
//! - [`function`]: the `d2:zScore` rule function
//! - [`registry`]: rule functions by name

pub mod arguments;
pub mod function;
pub mod logging;
pub mod registry;
pub mod resolver;

pub use arguments::ZScoreArguments;
pub use function::{
    D2_ZSCORE, RuleFunction, RuleVariableValue, SupplementaryData, ValueMap, ZScoreFunction,
};
pub use registry::{FunctionRegistry, default_registry};
pub use resolver::{Bracket, BracketStrategy, ZScore, ZScoreResolver, resolve_row};
