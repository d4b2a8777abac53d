//! Parameter-list decomposition for argbind.
//!
//! This crate turns the parameter list of a JavaScript callable into a tree
//! of [`ParameterDescriptor`]s:
//! - `introspect` - locate the parameter list in callable source text
//! - `decompose` - classify one parameter declaration, recursing into patterns
//! - `unpack` - strip the outer delimiters of a destructuring pattern
//! - `ParameterList` - all descriptors of one declaration, parsed once

pub mod decompose;
pub use decompose::decompose;

mod descriptor;
pub use descriptor::{ObjectPatternMember, ParameterDescriptor, ParameterKind, PatternDelimiter};

pub mod introspect;
pub use introspect::{declared_parameter_text, leaf_names};

mod parameter_list;
pub use parameter_list::ParameterList;

pub mod unpack;
pub use unpack::{PatternError, try_unpack, unpack};
