//! Resolve a keyed bag of values into the positional arguments of a
//! JavaScript-style parameter list.
//!
//! ```
//! use argbind::{ResolvedValue, prepare};
//! use serde_json::json;
//!
//! let args = prepare(
//!     "function (a = 'dA', b, ...rest) {}",
//!     json!({ "b": "aB", "x": 1, "y": 2 }),
//! );
//! assert_eq!(
//!     args,
//!     vec![
//!         ResolvedValue::Unresolved,
//!         ResolvedValue::from(json!("aB")),
//!         ResolvedValue::from(json!(1)),
//!         ResolvedValue::from(json!(2)),
//!     ]
//! );
//! ```
//!
//! - `DataSource` - the keyed input, decoded from JSON text when needed
//! - `resolve` - one parameter descriptor against the data
//! - `build` - a whole declaration: explicit slots, then unconsumed entries
//! - `prepare` / `call` - entry points taking a callable or its source text
//! - `SignatureCache` - parse each distinct callable source once

pub mod build;
pub use build::{build, build_with};

mod cache;
pub use cache::SignatureCache;

mod callable;
pub use callable::{Callable, CallableSource, Function};

mod data;
pub use data::{DataSource, DecodeError};

pub mod resolve;
pub use resolve::resolve;

mod value;
pub use value::ResolvedValue;

pub use argbind_parser::{ParameterDescriptor, ParameterKind, ParameterList};

/// Positional arguments for `callable`, resolved from `data`.
///
/// `callable` may be a live [`Function`] or the callable's source text; both
/// give the same result for the same parameter list. Undecodable data, empty
/// data and callables without parameters all yield no arguments.
pub fn prepare<C>(callable: &C, data: impl Into<DataSource>) -> Vec<ResolvedValue>
where
    C: CallableSource + ?Sized,
{
    let data = data.into();
    if data.is_empty() {
        return Vec::new();
    }
    build_with(&callable.parameters(), &data)
}

/// Invoke `callable` with the arguments [`prepare`] resolves from `data`.
///
/// The callable's output, including any error it returns, is passed through
/// unchanged.
pub fn call<C>(callable: &C, data: impl Into<DataSource>) -> C::Output
where
    C: Callable + ?Sized,
{
    callable.invoke(prepare(callable, data))
}
