use crate::ResolvedValue;
use argbind_parser::ParameterList;
use std::borrow::Cow;
use std::fmt;

/// Anything whose parameter list can be read from JavaScript source text.
pub trait CallableSource {
    /// The callable's source text, as `fn.toString()` would produce it.
    fn source_text(&self) -> &str;

    fn parameters(&self) -> Cow<'_, ParameterList> {
        Cow::Owned(ParameterList::from_source(self.source_text()))
    }
}

/// A callable that can be invoked with positional arguments.
pub trait Callable: CallableSource {
    type Output;

    fn invoke(&self, arguments: Vec<ResolvedValue>) -> Self::Output;
}

impl CallableSource for str {
    fn source_text(&self) -> &str {
        self
    }
}

impl CallableSource for String {
    fn source_text(&self) -> &str {
        self
    }
}

impl<T: CallableSource + ?Sized> CallableSource for &T {
    fn source_text(&self) -> &str {
        (**self).source_text()
    }

    fn parameters(&self) -> Cow<'_, ParameterList> {
        (**self).parameters()
    }
}

impl<T: Callable + ?Sized> Callable for &T {
    type Output = T::Output;

    fn invoke(&self, arguments: Vec<ResolvedValue>) -> Self::Output {
        (**self).invoke(arguments)
    }
}

/// A Rust closure paired with the JavaScript declaration it implements.
///
/// The declaration is parsed once, when the function is created.
pub struct Function<F> {
    source: String,
    parameters: ParameterList,
    body: F,
}

impl<F> Function<F> {
    pub fn new(source: impl Into<String>, body: F) -> Self {
        let source = source.into();
        let parameters = ParameterList::from_source(&source);
        Function {
            source,
            parameters,
            body,
        }
    }
}

impl<F> CallableSource for Function<F> {
    fn source_text(&self) -> &str {
        &self.source
    }

    fn parameters(&self) -> Cow<'_, ParameterList> {
        Cow::Borrowed(&self.parameters)
    }
}

impl<F, R> Callable for Function<F>
where
    F: Fn(Vec<ResolvedValue>) -> R,
{
    type Output = R;

    fn invoke(&self, arguments: Vec<ResolvedValue>) -> R {
        (self.body)(arguments)
    }
}

impl<F> fmt::Debug for Function<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("source", &self.source)
            .field("parameters", &self.parameters.len())
            .finish_non_exhaustive()
    }
}
