use crate::{ParameterDescriptor, declared_parameter_text, decompose};
use argbind_scanner::split_top_level;
use indexmap::IndexSet;
use serde::Serialize;

/// Every parameter of one declaration, decomposed once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParameterList {
    parameters: Vec<ParameterDescriptor>,
    /// Leaf names of the explicit (non-variadic) parameters.
    #[serde(skip)]
    expected_names: IndexSet<String>,
}

impl ParameterList {
    /// Parse parameter-list text, the part between the parentheses.
    pub fn parse(declaration: &str) -> Self {
        split_top_level(declaration).into_iter().map(decompose).collect()
    }

    /// Parse the parameter list of callable source text.
    pub fn from_source(source: &str) -> Self {
        Self::parse(&declared_parameter_text(source))
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// `true` when nothing is declared at all, not even a variadic parameter.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameters that take a positional slot, in declaration order.
    pub fn explicit(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| !p.is_variadic())
    }

    pub fn variadic(&self) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|p| p.is_variadic())
    }

    /// Names a data source entry must have to be consumed by an explicit slot.
    pub fn expected_names(&self) -> &IndexSet<String> {
        &self.expected_names
    }

    pub fn expects(&self, name: &str) -> bool {
        self.expected_names.contains(name)
    }
}

impl FromIterator<ParameterDescriptor> for ParameterList {
    fn from_iter<I: IntoIterator<Item = ParameterDescriptor>>(iter: I) -> Self {
        let parameters: Vec<ParameterDescriptor> = iter.into_iter().collect();
        let mut expected_names = IndexSet::new();
        for parameter in parameters.iter().filter(|p| !p.is_variadic()) {
            parameter.collect_leaf_names(&mut expected_names);
        }
        ParameterList {
            parameters,
            expected_names,
        }
    }
}
