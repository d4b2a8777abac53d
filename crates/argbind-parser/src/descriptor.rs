//! Parameter descriptor tree.

use argbind_scanner::char_codes::is_identifier_text;
use indexmap::IndexSet;
use serde::Serialize;

/// One parameter declaration (or one member of a pattern), decomposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    /// Declaration text without its default value: `a`, `[a, b]`, `{c: d}`, `...rest`.
    pub text: String,
    #[serde(flatten)]
    pub kind: ParameterKind,
    /// Default-value expression text, never evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value_text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParameterKind {
    /// A bare identifier.
    Simple { name: String },
    /// `[...]`; element position is significant.
    ArrayPattern { elements: Vec<ParameterDescriptor> },
    /// `{...}`
    ObjectPattern { members: Vec<ObjectPatternMember> },
    /// `...name`. When `name` is pattern text rather than an identifier,
    /// `target` holds its decomposition.
    Variadic {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Box<ParameterDescriptor>>,
    },
    /// An empty array slot, as in `[, b]`.
    Elision,
}

/// `key: value` inside an object pattern. Shorthand `{a}` has key `a`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ObjectPatternMember {
    pub key: String,
    pub value: ParameterDescriptor,
}

/// Outer delimiter of a destructuring pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternDelimiter {
    Bracket,
    Brace,
}

impl PatternDelimiter {
    pub fn of(pattern: &str) -> Option<Self> {
        match pattern.trim_start().as_bytes().first() {
            Some(b'[') => Some(PatternDelimiter::Bracket),
            Some(b'{') => Some(PatternDelimiter::Brace),
            _ => None,
        }
    }

    pub const fn open(self) -> char {
        match self {
            PatternDelimiter::Bracket => '[',
            PatternDelimiter::Brace => '{',
        }
    }

    pub const fn close(self) -> char {
        match self {
            PatternDelimiter::Bracket => ']',
            PatternDelimiter::Brace => '}',
        }
    }
}

impl ParameterDescriptor {
    pub fn new(
        text: impl Into<String>,
        kind: ParameterKind,
        default_value_text: Option<String>,
    ) -> Self {
        ParameterDescriptor {
            text: text.into(),
            kind,
            default_value_text,
        }
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self.kind, ParameterKind::Variadic { .. })
    }

    pub fn is_pattern(&self) -> bool {
        matches!(
            self.kind,
            ParameterKind::ArrayPattern { .. } | ParameterKind::ObjectPattern { .. }
        )
    }

    pub fn has_default(&self) -> bool {
        self.default_value_text.is_some()
    }

    /// The bound identifier of a simple or variadic parameter.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            ParameterKind::Simple { name } | ParameterKind::Variadic { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Every identifier this declaration binds, at any depth, in first-seen order.
    ///
    /// Default-value expressions and the keys of renamed object members are
    /// not bindings and are skipped.
    pub fn leaf_names(&self) -> IndexSet<String> {
        let mut names = IndexSet::new();
        self.collect_leaf_names(&mut names);
        names
    }

    pub fn collect_leaf_names(&self, names: &mut IndexSet<String>) {
        match &self.kind {
            ParameterKind::Simple { name } => {
                names.insert(name.clone());
            }
            ParameterKind::Variadic {
                target: Some(target),
                ..
            } => target.collect_leaf_names(names),
            ParameterKind::Variadic { name, target: None } => {
                if is_identifier_text(name) {
                    names.insert(name.clone());
                }
            }
            ParameterKind::ArrayPattern { elements } => {
                for element in elements {
                    element.collect_leaf_names(names);
                }
            }
            ParameterKind::ObjectPattern { members } => {
                for member in members {
                    member.value.collect_leaf_names(names);
                }
            }
            ParameterKind::Elision => {}
        }
    }
}
