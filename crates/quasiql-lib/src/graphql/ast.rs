//! Typed AST for executable GraphQL documents.
//!
//! Serializes to the same shape as graphql-js AST nodes (`kind` tags,
//! camelCase fields). Spans are relative to the [`Source`](super::Source)
//! body they were parsed from and are not serialized.

use rowan::TextRange;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind")]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(fragment) => Some(fragment),
            Definition::Operation(_) => None,
        })
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(operation) => Some(operation),
            Definition::Fragment(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Definition {
    #[serde(rename = "OperationDefinition")]
    Operation(OperationDefinition),
    #[serde(rename = "FragmentDefinition")]
    Fragment(FragmentDefinition),
}

impl Definition {
    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::Operation(op) => op.name.as_ref().map(|n| n.value.as_str()),
            Definition::Fragment(fragment) => Some(&fragment.name.value),
        }
    }

    pub fn span(&self) -> TextRange {
        match self {
            Definition::Operation(op) => op.span,
            Definition::Fragment(fragment) => fragment.span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    #[serde(skip)]
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    #[serde(skip)]
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct VariableDefinition {
    pub variable: Variable,
    #[serde(rename = "type")]
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    #[serde(skip)]
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    #[serde(skip)]
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    #[serde(skip)]
    pub span: TextRange,
}

impl Field {
    /// Key under which the field appears in a response.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).value.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<Directive>,
    #[serde(skip)]
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    #[serde(skip)]
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    #[serde(skip)]
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    #[serde(skip)]
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind")]
pub struct Name {
    pub value: String,
    #[serde(skip)]
    pub span: TextRange,
}

impl Name {
    pub fn new(value: impl Into<String>, span: TextRange) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind")]
pub struct NamedType {
    pub name: Name,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind")]
pub struct Variable {
    pub name: Name,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind")]
pub enum Type {
    #[serde(rename = "NamedType")]
    Named { name: Name },
    #[serde(rename = "ListType")]
    List {
        #[serde(rename = "type")]
        ty: Box<Type>,
    },
    #[serde(rename = "NonNullType")]
    NonNull {
        #[serde(rename = "type")]
        ty: Box<Type>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Value {
    Variable {
        name: Name,
    },
    #[serde(rename = "IntValue")]
    Int { value: String },
    #[serde(rename = "FloatValue")]
    Float { value: String },
    #[serde(rename = "StringValue")]
    String { value: String, block: bool },
    #[serde(rename = "BooleanValue")]
    Boolean { value: bool },
    #[serde(rename = "NullValue")]
    Null,
    #[serde(rename = "EnumValue")]
    Enum { value: String },
    #[serde(rename = "ListValue")]
    List { values: Vec<Value> },
    #[serde(rename = "ObjectValue")]
    Object { fields: Vec<ObjectField> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
}
