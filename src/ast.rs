// Strongly-typed schema AST for codegen. No graphql_parser types past this point.

/// A parsed schema document: the flat, ordered list of top-level definitions.
#[derive(Debug, Clone)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

/// Top-level definition kinds. Scalar/union/interface are carried so the
/// extractor can discard them; they are never emitted.
#[derive(Debug, Clone)]
pub enum Definition {
    Enum(EnumNode),
    Object(ObjectNode),
    InputObject(ObjectNode),
    Scalar(String),
    Union(String),
    Interface(String),
}

#[derive(Debug, Clone)]
pub struct EnumNode {
    pub name: String,
    pub values: Vec<String>,     // declaration order; drives case-branch order
}

#[derive(Debug, Clone)]
pub struct ObjectNode {
    pub name: String,
    pub fields: Vec<FieldNode>,
}

#[derive(Debug, Clone)]
pub struct FieldNode {
    pub name: String,            // schema-case; output casing happens at emission
    pub ty: TypeNode,
}

/// Type reference grammar: a named type, optionally non-null, optionally
/// inside a list that is itself optionally non-null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Named(String),
    NonNull(Box<TypeNode>),
    List(Box<TypeNode>),
}
