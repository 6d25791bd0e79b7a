//! Boundary between the external GraphQL parser and the codegen AST.
//!
//! `graphql-parser` owns the grammar; this module only converts its
//! schema document into our closed [`ast`](crate::ast) types. Schema
//! blocks, directive definitions, and type extensions carry nothing we
//! generate, so they are dropped here. Parse failures are the one
//! error this boundary can produce.

use crate::ast;
use graphql_parser::schema;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("schema parse error: {0}")]
pub struct ParseError(#[from] schema::ParseError);

pub fn parse_document(source: &str) -> Result<ast::Document, ParseError> {
    let parsed = schema::parse_schema::<String>(source)?;
    let definitions = parsed
        .definitions
        .iter()
        .filter_map(convert_definition)
        .collect();
    Ok(ast::Document { definitions })
}

fn convert_definition(def: &schema::Definition<'_, String>) -> Option<ast::Definition> {
    match def {
        schema::Definition::TypeDefinition(ty) => Some(convert_type_definition(ty)),
        schema::Definition::SchemaDefinition(_)
        | schema::Definition::TypeExtension(_)
        | schema::Definition::DirectiveDefinition(_) => None,
    }
}

fn convert_type_definition(ty: &schema::TypeDefinition<'_, String>) -> ast::Definition {
    match ty {
        schema::TypeDefinition::Enum(node) => ast::Definition::Enum(ast::EnumNode {
            name: node.name.clone(),
            values: node.values.iter().map(|value| value.name.clone()).collect(),
        }),
        schema::TypeDefinition::Object(node) => ast::Definition::Object(ast::ObjectNode {
            name: node.name.clone(),
            fields: node
                .fields
                .iter()
                .map(|field| ast::FieldNode {
                    name: field.name.clone(),
                    ty: convert_type(&field.field_type),
                })
                .collect(),
        }),
        schema::TypeDefinition::InputObject(node) => {
            ast::Definition::InputObject(ast::ObjectNode {
                name: node.name.clone(),
                fields: node
                    .fields
                    .iter()
                    .map(|field| ast::FieldNode {
                        name: field.name.clone(),
                        ty: convert_type(&field.value_type),
                    })
                    .collect(),
            })
        }
        schema::TypeDefinition::Scalar(node) => ast::Definition::Scalar(node.name.clone()),
        schema::TypeDefinition::Union(node) => ast::Definition::Union(node.name.clone()),
        schema::TypeDefinition::Interface(node) => {
            ast::Definition::Interface(node.name.clone())
        }
    }
}

fn convert_type(ty: &schema::Type<'_, String>) -> ast::TypeNode {
    match ty {
        schema::Type::NamedType(name) => ast::TypeNode::Named(name.clone()),
        schema::Type::ListType(inner) => ast::TypeNode::List(Box::new(convert_type(inner))),
        schema::Type::NonNullType(inner) => {
            ast::TypeNode::NonNull(Box::new(convert_type(inner)))
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
