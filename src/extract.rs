//! Schema extractor: partition a parsed document into the three
//! generatable definition lists.
//!
//! Walks the flat top-level definition list once, in order, keeping
//! enums, objects, and input objects and dropping everything else
//! (scalars, unions, interfaces — unsupported upstream). Object and
//! input fields run through the type resolver here, so a malformed
//! type node aborts the whole extraction with the offending definition
//! and field named in the error.

use crate::ast::{Definition, Document, EnumNode, ObjectNode};
use crate::resolve::{resolve_field_type, FieldType, TypeError};
use thiserror::Error;

/// One object/input field, schema-case name plus resolved shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub ty: FieldType,
}

/// An object or input-object definition with resolved fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// The three definition lists the emitters consume, declaration order
/// preserved. Inputs only ever become type aliases; they get no
/// decoders (mirrors the upstream scope).
#[derive(Debug, Clone, Default)]
pub struct Extracted {
    pub enums: Vec<EnumNode>,
    pub objects: Vec<ObjectDef>,
    pub inputs: Vec<ObjectDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` of `{definition}`: {source}")]
pub struct ExtractError {
    pub definition: String,
    pub field: String,
    #[source]
    pub source: TypeError,
}

pub fn extract_document(doc: &Document) -> Result<Extracted, ExtractError> {
    let mut out = Extracted::default();
    for definition in &doc.definitions {
        match definition {
            Definition::Enum(node) => out.enums.push(node.clone()),
            Definition::Object(node) => out.objects.push(resolve_object(node)?),
            Definition::InputObject(node) => out.inputs.push(resolve_object(node)?),
            Definition::Scalar(_) | Definition::Union(_) | Definition::Interface(_) => {}
        }
    }
    Ok(out)
}

fn resolve_object(node: &ObjectNode) -> Result<ObjectDef, ExtractError> {
    let mut fields = Vec::with_capacity(node.fields.len());
    for field in &node.fields {
        let ty = resolve_field_type(&field.ty).map_err(|source| ExtractError {
            definition: node.name.clone(),
            field: field.name.clone(),
            source,
        })?;
        fields.push(FieldDef { name: field.name.clone(), ty });
    }
    Ok(ObjectDef { name: node.name.clone(), fields })
}

// ------------------------------- Tests ------------------------------------ //
