//! Type resolver: reduce a field's type node to a flat shape.
//!
//! Walks the named / non-null / list wrapper structure and collapses it
//! to `(type name, required, list)`. Two rules carry all the semantics:
//! - required-ness is read off the named node's own immediate non-null
//!   wrapper; a non-null wrapper around a *list* marks nothing on the
//!   element type.
//! - everything below a list wrapper loses its optionality: we model
//!   `List T`, never `List (Maybe T)` or `Maybe (List T)`.

use crate::ast::TypeNode;
use thiserror::Error;

/// Flat shape of one field's type. `is_required` is meaningless when
/// `is_list` is set; emitters treat list fields as plain containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    pub type_name: String,
    pub is_required: bool,
    pub is_list: bool,
}

/// Nesting outside the legal grammar (named, ≤1 non-null per level,
/// ≤1 list). Fatal for the file being converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("unexpected field type: non-null marker nested inside another non-null marker")]
    DoubledNonNull,
    #[error("unexpected field type: list nested inside another list")]
    NestedList,
}

pub fn resolve_field_type(node: &TypeNode) -> Result<FieldType, TypeError> {
    resolve(node, false, false)
}

fn resolve(node: &TypeNode, under_non_null: bool, is_list: bool) -> Result<FieldType, TypeError> {
    match node {
        TypeNode::Named(name) => Ok(FieldType {
            type_name: name.clone(),
            is_required: under_non_null,
            is_list,
        }),
        TypeNode::NonNull(inner) => {
            if under_non_null {
                return Err(TypeError::DoubledNonNull);
            }
            resolve(inner, true, is_list)
        }
        TypeNode::List(inner) => {
            if is_list {
                return Err(TypeError::NestedList);
            }
            // the list wrapper absorbs any non-null marker above it
            resolve(inner, false, true)
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
