//! Object emitters: record type aliases and pipeline decoders.
//!
//! Used for both object and input-object definitions; inputs only ever
//! go through the type-alias path.

use crate::emit::{base_decoder, decoder_name, elm_type_name};
use crate::extract::ObjectDef;
use crate::naming::{lower_camel_case, title_case};
use crate::resolve::FieldType;

/// One record alias per object, one field per line.
pub fn emit_object_type(def: &ObjectDef) -> String {
    let mut lines = vec![format!("type alias {} =", title_case(&def.name))];
    if def.fields.is_empty() {
        lines.push("    {}".to_string());
        return lines.join("\n");
    }
    for (index, field) in def.fields.iter().enumerate() {
        let lead = if index == 0 { '{' } else { ',' };
        lines.push(format!(
            "    {lead} {} : {}",
            lower_camel_case(&field.name),
            type_annotation(&field.ty)
        ));
    }
    lines.push("    }".to_string());
    lines.join("\n")
}

/// A list field is a plain container; only a non-required non-list
/// field gets the `Maybe` wrapper.
fn type_annotation(ty: &FieldType) -> String {
    let base = elm_type_name(&ty.type_name);
    if ty.is_list {
        format!("List {base}")
    } else if ty.is_required {
        base.to_string()
    } else {
        format!("Maybe {base}")
    }
}

/// One decoder per object: a left-to-right pipeline of per-field
/// decoders keyed by the schema-case field names.
pub fn emit_object_decoder(def: &ObjectDef) -> String {
    let type_name = title_case(&def.name);
    let decoder = decoder_name(&def.name);
    let mut lines = vec![
        format!("{decoder} : Decoder {type_name}"),
        format!("{decoder} ="),
        format!("    succeed {type_name}"),
    ];
    for field in &def.fields {
        lines.push(format!(
            "        |> required \"{}\" {}",
            field.name,
            field_decoder(&field.ty)
        ));
    }
    lines.join("\n")
}

fn field_decoder(ty: &FieldType) -> String {
    let base = base_decoder(&ty.type_name);
    if ty.is_list {
        format!("(list {base})")
    } else if ty.is_required {
        base
    } else {
        format!("(nullable {base})")
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::FieldDef;

    fn field(name: &str, type_name: &str, is_required: bool, is_list: bool) -> FieldDef {
        FieldDef {
            name: name.to_string(),
            ty: FieldType { type_name: type_name.to_string(), is_required, is_list },
        }
    }

    fn point() -> ObjectDef {
        ObjectDef {
            name: "Point".to_string(),
            fields: vec![field("x", "Int", true, false), field("y", "Int", true, false)],
        }
    }

    #[test]
    fn required_fields_carry_no_wrapper() {
        assert_eq!(
            emit_object_type(&point()),
            "type alias Point =\n    { x : Int\n    , y : Int\n    }"
        );
    }

    #[test]
    fn optional_fields_get_maybe() {
        let def = ObjectDef {
            name: "Profile".to_string(),
            fields: vec![field("nickname", "String", false, false)],
        };
        assert!(emit_object_type(&def).contains("nickname : Maybe String"));
    }

    #[test]
    fn list_fields_are_never_optional() {
        let def = ObjectDef {
            name: "Post".to_string(),
            // resolver marks lists with is_required left over from the
            // element; the emitter must ignore it either way
            fields: vec![
                field("tags", "String", false, true),
                field("refs", "String", true, true),
            ],
        };
        let fragment = emit_object_type(&def);
        assert!(fragment.contains("tags : List String"));
        assert!(fragment.contains("refs : List String"));
        assert!(!fragment.contains("Maybe (List"));
        assert!(!fragment.contains("Maybe List"));
    }

    #[test]
    fn boolean_is_rendered_as_bool() {
        let def = ObjectDef {
            name: "Flag".to_string(),
            fields: vec![field("on", "Boolean", true, false)],
        };
        assert!(emit_object_type(&def).contains("on : Bool"));
    }

    #[test]
    fn references_to_declared_types_pass_through() {
        let def = ObjectDef {
            name: "Shape".to_string(),
            fields: vec![field("color", "Color", true, false)],
        };
        assert!(emit_object_type(&def).contains("color : Color"));
        assert!(emit_object_decoder(&def).contains("|> required \"color\" decodeColor"));
    }

    #[test]
    fn decoder_chains_fields_left_to_right() {
        let expected = [
            "decodePoint : Decoder Point",
            "decodePoint =",
            "    succeed Point",
            "        |> required \"x\" int",
            "        |> required \"y\" int",
        ]
        .join("\n");
        assert_eq!(emit_object_decoder(&point()), expected);
    }

    #[test]
    fn field_decoders_compose_wrapper_then_base() {
        assert_eq!(field_decoder(&FieldType {
            type_name: "String".into(), is_required: false, is_list: false,
        }), "(nullable string)");
        assert_eq!(field_decoder(&FieldType {
            type_name: "String".into(), is_required: true, is_list: true,
        }), "(list string)");
        assert_eq!(field_decoder(&FieldType {
            type_name: "Int".into(), is_required: true, is_list: false,
        }), "int");
    }

    #[test]
    fn empty_objects_emit_an_empty_record() {
        let def = ObjectDef { name: "Unit".to_string(), fields: vec![] };
        assert_eq!(emit_object_type(&def), "type alias Unit =\n    {}");
    }
}
