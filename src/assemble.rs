//! Module assembler: one complete Elm module per input document.
//!
//! Fixed layout: header + imports, then banner-gated sections in a
//! fixed order — enum types, object types, input types, enum string
//! conversions, enum decoders, object decoders — optionally followed
//! by the utilities section. A banner appears only when its list is
//! non-empty. Top-level fragments are separated by Elm's conventional
//! two blank lines.

use crate::emit::{self, enums, objects};
use crate::extract::Extracted;

pub const SECTION_ENUM_TYPES: &str = "-- ENUM TYPES";
pub const SECTION_OBJECT_TYPES: &str = "-- OBJECT TYPES";
pub const SECTION_INPUT_TYPES: &str = "-- INPUT TYPES";
pub const SECTION_ENUM_STRINGS: &str = "-- ENUM STRING CONVERSIONS";
pub const SECTION_ENUM_DECODERS: &str = "-- ENUM DECODERS";
pub const SECTION_OBJECT_DECODERS: &str = "-- OBJECT DECODERS";
pub const SECTION_UTILITIES: &str = "-- UTILITIES";

const IMPORTS: &str = "\
import Json.Decode exposing (Decoder, andThen, bool, fail, float, int, list, nullable, string, succeed)
import Json.Decode.Pipeline exposing (required)";

pub fn assemble_module(module_name: &str, schema: &Extracted, with_utilities: bool) -> String {
    let mut blocks = vec![format!("module {module_name} exposing (..)\n\n{IMPORTS}")];

    push_section(
        &mut blocks,
        SECTION_ENUM_TYPES,
        schema.enums.iter().map(enums::emit_enum_type).collect(),
    );
    push_section(
        &mut blocks,
        SECTION_OBJECT_TYPES,
        schema.objects.iter().map(objects::emit_object_type).collect(),
    );
    push_section(
        &mut blocks,
        SECTION_INPUT_TYPES,
        schema.inputs.iter().map(objects::emit_object_type).collect(),
    );
    push_section(
        &mut blocks,
        SECTION_ENUM_STRINGS,
        schema.enums.iter().map(enums::emit_enum_strings).collect(),
    );
    push_section(
        &mut blocks,
        SECTION_ENUM_DECODERS,
        schema.enums.iter().map(enums::emit_enum_decoder).collect(),
    );
    push_section(
        &mut blocks,
        SECTION_OBJECT_DECODERS,
        schema.objects.iter().map(objects::emit_object_decoder).collect(),
    );
    if with_utilities {
        push_section(
            &mut blocks,
            SECTION_UTILITIES,
            vec![emit::UTILITIES_FRAGMENT.to_string()],
        );
    }

    let mut out = blocks.join("\n\n\n");
    out.push('\n');
    out
}

fn push_section(blocks: &mut Vec<String>, banner: &str, fragments: Vec<String>) {
    if fragments.is_empty() {
        return;
    }
    blocks.push(banner.to_string());
    blocks.extend(fragments);
}

// ------------------------------- Tests ------------------------------------ //
