//! Enum emitters: sum type declaration, string conversion pair, decoder.

use crate::ast::EnumNode;
use crate::emit::decoder_name;
use crate::naming::{lower_camel_case, title_case};

/// One sum type per enum, member constructors in declaration order.
pub fn emit_enum_type(def: &EnumNode) -> String {
    let mut lines = vec![format!("type {}", title_case(&def.name))];
    for (index, value) in def.values.iter().enumerate() {
        let lead = if index == 0 { '=' } else { '|' };
        lines.push(format!("    {lead} {}", title_case(value)));
    }
    lines.join("\n")
}

/// The `xToString` / `xFromString` pair. Forward is total; reverse
/// returns `Maybe` with a catch-all `Nothing`, so an unmatched literal
/// is an absent result, never a crash.
pub fn emit_enum_strings(def: &EnumNode) -> String {
    format!("{}\n\n\n{}", emit_to_string(def), emit_from_string(def))
}

fn emit_to_string(def: &EnumNode) -> String {
    let type_name = title_case(&def.name);
    let fn_name = format!("{}ToString", lower_camel_case(&def.name));
    let mut lines = vec![
        format!("{fn_name} : {type_name} -> String"),
        format!("{fn_name} value ="),
        "    case value of".to_string(),
    ];
    for (index, value) in def.values.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("        {} ->", title_case(value)));
        lines.push(format!("            \"{value}\""));
    }
    lines.join("\n")
}

fn emit_from_string(def: &EnumNode) -> String {
    let type_name = title_case(&def.name);
    let fn_name = format!("{}FromString", lower_camel_case(&def.name));
    let mut lines = vec![
        format!("{fn_name} : String -> Maybe {type_name}"),
        format!("{fn_name} value ="),
        "    case value of".to_string(),
    ];
    for value in &def.values {
        lines.push(format!("        \"{value}\" ->"));
        lines.push(format!("            Just {}", title_case(value)));
        lines.push(String::new());
    }
    lines.push("        _ ->".to_string());
    lines.push("            Nothing".to_string());
    lines.join("\n")
}

/// Wraps the reverse mapping as a decoder; failure embeds the
/// offending literal.
pub fn emit_enum_decoder(def: &EnumNode) -> String {
    let type_name = title_case(&def.name);
    let decoder = decoder_name(&def.name);
    let from_string = format!("{}FromString", lower_camel_case(&def.name));
    [
        format!("{decoder} : Decoder {type_name}"),
        format!("{decoder} ="),
        "    string".to_string(),
        "        |> andThen".to_string(),
        "            (\\value ->".to_string(),
        format!("                case {from_string} value of"),
        "                    Just result ->".to_string(),
        "                        succeed result".to_string(),
        String::new(),
        "                    Nothing ->".to_string(),
        format!("                        fail (\"unknown {type_name}: \" ++ value)"),
        "            )".to_string(),
    ]
    .join("\n")
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> EnumNode {
        EnumNode {
            name: "Color".to_string(),
            values: vec!["RED".to_string(), "GREEN".to_string()],
        }
    }

    #[test]
    fn enum_type_lists_members_as_alternatives() {
        assert_eq!(
            emit_enum_type(&color()),
            "type Color\n    = Red\n    | Green"
        );
    }

    #[test]
    fn underscored_values_become_title_case_members() {
        let def = EnumNode {
            name: "pet_kind".to_string(),
            values: vec!["DOG_CAT".to_string()],
        };
        let fragment = emit_enum_type(&def);
        assert!(fragment.starts_with("type PetKind"));
        assert!(fragment.contains("= DogCat"));
    }

    #[test]
    fn forward_mapping_covers_each_value_once_in_order() {
        let fragment = emit_enum_strings(&color());
        assert!(fragment.contains("colorToString : Color -> String"));
        let red = fragment.find("        Red ->").unwrap();
        let green = fragment.find("        Green ->").unwrap();
        assert!(red < green);
        assert_eq!(fragment.matches("\"RED\"").count(), 2); // one arm per direction
    }

    #[test]
    fn reverse_mapping_has_a_nothing_catch_all() {
        let fragment = emit_enum_strings(&color());
        assert!(fragment.contains("colorFromString : String -> Maybe Color"));
        assert!(fragment.contains("        \"GREEN\" ->\n            Just Green"));
        assert!(fragment.ends_with("        _ ->\n            Nothing"));
    }

    #[test]
    fn decoder_wraps_reverse_mapping_and_embeds_the_literal() {
        let fragment = emit_enum_decoder(&color());
        assert!(fragment.starts_with("decodeColor : Decoder Color"));
        assert!(fragment.contains("case colorFromString value of"));
        assert!(fragment.contains("fail (\"unknown Color: \" ++ value)"));
    }
}
