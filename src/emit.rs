//! Elm source emitters.
//!
//! Every emitter is a pure function from an extracted definition to a
//! source fragment (no trailing newline; the assembler owns spacing).
//! This root module holds the pieces shared by enum and object
//! emission: the built-in scalar tables and the decoder reference
//! convention.

pub mod enums;
pub mod objects;

/// Decoder reference convention: `decode` + the type name as written
/// in the schema. References to types this run never declared are left
/// for the Elm compiler to flag; we do not invent fallbacks.
pub(crate) fn decoder_name(type_name: &str) -> String {
    format!("decode{type_name}")
}

/// Base decoder for a named type: fixed primitives for the four
/// built-in scalars, the `decode`-prefixed reference otherwise.
pub(crate) fn base_decoder(type_name: &str) -> String {
    match type_name {
        "Boolean" => "bool".to_string(),
        "String" => "string".to_string(),
        "Int" => "int".to_string(),
        "Float" => "float".to_string(),
        other => decoder_name(other),
    }
}

/// Elm spelling of a named type. Only `Boolean` differs; every other
/// name resolves against its own declaration in the generated module.
pub(crate) fn elm_type_name(type_name: &str) -> &str {
    match type_name {
        "Boolean" => "Bool",
        other => other,
    }
}

/// Fixed helper adapting a total `String -> Maybe a` function into a
/// decoder; emitted only when the utilities flag is set.
pub const UTILITIES_FRAGMENT: &str = "\
decodeFromString : String -> (String -> Maybe a) -> Decoder a
decodeFromString label fromString =
    string
        |> andThen
            (\\value ->
                case fromString value of
                    Just result ->
                        succeed result

                    Nothing ->
                        fail (\"unknown \" ++ label ++ \": \" ++ value)
            )";

// ------------------------------- Tests ------------------------------------ //
