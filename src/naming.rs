//! Identifier case transforms between schema-case and Elm-case.
//!
//! Both transforms split on underscores and drop empty segments, so
//! `DOG__CAT` and `dog_cat` land on the same output. Stateless free
//! functions; everything that crosses into the generated module goes
//! through one of these at emission time.

/// Type-level casing: `dog_cat` → `DogCat`. Used for type names and
/// enum member constructors.
pub fn title_case(input: &str) -> String {
    input
        .split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// Value-level casing: `dog_cat` → `dogCat`. Used for function and
/// record field names.
pub fn lower_camel_case(input: &str) -> String {
    let mut words = input.split('_').filter(|word| !word.is_empty());
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut out = first.to_lowercase();
    for word in words {
        out.push_str(&capitalize(word));
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_joins_underscore_words() {
        assert_eq!(title_case("dog_cat"), "DogCat");
        assert_eq!(title_case("dog"), "Dog");
        assert_eq!(title_case("RED"), "Red");
    }

    #[test]
    fn lower_camel_case_lowers_first_word() {
        assert_eq!(lower_camel_case("dog_cat"), "dogCat");
        assert_eq!(lower_camel_case("dog"), "dog");
        assert_eq!(lower_camel_case("SOME_FIELD"), "someField");
    }

    #[test]
    fn both_are_idempotent_on_canonical_single_words() {
        assert_eq!(title_case("Red"), "Red");
        assert_eq!(lower_camel_case("red"), "red");
    }

    #[test]
    fn consecutive_underscores_leave_no_stray_separators() {
        assert_eq!(title_case("dog__cat"), "DogCat");
        assert_eq!(lower_camel_case("dog__cat"), "dogCat");
        assert_eq!(title_case("_dog_"), "Dog");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(title_case(""), "");
        assert_eq!(lower_camel_case(""), "");
        assert_eq!(title_case("___"), "");
    }
}
