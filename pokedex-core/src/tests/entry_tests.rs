use super::*;

#[test]
fn extract_id_with_trailing_slash() {
    assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon/25/"), Ok(25));
}

#[test]
fn extract_id_without_trailing_slash() {
    assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon/25"), Ok(25));
}

#[test]
fn extract_id_large_form_ids() {
    assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon/10033/"), Ok(10033));
}

#[test]
fn extract_id_requires_whole_segment_numeric() {
    assert!(extract_id("https://pokeapi.co/api/v2/pokemon/form25/").is_err());
    assert!(extract_id("https://pokeapi.co/api/v2/pokemon/25a").is_err());
}

#[test]
fn extract_id_rejects_non_numeric_segment() {
    let err = extract_id("https://pokeapi.co/api/v2/pokemon/pikachu/").unwrap_err();
    assert_eq!(
        err,
        EntryError::InvalidId {
            url: "https://pokeapi.co/api/v2/pokemon/pikachu/".to_string(),
            segment: "pikachu".to_string(),
        }
    );
}

#[test]
fn extract_id_rejects_empty_and_signed_segments() {
    assert!(extract_id("https://pokeapi.co/api/v2/pokemon//").is_err());
    assert!(extract_id("").is_err());
    assert!(extract_id("https://pokeapi.co/api/v2/pokemon/+25").is_err());
    assert!(extract_id("https://pokeapi.co/api/v2/pokemon/-1").is_err());
}

#[test]
fn sprite_url_is_fixed_template() {
    assert_eq!(
        sprite_url(25),
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
    );
}

#[test]
fn capitalize_first_letter_only() {
    assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
    assert_eq!(capitalize("mr-mime"), "Mr-mime");
    assert_eq!(capitalize("Pikachu"), "Pikachu");
    assert_eq!(capitalize(""), "");
}

#[test]
fn display_entry_from_raw() {
    let raw = RawEntry::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");
    let entry = DisplayEntry::from_raw(&raw).unwrap();
    assert_eq!(entry.name, "Pikachu");
    assert_eq!(entry.id, 25);
    assert_eq!(entry.image_url, sprite_url(25));
}

#[test]
fn display_entry_from_raw_propagates_bad_id() {
    let raw = RawEntry::new("missingno", "https://pokeapi.co/api/v2/pokemon/abc");
    assert!(matches!(
        DisplayEntry::from_raw(&raw),
        Err(EntryError::InvalidId { .. })
    ));
}

#[test]
fn matches_name_case_insensitively() {
    let raw = RawEntry::new("charmander", "https://pokeapi.co/api/v2/pokemon/4/");
    let entry = DisplayEntry::from_raw(&raw).unwrap();
    assert!(entry.matches("char"));
    assert!(entry.matches("  MANDER "));
    assert!(!entry.matches("bulba"));
}

#[test]
fn matches_exact_id_only() {
    let raw = RawEntry::new("charmander", "https://pokeapi.co/api/v2/pokemon/4/");
    let entry = DisplayEntry::from_raw(&raw).unwrap();
    assert!(entry.matches("4"));
    assert!(!entry.matches("44"));
    assert!(!entry.matches(""));
    assert!(!entry.matches("   "));
}
