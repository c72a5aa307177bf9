//! Token filter integration tests

use nyingarn_phonetic::prelude::*;

fn run(text: &str, replace: bool) -> Vec<Token> {
    let encoder = NyingarnPhonetic::new().unwrap();
    PhoneticFilter::new(whitespace_tokens(text), encoder, FilterSettings { replace })
        .collect::<Result<Vec<Token>>>()
        .unwrap()
}

fn rendered(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_string).collect::<Vec<_>>().join(" ")
}

#[test]
fn test_replace_sentence() {
    let tokens = run("the kookaburra sang", true);
    assert_eq!(rendered(&tokens), "THI@+1 KUKAPURRA@+1 JANG@+1");
}

#[test]
fn test_inject_sentence() {
    let tokens = run("good A 123 barra", false);
    assert_eq!(
        rendered(&tokens),
        "KUT@+1 good@+0 A@+1 123@+1 PARRA@+1 barra@+0"
    );
}

#[test]
fn test_total_positions_preserved() {
    let text = "nyingarn yolngu kaurna wiradjuri 42 A";
    for replace in [true, false] {
        let positions: u32 = run(text, replace).iter().map(|t| t.position_increment).sum();
        assert_eq!(positions, 6, "replace = {}", replace);
    }
}

#[test]
fn test_custom_encoder_through_trait() {
    struct Reverse;
    impl Encoder for Reverse {
        fn encode(&self, word: &str) -> Result<String> {
            Ok(word.chars().rev().collect())
        }
    }

    let tokens: Vec<Token> = PhoneticFilter::new(
        whitespace_tokens("abc aba"),
        Reverse,
        FilterSettings { replace: true },
    )
    .collect::<Result<_>>()
    .unwrap();

    assert_eq!(tokens, vec![Token::new("cba"), Token::new("aba")]);
}

#[test]
fn test_borrowed_encoder() {
    let encoder = NyingarnPhonetic::new().unwrap();
    let first: Vec<Token> = PhoneticFilter::new(
        whitespace_tokens("good"),
        &encoder,
        FilterSettings::default(),
    )
    .collect::<Result<_>>()
    .unwrap();
    assert_eq!(first, vec![Token::new("KUT")]);

    // Encoder still usable after the filter is dropped
    assert_eq!(encoder.encode("good").unwrap(), "KUT");
}

#[test]
fn test_settings_from_json() {
    let settings: FilterSettings = serde_json::from_str(r#"{"replace": false}"#).unwrap();
    assert!(!settings.replace);

    let settings: FilterSettings = serde_json::from_str("{}").unwrap();
    assert!(settings.replace);
}
