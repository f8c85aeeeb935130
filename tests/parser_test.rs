//! Integration tests for WordParser

use std::thread;

use rusbasic::prelude::*;

fn rendered(words: &WordList) -> Vec<String> {
    words.iter().map(Word::text).collect()
}

#[test]
fn test_round_trip_is_lossless() -> Result<()> {
    let mut parser = WordParser::new()?;
    parser.register_phrases(DEFAULT_PHRASES.iter().copied());

    let texts = [
        "",
        "   ",
        "Несмотря на то, что чья-то карета...",
        "све\u{0301}те лягу\u{0301}шка-кваку\u{0301}шка.\n",
        "НАСА, высота 82,7 км\u{2013}это много",
        "Ёлка — ёжик\t«ура!» 2024 год, hello world",
        "из-за-за-за - -по\u{2013}своему",
        "ﬁ ① ½ Ⅻ",
    ];

    for text in texts {
        let words = parser.parse(text)?;
        assert_eq!(words.to_text(), parser.normalize(text), "input: {text:?}");
        assert!(words.iter().all(|w| !w.is_empty()));
    }
    Ok(())
}

#[test]
fn test_accent_removed_rendering_has_no_acute() -> Result<()> {
    let parser = WordParser::new()?;
    let words = parser.parse("Я́ по\u{0301}мню чу\u{0301}дное мгнове\u{0301}нье: Ё́лка")?;

    let options = TextOptions::new().remove_accents(true);
    for word in &words {
        assert!(!word.text_with(options).contains('\u{0301}'), "{word:?}");
    }
    Ok(())
}

#[test]
fn test_hyphenated_word() -> Result<()> {
    let parser = WordParser::new()?;
    let words = parser.parse("по-своему")?;

    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word_type(), WordType::HyphenatedWord);
    assert_eq!(words[0].token_texts(), vec!["по", "-", "своему"]);
    Ok(())
}

#[test]
fn test_longest_match_wins() -> Result<()> {
    let mut parser = WordParser::new()?;
    parser.register_phrases(["несмотря на", "несмотря на то, что"]);

    let words = parser.parse("Несмотря на то, что чья-то карета...")?;
    assert_eq!(words[0].text(), "Несмотря на то, что");
    assert_eq!(words[0].word_type(), WordType::Mwe);
    Ok(())
}

#[test]
fn test_mwe_in_mid_sentence() -> Result<()> {
    let mut parser = WordParser::new()?;
    parser.register_phrase("потому, что");

    let words = parser.parse("Он любил ее не потому, что она обладала неземной красотой.")?;
    assert_eq!(
        rendered(&words),
        vec![
            "Он", " ", "любил", " ", "ее", " ", "не", " ", "потому, что", " ", "она", " ",
            "обладала", " ", "неземной", " ", "красотой", "."
        ]
    );
    assert_eq!(words[8].word_type(), WordType::Mwe);
    assert_eq!(words[17].word_type(), WordType::Punct);
    Ok(())
}

#[test]
fn test_phrases_after_prefix_words() -> Result<()> {
    let mut parser = WordParser::new()?;
    parser.register_phrases(["до того как", "перед тем, как", "в течение"]);

    let words = parser.parse("Еще до того как, уже перед тем, как и в течение")?;
    let mwes: Vec<String> = words
        .iter()
        .filter(|w| w.word_type() == WordType::Mwe)
        .map(Word::text)
        .collect();
    assert_eq!(mwes, vec!["до того как", "перед тем, как", "в течение"]);
    Ok(())
}

#[test]
fn test_en_dash_in_registered_phrase() -> Result<()> {
    let mut parser = WordParser::new()?;
    parser.register_phrase("из\u{2013}за того что");

    for text in ["из\u{2013}за того что он", "из-за того что он"] {
        let words = parser.parse(text)?;
        assert_eq!(words[0].text(), "из-за того что");
        assert_eq!(words[0].word_type(), WordType::Mwe);
    }

    let frozen = parser.freeze()?;
    let words = frozen.parse("Из\u{2013}за того что")?;
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word_type(), WordType::Mwe);
    Ok(())
}

#[test]
fn test_partial_phrase_does_not_match() -> Result<()> {
    let mut parser = WordParser::new()?;
    parser.register_phrase("несмотря на то, что");

    let words = parser.parse("Несмотря на то еще не много")?;
    assert!(words.iter().all(|w| w.word_type() != WordType::Mwe));
    assert_eq!(words[0].text(), "Несмотря");
    assert_eq!(words.to_text(), "Несмотря на то еще не много");
    Ok(())
}

#[test]
fn test_case_insensitive_matching() -> Result<()> {
    let mut parser = WordParser::new()?;
    parser.register_phrase("Несмотря на");

    let words = parser.parse("несмотря на серьёзную болезнь")?;
    assert_eq!(words[0].word_type(), WordType::Mwe);
    assert_eq!(words[0].text(), "несмотря на");
    Ok(())
}

#[test]
fn test_case_sensitive_matching() -> Result<()> {
    let mut parser = WordParser::case_sensitive()?;
    parser.register_phrase("Несмотря на");

    let words = parser.parse("несмотря на серьёзную болезнь")?;
    assert!(words.iter().all(|w| w.word_type() != WordType::Mwe));
    assert_eq!(words[0].text(), "несмотря");

    let words = parser.parse("Несмотря на болезнь")?;
    assert_eq!(words[0].word_type(), WordType::Mwe);
    Ok(())
}

#[test]
fn test_output_keeps_original_case() -> Result<()> {
    let mut parser = WordParser::new()?;
    parser.register_phrase("потому что");

    let words = parser.parse("ПОТОМУ ЧТО")?;
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].text(), "ПОТОМУ ЧТО");
    Ok(())
}

#[test]
fn test_unique_words() -> Result<()> {
    let parser = WordParser::new()?;
    let words = parser.parse("Да все потому же потому же")?;

    let unique: Vec<String> = words.unique(false).into_iter().collect();
    assert_eq!(unique, vec!["все", "да", "же", "потому"]);

    let unique = words.unique(true);
    assert!(unique.contains("Да"));
    assert!(!unique.contains("да"));
    Ok(())
}

#[test]
fn test_unique_words_strip_accents_and_keep_phrases() -> Result<()> {
    let mut parser = WordParser::new()?;
    parser.register_phrase("потому же");

    let words = parser.parse("Да все пото\u{0301}му же, потому же!")?;
    let unique: Vec<String> = words.unique(false).into_iter().collect();
    assert_eq!(unique, vec!["все", "да", "потому же"]);
    Ok(())
}

#[test]
fn test_rendering_options() -> Result<()> {
    let parser = WordParser::new()?;
    let words = parser.parse("Ёлка\u{0301}")?;

    assert_eq!(words[0].text(), "Ёлка\u{0301}");
    assert_eq!(words[0].canonical(), "ёлка");
    assert_eq!(words[0].text_with(TextOptions::raw()), "Е\u{0308}лка\u{0301}");
    Ok(())
}

#[test]
fn test_digits_split_from_punctuation() -> Result<()> {
    let parser = WordParser::new()?;
    let words = parser.parse("НАСА, высота 82,7 км")?;
    assert_eq!(
        rendered(&words),
        vec!["НАСА", ", ", "высота", " ", "82", ",", "7", " ", "км"]
    );
    assert_eq!(words[4].word_type(), WordType::Numeric);
    assert_eq!(words[5].word_type(), WordType::Punct);

    let parser = WordParser::from_config(&ParserConfig::default().with_split_digits(false))?;
    let words = parser.parse("высота 82,7 км")?;
    assert_eq!(rendered(&words), vec!["высота", " 82,7 ", "км"]);
    assert_eq!(words[1].word_type(), WordType::Other);
    Ok(())
}

#[test]
fn test_frozen_parser_shared_across_threads() -> Result<()> {
    let mut parser = WordParser::new()?;
    parser.register_phrases(DEFAULT_PHRASES.iter().copied());
    let text = "Он ушел, потому что устал, после того как работал в течение дня.";
    let expected = parser.parse(text)?;

    let frozen = parser.freeze()?;
    let frozen = &frozen;
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || frozen.parse(text)))
            .collect();
        for handle in handles {
            let words = handle.join().unwrap().unwrap();
            assert_eq!(words, expected);
        }
    });
    Ok(())
}
