//! End-to-end scenarios: file on disk to printed answer.

use std::fs;

use chatbook::{
    find_answer, load, segment, Capacity, Error, Session, SessionConfig,
    NO_MATCH_PREFIX,
};
use tempfile::tempdir;

const PETS: &str = "Cats are small.\n\nDogs are big.";

fn pet_chunks() -> Vec<chatbook::Chunk> {
    segment(PETS, Capacity::default())
}

// =============================================================================
// Documented scenarios
// =============================================================================

#[test]
fn two_paragraphs_two_chunks() {
    let texts: Vec<_> = pet_chunks().into_iter().map(|c| c.text).collect();
    assert_eq!(texts, ["Cats are small.", "Dogs are big."]);
}

#[test]
fn dogs_question_picks_second_chunk() {
    let answer = find_answer("What do dogs do?", &pet_chunks()).unwrap();
    assert_eq!(answer.text, "Dogs are big.");
    assert_eq!(answer.score, 1);
}

#[test]
fn unmatched_question_shows_start_of_text() {
    let answer = find_answer("xyz abc", &pet_chunks()).unwrap();
    assert_eq!(answer.score, 0);
    assert_eq!(answer.text, format!("{NO_MATCH_PREFIX}Cats are small."));
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let err = load(dir.path().join("narnia.txt")).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "{err:?}");
    assert!(err.to_string().contains("narnia.txt"));
}

// =============================================================================
// Loader to session
// =============================================================================

#[test]
fn windows_1251_file_answers_in_russian() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("narnia.txt");
    let text = "Люси нашла платяной шкаф.\r\n\r\nЗа шкафом была зимняя Нарния.";
    let (bytes, _, unmappable) = encoding_rs::WINDOWS_1251.encode(text);
    assert!(!unmappable);
    fs::write(&path, &bytes).unwrap();

    let document = load(&path).unwrap();
    assert_eq!(document.encoding(), encoding_rs::WINDOWS_1251);

    let session = Session::from_document(&document, SessionConfig::default());
    assert_eq!(session.chunks().len(), 2);

    let answer = session.ask("Что такое Нарния?").unwrap();
    assert_eq!(answer.text, "За шкафом была зимняя Нарния.");
    assert_eq!(answer.score, 1);
}

#[test]
fn long_paragraph_is_packed_by_sentences() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.txt");
    let sentence = "The lion walked across the frozen land. ";
    fs::write(&path, sentence.repeat(20)).unwrap();

    let document = load(&path).unwrap();
    let config = SessionConfig::new(100, 1000).unwrap();
    let session = Session::from_document(&document, config);

    // 39-char sentences: two per chunk (39 + 1 + 39 = 79), a third would be 119.
    assert_eq!(session.chunks().len(), 10);
    for chunk in session.chunks() {
        assert!(chunk.char_len() <= 100);
    }
}

#[test]
fn full_session_over_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pets.txt");
    fs::write(&path, PETS).unwrap();

    let document = load(&path).unwrap();
    let session = Session::from_document(&document, SessionConfig::default());

    let mut out = Vec::new();
    let input = "cats?\n\nWhat do dogs do?\nxyz abc\nВЫХОД\n";
    session.run(input.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.ends_with("До свидания!\n"));
    assert!(out.contains("Cats are small.\n\n(Найдено совпадений: 1)"));
    assert!(out.contains("Dogs are big.\n\n(Найдено совпадений: 1)"));
    assert!(out.contains(NO_MATCH_PREFIX));
    assert!(out.contains("Пожалуйста, введите вопрос."));
    assert!(out.ends_with("До свидания!\n"));
}
