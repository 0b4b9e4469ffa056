//! Text generators: random ASCII strings, lorem-style words, sentences and
//! paragraphs, and UUIDs.

use crate::GeneratorError;
use rand::Rng;

/// Characters used by [`ascii`].
pub const ASCII_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
~=+%^*/()[]{}!@#$?| ";

/// Vocabulary for words, sentences and paragraphs.
const VOCABULARY: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum", "perspiciatis", "unde", "omnis", "iste", "natus",
    "error", "voluptatem", "accusantium", "doloremque", "laudantium", "totam", "rem", "aperiam",
    "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis", "quasi", "architecto",
    "beatae", "vitae", "dicta", "explicabo", "nemo", "ipsam", "quia", "voluptas", "aspernatur",
    "aut", "odit", "fugit", "consequuntur", "magni", "dolores", "eos", "ratione", "sequi",
    "nesciunt", "neque", "porro", "quisquam",
];

const SENTENCE_WORDS: std::ops::RangeInclusive<usize> = 4..=12;
const PARAGRAPH_SENTENCES: std::ops::RangeInclusive<usize> = 3..=6;

fn require_count(kind: &str, num: usize) -> Result<(), GeneratorError> {
    if num == 0 {
        return Err(GeneratorError::InvalidBounds(format!(
            "{kind} count should be at least 1"
        )));
    }
    Ok(())
}

fn word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    VOCABULARY[rng.random_range(0..VOCABULARY.len())]
}

fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(SENTENCE_WORDS);
    let mut out = String::new();
    for i in 0..len {
        let w = word(rng);
        if i == 0 {
            let mut chars = w.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(w);
        }
    }
    out.push('.');
    out
}

/// Generate a random string with a length in `[min_length, max_length]`.
pub fn ascii<R: Rng + ?Sized>(
    rng: &mut R,
    min_length: usize,
    max_length: usize,
) -> Result<String, GeneratorError> {
    if max_length < min_length {
        return Err(GeneratorError::InvalidBounds(format!(
            "ascii max_length {max_length} is less than min_length {min_length}"
        )));
    }
    let len = rng.random_range(min_length..=max_length);
    Ok((0..len)
        .map(|_| ASCII_CHARSET[rng.random_range(0..ASCII_CHARSET.len())] as char)
        .collect())
}

/// Generate `num` words separated by spaces.
pub fn words<R: Rng + ?Sized>(rng: &mut R, num: usize) -> Result<String, GeneratorError> {
    require_count("words", num)?;
    Ok((0..num).map(|_| word(rng)).collect::<Vec<_>>().join(" "))
}

/// Generate `num` sentences separated by spaces.
pub fn sentences<R: Rng + ?Sized>(rng: &mut R, num: usize) -> Result<String, GeneratorError> {
    require_count("sentences", num)?;
    Ok((0..num).map(|_| sentence(rng)).collect::<Vec<_>>().join(" "))
}

/// Generate `num` paragraphs separated by spaces.
///
/// Paragraphs stay on one line so every generated statement does too.
pub fn paragraphs<R: Rng + ?Sized>(rng: &mut R, num: usize) -> Result<String, GeneratorError> {
    require_count("paragraphs", num)?;
    let mut out = Vec::with_capacity(num);
    for _ in 0..num {
        let count = rng.random_range(PARAGRAPH_SENTENCES);
        out.push(sentences(rng, count)?);
    }
    Ok(out.join(" "))
}

/// Generate a version 4 UUID from the RNG's bytes.
pub fn uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.random();
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ascii_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let s = ascii(&mut rng, 3, 8).unwrap();
            assert!((3..=8).contains(&s.len()));
            assert!(s.bytes().all(|b| ASCII_CHARSET.contains(&b)));
        }
    }

    #[test]
    fn test_ascii_fixed_length() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(ascii(&mut rng, 6, 6).unwrap().len(), 6);
        assert_eq!(ascii(&mut rng, 0, 0).unwrap(), "");
        assert!(ascii(&mut rng, 4, 3).is_err());
    }

    #[test]
    fn test_words_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = words(&mut rng, 5).unwrap();
        assert_eq!(s.split(' ').count(), 5);
        assert!(words(&mut rng, 0).is_err());
    }

    #[test]
    fn test_sentences_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = sentences(&mut rng, 3).unwrap();

        assert_eq!(s.matches('.').count(), 3);
        assert!(s.chars().next().unwrap().is_uppercase());
        assert!(s.ends_with('.'));
    }

    #[test]
    fn test_paragraphs_stay_on_one_line() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = paragraphs(&mut rng, 2).unwrap();

        assert!(!s.contains('\n'));
        assert!(s.matches('.').count() >= 6);
    }

    #[test]
    fn test_uuid_is_deterministic_v4() {
        let mut rng1 = StdRng::seed_from_u64(9);
        let mut rng2 = StdRng::seed_from_u64(9);

        let a = uuid(&mut rng1);
        let b = uuid(&mut rng2);
        assert_eq!(a, b);

        let parsed = uuid::Uuid::parse_str(&a).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }
}
