//! Stop-word sets for vocabulary exclusion
//!
//! Terms in the active set never enter the TF-IDF vocabulary. The default
//! set is Spanish, matching the language of the upstream catalog; an English
//! set is provided for English-language sources. Matching is
//! case-insensitive (the tokenizer lowercases before lookup).

use std::collections::HashSet;

/// Common Spanish function words (articles, prepositions, pronouns, and the
/// high-frequency forms of ser/estar/haber/tener).
const SPANISH: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "más", "mas", "pero", "sus", "le", "ya", "o",
    "este", "sí", "si", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también",
    "me", "hasta", "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos", "uno",
    "les", "ni", "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí", "antes",
    "algunos", "qué", "unos", "yo", "otro", "otras", "otra", "él", "tanto", "esa", "estos",
    "mucho", "quienes", "nada", "muchos", "cual", "cuál", "poco", "ella", "estar", "estas",
    "algunas", "algo", "nosotros", "mi", "mis", "tú", "tu", "te", "ti", "tus", "ellas",
    "nosotras", "vosotros", "vosotras", "os", "mío", "mía", "míos", "mías", "tuyo", "tuya",
    "tuyos", "tuyas", "suyo", "suya", "suyos", "suyas", "nuestro", "nuestra", "nuestros",
    "nuestras", "vuestro", "vuestra", "vuestros", "vuestras", "esos", "esas", "estoy", "estás",
    "está", "estamos", "estáis", "están", "esté", "estés", "estemos", "estéis", "estén",
    "estaba", "estabas", "estábamos", "estaban", "estuve", "estuvo", "estuvimos", "estuvieron",
    "estado", "estada", "estados", "estadas", "soy", "eres", "es", "somos", "sois", "son",
    "sea", "seas", "seamos", "sean", "era", "eras", "éramos", "eran", "fui", "fuiste", "fue",
    "fuimos", "fueron", "sido", "ser", "he", "has", "ha", "hemos", "habéis", "han", "haya",
    "hayas", "hayamos", "hayan", "había", "habías", "habíamos", "habían", "hube", "hubo",
    "hubimos", "hubieron", "habido", "haber", "tengo", "tienes", "tiene", "tenemos", "tenéis",
    "tienen", "tenga", "tengas", "tengamos", "tengan", "tenía", "tenías", "teníamos", "tenían",
    "tuve", "tuvo", "tuvimos", "tuvieron", "tenido", "tener",
];

/// Common English function words.
const ENGLISH: &[&str] = &[
    "a", "an", "the", "is", "it", "in", "on", "of", "to", "and", "or", "for", "with", "this",
    "that", "be", "are", "was", "were", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "shall", "not", "no",
    "but", "if", "at", "by", "from", "as", "into", "about", "up", "out", "so", "its", "you",
    "your", "i", "my", "we", "our", "they", "them", "their", "he", "she", "his", "her", "who",
    "what", "when", "where", "which", "there", "here", "all", "any", "both", "each", "more",
    "most", "other", "some", "such", "only", "own", "same", "than", "too", "very", "just",
];

/// Set of terms excluded from the vocabulary
///
/// Stored lowercased; lookup is O(1).
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a set from custom words (lowercased on the way in).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The Spanish set used for the upstream catalog.
    pub fn spanish() -> Self {
        Self::new(SPANISH.iter().copied())
    }

    /// An English set for English-language sources.
    pub fn english() -> Self {
        Self::new(ENGLISH.iter().copied())
    }

    /// An empty set; every token enters the vocabulary.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether `term` is excluded. Expects a lowercased token.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
