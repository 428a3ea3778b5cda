//! Phrase pools keyed by emotion label.
//!
//! Pools are immutable once built.  The neutral "greeting excluded" view is a
//! borrowed sub-slice, never a modified copy.

use std::collections::BTreeMap;

use crate::emotion::EmotionLabel;

/// Configuration key of the fallback pool.
pub const DEFAULT_POOL_KEY: &str = "default";

// ---------------------------------------------------------------------------
// PhrasePool
// ---------------------------------------------------------------------------

/// An ordered list of candidate utterances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhrasePool {
    phrases: Vec<String>,
}

impl PhrasePool {
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// Every phrase, in configured order.
    pub fn all(&self) -> &[String] {
        &self.phrases
    }

    /// Every phrase except the first.  Empty when the pool has at most one
    /// entry.
    ///
    /// ```
    /// use emotion_kiosk::reaction::PhrasePool;
    ///
    /// let pool = PhrasePool::new(vec!["hola".into(), "otra vez".into()]);
    /// assert_eq!(pool.without_greeting(), ["otra vez".to_string()]);
    /// assert!(PhrasePool::new(vec!["hola".into()]).without_greeting().is_empty());
    /// ```
    pub fn without_greeting(&self) -> &[String] {
        self.phrases.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PhraseBook
// ---------------------------------------------------------------------------

/// One pool per label plus the `default` fallback pool.
#[derive(Debug, Clone, Default)]
pub struct PhraseBook {
    pools: BTreeMap<EmotionLabel, PhrasePool>,
    default: PhrasePool,
}

impl PhraseBook {
    /// Build from the `[phrases]` configuration table.
    ///
    /// Keys are matched case-insensitively against the label set and
    /// `"default"`; anything else is logged and ignored.
    pub fn from_config(table: &BTreeMap<String, Vec<String>>) -> Self {
        let mut book = Self::default();

        for (key, phrases) in table {
            let pool = PhrasePool::new(phrases.clone());
            if key.trim().eq_ignore_ascii_case(DEFAULT_POOL_KEY) {
                book.default = pool;
            } else if let Some(label) = EmotionLabel::from_key(key) {
                book.pools.insert(label, pool);
            } else {
                log::warn!("phrases: ignoring pool for unknown label {key:?}");
            }
        }

        if book.default.is_empty() {
            log::warn!("phrases: no `default` pool configured");
        }

        book
    }

    /// Pool configured for `label`, or the `default` pool when the label has
    /// none.
    pub fn pool_for(&self, label: EmotionLabel) -> &PhrasePool {
        self.pools.get(&label).unwrap_or(&self.default)
    }

    pub fn default_pool(&self) -> &PhrasePool {
        &self.default
    }

    /// `true` when `label` has its own pool.
    pub fn has_pool(&self, label: EmotionLabel) -> bool {
        self.pools.contains_key(&label)
    }
}

// ---------------------------------------------------------------------------
// Built-in pools
// ---------------------------------------------------------------------------

/// The stock Spanish phrase table written into a fresh `settings.toml`.
pub fn default_phrase_table() -> BTreeMap<String, Vec<String>> {
    let entries: [(&str, &[&str]); 8] = [
        (
            "happy",
            &[
                "¡Me alegra verte feliz!",
                "Tu sonrisa mejora mi día.",
                "Qué felicidad verte así.",
            ],
        ),
        (
            "sad",
            &[
                "Parece que estás triste, estoy aquí para ti.",
                "Si necesitas hablar, estoy listo para escucharte.",
                "No estás solo, estoy contigo.",
            ],
        ),
        (
            "angry",
            &[
                "Respira profundo, todo estará bien.",
                "Sé que estás molesto, pero estoy aquí para ayudarte.",
                "Calma, juntos podemos solucionarlo.",
            ],
        ),
        (
            "neutral",
            &[
                "Hola, ¿cómo estás hoy?",
                "Recuerda que estoy aquí para ayudarte.",
                "¿En qué puedo ayudarte hoy?",
            ],
        ),
        (
            "surprised",
            &[
                "¡Wow! ¿Qué te sorprendió?",
                "Parece que algo inesperado pasó.",
                "Esa cara me dice que viste algo interesante.",
            ],
        ),
        (
            "disgusted",
            &[
                "¿Algo no te gusta? Puedes decírmelo.",
                "Tu cara lo dice todo, ¿qué pasó?",
                "Parece que viste algo desagradable.",
            ],
        ),
        (
            "fearful",
            &[
                "No tengas miedo, estoy contigo.",
                "Todo estará bien, estoy aquí para ayudarte.",
                "Puedes confiar en mí.",
            ],
        ),
        (DEFAULT_POOL_KEY, &["Hola, ¿cómo estás?"]),
    ];

    entries
        .iter()
        .map(|(key, phrases)| {
            (
                key.to_string(),
                phrases.iter().map(|p| p.to_string()).collect(),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_table_covers_every_label() {
        let book = PhraseBook::from_config(&default_phrase_table());
        for label in EmotionLabel::ALL {
            assert!(book.has_pool(label), "missing pool for {label}");
            assert_eq!(book.pool_for(label).len(), 3);
        }
        assert_eq!(book.default_pool().all(), ["Hola, ¿cómo estás?".to_string()]);
    }

    #[test]
    fn neutral_greeting_is_first_entry() {
        let book = PhraseBook::from_config(&default_phrase_table());
        let neutral = book.pool_for(EmotionLabel::Neutral);
        assert_eq!(neutral.all()[0], "Hola, ¿cómo estás hoy?");
        assert!(!neutral
            .without_greeting()
            .contains(&"Hola, ¿cómo estás hoy?".to_string()));
        assert_eq!(neutral.without_greeting().len(), 2);
    }

    #[test]
    fn missing_label_falls_back_to_default() {
        let mut table = BTreeMap::new();
        table.insert("default".to_string(), vec!["fallback".to_string()]);
        let book = PhraseBook::from_config(&table);
        assert!(!book.has_pool(EmotionLabel::Angry));
        assert_eq!(book.pool_for(EmotionLabel::Angry).all(), ["fallback".to_string()]);
    }

    #[test]
    fn unknown_keys_are_ignored_and_keys_are_case_insensitive() {
        let mut table = BTreeMap::new();
        table.insert("Bored".to_string(), vec!["zzz".to_string()]);
        table.insert("HAPPY".to_string(), vec!["yay".to_string()]);
        let book = PhraseBook::from_config(&table);
        assert_eq!(book.pool_for(EmotionLabel::Happy).all(), ["yay".to_string()]);
        assert!(book.default_pool().is_empty());
    }

    #[test]
    fn without_greeting_of_empty_pool_is_empty() {
        assert!(PhrasePool::default().without_greeting().is_empty());
    }
}
