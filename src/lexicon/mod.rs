//! Portuguese sentiment lexicon tables.
//!
//! Static word and phrase sets used by the scoring pipeline:
//!
//! - General polarity tables (positive/negative/neutral words)
//! - Negators and intensifiers for one-token-back adjustment
//! - Per-theme keyword sets (service, product, price) for thematic attribution
//! - High-intensity phrases for the intensity bonus
//!
//! Common unaccented spellings ("otimo", "pessimo", "nao") are listed next to
//! the accented forms because survey respondents routinely type without
//! diacritics.
//!
//! # Examples
//!
//! ```
//! use sentir::lexicon::SentimentLexicon;
//!
//! let lexicon = SentimentLexicon::portuguese();
//! assert!(lexicon.is_positive("ótimo"));
//! assert!(lexicon.is_negator("não"));
//! ```

use std::collections::HashSet;

/// Words carrying positive polarity (+1 base score).
pub const POSITIVE_WORDS: &[&str] = &[
    "bom",
    "boa",
    "bons",
    "boas",
    "ótimo",
    "otimo",
    "ótima",
    "otima",
    "excelente",
    "maravilhoso",
    "maravilhosa",
    "perfeito",
    "perfeita",
    "incrível",
    "incrivel",
    "adorei",
    "amei",
    "gostei",
    "satisfeito",
    "satisfeita",
    "feliz",
    "contente",
    "recomendo",
    "eficiente",
    "rápido",
    "rapido",
    "rápida",
    "rapida",
    "qualidade",
    "agradável",
    "agradavel",
    "atencioso",
    "atenciosa",
    "prestativo",
    "prestativa",
    "fantástico",
    "fantastico",
    "sensacional",
    "confiável",
    "confiavel",
    "prático",
    "pratico",
    "útil",
    "util",
    "funciona",
    "funcionou",
    "melhor",
    "superou",
    "impecável",
    "impecavel",
    "top",
    "show",
];

/// Words carrying negative polarity (-1 base score).
pub const NEGATIVE_WORDS: &[&str] = &[
    "ruim",
    "ruins",
    "péssimo",
    "pessimo",
    "péssima",
    "pessima",
    "horrível",
    "horrivel",
    "terrível",
    "terrivel",
    "odiei",
    "detestei",
    "decepcionante",
    "decepção",
    "decepcao",
    "insatisfeito",
    "insatisfeita",
    "triste",
    "problema",
    "problemas",
    "defeito",
    "defeituoso",
    "quebrado",
    "quebrada",
    "lento",
    "lenta",
    "demorado",
    "demorada",
    "atraso",
    "atrasado",
    "caro",
    "cara",
    "abusivo",
    "abusiva",
    "enganação",
    "enganacao",
    "falso",
    "falsa",
    "fraco",
    "fraca",
    "pior",
    "reclamação",
    "reclamacao",
    "reclamar",
    "dificuldade",
    "difícil",
    "dificil",
    "complicado",
    "complicada",
    "erro",
    "falha",
    "falhou",
    "travando",
    "grosseiro",
    "grosseira",
    "descaso",
];

/// Words recognized but carrying no polarity (counted, not scored).
pub const NEUTRAL_WORDS: &[&str] = &[
    "normal",
    "regular",
    "comum",
    "médio",
    "medio",
    "média",
    "media",
    "razoável",
    "razoavel",
    "aceitável",
    "aceitavel",
    "padrão",
    "padrao",
    "básico",
    "basico",
    "simples",
];

/// Words that invert the polarity of the immediately following word.
pub const NEGATORS: &[&str] = &["não", "nao", "nunca", "jamais", "nem", "sem"];

/// Words that amplify the magnitude of the immediately following word (x1.5).
pub const INTENSIFIERS: &[&str] = &[
    "muito",
    "muita",
    "bastante",
    "extremamente",
    "super",
    "totalmente",
    "completamente",
    "realmente",
    "demais",
    "tão",
    "tao",
    "mega",
];

/// Service-theme keywords with positive polarity.
pub const SERVICE_POSITIVE: &[&str] = &[
    "atendimento excelente",
    "atendimento rápido",
    "bem atendido",
    "atencioso",
    "prestativo",
    "cordial",
    "suporte eficiente",
];

/// Service-theme keywords with negative polarity.
pub const SERVICE_NEGATIVE: &[&str] = &[
    "atendimento ruim",
    "atendimento péssimo",
    "mal atendido",
    "demora no atendimento",
    "grosseiro",
    "descaso",
    "sem suporte",
];

/// Product-theme keywords with positive polarity.
pub const PRODUCT_POSITIVE: &[&str] = &[
    "produto excelente",
    "produto ótimo",
    "boa qualidade",
    "bem embalado",
    "durável",
    "funciona bem",
    "superou expectativas",
];

/// Product-theme keywords with negative polarity.
pub const PRODUCT_NEGATIVE: &[&str] = &[
    "produto ruim",
    "produto com defeito",
    "baixa qualidade",
    "veio errado",
    "não funciona",
    "quebrado",
    "estragado",
];

/// Price-theme keywords with positive polarity.
pub const PRICE_POSITIVE: &[&str] = &[
    "preço justo",
    "bom preço",
    "barato",
    "custo benefício",
    "vale o preço",
    "em conta",
    "bom desconto",
];

/// Price-theme keywords with negative polarity.
pub const PRICE_NEGATIVE: &[&str] = &[
    "muito caro",
    "caro demais",
    "preço alto",
    "preço abusivo",
    "não vale o preço",
    "cobrança indevida",
    "taxa abusiva",
];

/// Compact positive word list for the `general` fallback theme.
pub const GENERAL_POSITIVE: &[&str] = &[
    "bom",
    "ótimo",
    "otimo",
    "excelente",
    "gostei",
    "recomendo",
    "satisfeito",
    "maravilhoso",
    "perfeito",
    "adorei",
];

/// Compact negative word list for the `general` fallback theme.
pub const GENERAL_NEGATIVE: &[&str] = &[
    "ruim",
    "péssimo",
    "pessimo",
    "horrível",
    "horrivel",
    "decepcionante",
    "insatisfeito",
    "odiei",
    "problema",
    "detestei",
];

/// Phrases that add +0.5 to the intensity bonus when present anywhere in the text.
pub const VERY_POSITIVE_PHRASES: &[&str] = &[
    "muito bom",
    "muito boa",
    "excelente",
    "perfeito",
    "maravilhoso",
    "sensacional",
    "super recomendo",
    "amei demais",
    "nota dez",
    "nota 10",
];

/// Phrases that add -0.5 to the intensity bonus when present anywhere in the text.
pub const VERY_NEGATIVE_PHRASES: &[&str] = &[
    "muito ruim",
    "péssimo",
    "pessimo",
    "horrível",
    "horrivel",
    "terrível",
    "terrivel",
    "nunca mais",
    "inaceitável",
    "inaceitavel",
    "uma vergonha",
    "não recomendo",
    "nao recomendo",
];

/// Sentiment lexicon with O(1) membership tests.
///
/// Tokens are matched case-insensitively (the sets store lowercase forms and
/// the scorer normalizes before lookup).
///
/// # Examples
///
/// ```
/// use sentir::lexicon::SentimentLexicon;
///
/// let lexicon = SentimentLexicon::portuguese();
/// assert!(lexicon.is_negative("péssimo"));
/// assert!(lexicon.is_intensifier("muito"));
/// assert!(!lexicon.is_positive("parede"));
/// ```
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    neutral: HashSet<String>,
    negators: HashSet<String>,
    intensifiers: HashSet<String>,
}

impl SentimentLexicon {
    /// Create a lexicon from custom word sets.
    ///
    /// All words are lowercased on construction.
    pub fn new<S: AsRef<str>>(
        positive: &[S],
        negative: &[S],
        neutral: &[S],
        negators: &[S],
        intensifiers: &[S],
    ) -> Self {
        fn to_set<S: AsRef<str>>(words: &[S]) -> HashSet<String> {
            words.iter().map(|w| w.as_ref().to_lowercase()).collect()
        }

        Self {
            positive: to_set(positive),
            negative: to_set(negative),
            neutral: to_set(neutral),
            negators: to_set(negators),
            intensifiers: to_set(intensifiers),
        }
    }

    /// Create the default Portuguese lexicon.
    #[must_use]
    pub fn portuguese() -> Self {
        Self::new(
            POSITIVE_WORDS,
            NEGATIVE_WORDS,
            NEUTRAL_WORDS,
            NEGATORS,
            INTENSIFIERS,
        )
    }

    /// Check membership in the positive table.
    #[must_use]
    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    /// Check membership in the negative table.
    #[must_use]
    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    /// Check membership in the neutral table.
    #[must_use]
    pub fn is_neutral(&self, token: &str) -> bool {
        self.neutral.contains(token)
    }

    /// Check membership in the negator table.
    #[must_use]
    pub fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token)
    }

    /// Check membership in the intensifier table.
    #[must_use]
    pub fn is_intensifier(&self, token: &str) -> bool {
        self.intensifiers.contains(token)
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::portuguese()
    }
}
