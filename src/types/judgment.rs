use serde::Serialize;
use std::fmt;

/// Five ordinal sentiment bands, strongest bullish first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Judgment {
    #[serde(rename = "Strong-bullish")]
    StrongBullish,
    #[serde(rename = "Mild-bullish")]
    MildBullish,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Mild-bearish")]
    MildBearish,
    #[serde(rename = "Strong-bearish")]
    StrongBearish,
}

impl Judgment {
    pub fn label(self) -> &'static str {
        match self {
            Judgment::StrongBullish => "Strong-bullish",
            Judgment::MildBullish => "Mild-bullish",
            Judgment::Neutral => "Neutral",
            Judgment::MildBearish => "Mild-bearish",
            Judgment::StrongBearish => "Strong-bearish",
        }
    }

    /// Parses a label as written to the score log.
    ///
    /// Canonical labels match case-insensitively with `-`, `_` or a space
    /// between words. The upstream log also writes Japanese labels with a
    /// trailing probability note, e.g. `やや強気（上昇確率：60〜70%）`; only
    /// the part before the note is compared.
    pub fn from_label(raw: &str) -> Option<Judgment> {
        let head = raw
            .split(['（', '('])
            .next()
            .unwrap_or_default()
            .trim();

        match head {
            "強気" => return Some(Judgment::StrongBullish),
            "やや強気" => return Some(Judgment::MildBullish),
            "中立" => return Some(Judgment::Neutral),
            "やや弱気" => return Some(Judgment::MildBearish),
            "弱気" => return Some(Judgment::StrongBearish),
            _ => {}
        }

        let normalized = head
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect::<String>();

        match normalized.as_str() {
            "strong-bullish" => Some(Judgment::StrongBullish),
            "mild-bullish" => Some(Judgment::MildBullish),
            "neutral" => Some(Judgment::Neutral),
            "mild-bearish" => Some(Judgment::MildBearish),
            "strong-bearish" => Some(Judgment::StrongBearish),
            _ => None,
        }
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
