#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Decoded, FieldDecoder, Header, Sentence, TokenCount};

/// TLB - Target Label
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_tlb_target_label>
///
/// ```text
///         1   2    3   4          n
///         |   |    |   |          |
///  $--TLB,x.x,c--c,x.x,c--c,...  *hh<CR><LF>
/// ```
///
/// Fields 1 and 2 repeat once per labelled target.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TLB {
    /// Target labels in transmission order
    pub labels: Vec<TargetLabel>,
}

/// A target number and the label the operator assigned to it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TargetLabel {
    /// Target number, as reported by TTM and TTD
    pub target_number: u16,
    /// Label assigned to the target
    pub label: String,
}

impl Default for TargetLabel {
    fn default() -> Self {
        TargetLabel {
            target_number: 0,
            label: String::from("-"),
        }
    }
}

impl Sentence for TLB {
    const HEADER: Header = Header::Talker("TLB");
    const TOKENS: TokenCount = TokenCount::AtLeast(3);
    const FIELDS: &'static [&'static str] = &["labels"];

    fn decode(line: &str) -> Decoded<Self> {
        let mut decoder = FieldDecoder::for_sentence::<Self>(line);

        let labels = decoder.decode_repeated(
            decoder.remaining() / 2,
            |decoder| {
                let target_number = decoder.parse();
                let label = decoder.parse();

                Some(TargetLabel {
                    target_number: target_number?,
                    label: label?,
                })
            },
            TargetLabel::default,
        );

        decoder.finish(TLB { labels })
    }
}
