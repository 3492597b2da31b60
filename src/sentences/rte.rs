#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Decoded, FieldDecoder, FieldDefault, Header, Sentence, TokenCount, sentences::RouteMode};

/// RTE - Routes
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rte_routes>
///
/// ```text
///         1   2   3 4    5           x    n
///         |   |   | |    |           |    |
///  $--RTE,x.x,x.x,a,c--c,c--c, ..... c--c*hh<CR><LF>
/// ```
///
/// Every token after the route identifier is a waypoint identifier. Long routes
/// are split over several sentences.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RTE {
    /// Total number of sentences for the route
    pub total_sentences: u8,
    /// Number of this sentence, starting at 1
    pub sentence_number: u8,
    /// Complete route or working route
    pub mode: RouteMode,
    /// Route identifier
    pub route_id: String,
    /// Waypoint identifiers in route order
    pub waypoints: Vec<String>,
}

impl Sentence for RTE {
    const HEADER: Header = Header::Talker("RTE");
    const TOKENS: TokenCount = TokenCount::AtLeast(5);
    const FIELDS: &'static [&'static str] = &[
        "total_sentences",
        "sentence_number",
        "mode",
        "route_id",
        "waypoints",
    ];

    fn decode(line: &str) -> Decoded<Self> {
        let mut decoder = FieldDecoder::for_sentence::<Self>(line);

        let total_sentences = decoder.decode_or_default();
        let sentence_number = decoder.decode_or_default();
        let mode = decoder.decode_or_default();
        let route_id = decoder.decode_or_default();
        let waypoints = decoder.decode_repeated(
            decoder.remaining(),
            |decoder| decoder.parse::<String>(),
            String::field_default,
        );

        decoder.finish(RTE {
            total_sentences,
            sentence_number,
            mode,
            route_id,
            waypoints,
        })
    }
}
