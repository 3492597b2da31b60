#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Decoded, FieldDecoder, Header, Sentence, TokenCount,
    track::{Track, decode_tracks},
};

/// TTD - Tracked Target Data
///
/// ```text
///         1  2  3 4    5
///         |  |  | |    |
///  !--TTD,hh,hh,x,s--s,x*hh<CR><LF>
/// ```
///
/// Radar tracks encapsulated in six-bit armored form, several targets per
/// sentence. See [`track`](crate::track) for the payload layout.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TTD {
    /// Total number of sentences for this message
    pub total_sentences: u8,
    /// Number of this sentence, starting at 1
    pub sentence_number: u8,
    /// Sequential message identifier
    pub sequence_id: u8,
    /// Decoded track entries
    pub tracks: Vec<Track>,
    /// Number of fill bits padding the payload
    pub fill_bits: u8,
}

impl Sentence for TTD {
    const HEADER: Header = Header::Talker("TTD");
    const TOKENS: TokenCount = TokenCount::AtLeast(6);
    const FIELDS: &'static [&'static str] = &[
        "total_sentences",
        "sentence_number",
        "sequence_id",
        "tracks",
        "fill_bits",
    ];

    fn decode(line: &str) -> Decoded<Self> {
        let mut decoder = FieldDecoder::for_sentence::<Self>(line);

        let total_sentences = decoder.decode_or_default();
        let sentence_number = decoder.decode_or_default();
        let sequence_id = decoder.decode_or_default();
        let tracks = decoder
            .parse::<String>()
            .and_then(|data| decode_tracks(&data).ok());
        let tracks = decoder.accept(tracks, Vec::new());
        let fill_bits = decoder.decode_or_default();

        decoder.finish(TTD {
            total_sentences,
            sentence_number,
            sequence_id,
            tracks,
            fill_bits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::TrackStatus;

    #[test]
    fn test_ttd_decoding() {
        let decoded = TTD::decode("!RATTD,01,01,1,0000000000000000000000000000ww,0*3D");

        // Two entries, the second ending in an all-ones correlation number.
        let ttd = &decoded.sentence;
        assert!(decoded.is_valid(), "Failed: {decoded:?}");
        assert_eq!((ttd.total_sentences, ttd.sentence_number), (1, 1));
        assert_eq!(ttd.tracks.len(), 2);
        assert_eq!(ttd.tracks[0].status, TrackStatus::NonTracking);
        assert_eq!(ttd.tracks[1].correlation, 0xFF);
    }

    #[test]
    fn test_ttd_bad_payload() {
        let cases = ["$RATTD,1,1,0,00000000000000,0", "$RATTD,1,1,0,,0"];

        for input in cases {
            let decoded = TTD::decode(input);
            assert_eq!(
                decoded.validity.failed_fields().collect::<Vec<_>>(),
                ["tracks"],
                "Failed: {input:?}\n\t{decoded:?}"
            );
            assert!(decoded.sentence.tracks.is_empty());
        }
    }

    #[test]
    fn test_ttd_too_short() {
        let decoded = TTD::decode("$RATTD,1,1,0,000000000000000");
        assert!(decoded.validity.is_all_failed());
        assert_eq!(decoded.validity.len(), 5);
    }
}
