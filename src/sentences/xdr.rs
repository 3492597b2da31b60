#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Decoded, FieldDecoder, FieldDefault, Header, Sentence, TokenCount};

/// XDR - Transducer Measurement
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_xdr_transducer_measurement>
///
/// ```text
///         1 2   3 4            n
///         | |   | |            |
///  $--XDR,a,x.x,a,c--c, ..... *hh<CR><LF>
/// ```
///
/// Fields 1 to 4 repeat once per measurement.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct XDR {
    /// Measurements in transmission order
    pub measurements: Vec<Measurement>,
}

/// One transducer reading of an [`XDR`] sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Transducer type, such as `C` for temperature or `P` for pressure
    pub transducer_type: char,
    /// Measured value
    pub value: f64,
    /// Units of measure, such as `C` for degrees Celsius or `B` for bars
    pub units: char,
    /// Transducer name
    pub name: String,
}

impl Default for Measurement {
    fn default() -> Self {
        Measurement {
            transducer_type: char::field_default(),
            value: f64::field_default(),
            units: char::field_default(),
            name: String::field_default(),
        }
    }
}

impl Sentence for XDR {
    const HEADER: Header = Header::Talker("XDR");
    const TOKENS: TokenCount = TokenCount::AtLeast(5);
    const FIELDS: &'static [&'static str] = &["measurements"];

    fn decode(line: &str) -> Decoded<Self> {
        let mut decoder = FieldDecoder::for_sentence::<Self>(line);

        let measurements = decoder.decode_repeated(
            decoder.remaining() / 4,
            |decoder| {
                let transducer_type = decoder.parse();
                let value = decoder.parse();
                let units = decoder.parse();
                let name = decoder.parse();

                Some(Measurement {
                    transducer_type: transducer_type?,
                    value: value?,
                    units: units?,
                    name: name?,
                })
            },
            Measurement::default,
        );

        decoder.finish(XDR { measurements })
    }
}
