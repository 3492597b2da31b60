#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Sentence};

#[cfg(feature = "ais")]
use crate::{AisError, ais::AisMessage};

/// VDM - AIS VHF Data-Link Message
///
/// <https://gpsd.gitlab.io/gpsd/AIVDM.html>
///
/// ```text
///         1 2 3 4 5    6
///         | | | | |    |
///  !--VDM,x,x,x,a,s--s,x*hh<CR><LF>
/// ```
///
/// Reports received from other vessels. The payload is the six-bit armored AIS
/// message; see [`VDM::decode_ais`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("VDM"))]
pub struct VDM {
    /// Number of sentences the message is split over
    pub fragment_count: u8,
    /// Number of this sentence, starting at 1
    pub fragment_number: u8,
    /// Sequential message ID linking the fragments of one message
    pub message_id: u8,
    /// Radio channel, `A` or `B`
    pub channel: char,
    /// Six-bit armored payload
    pub payload: String,
    /// Number of fill bits padding the payload, 0 to 5
    pub fill_bits: u8,
}

/// VDO - AIS VHF Data-Link Own-Vessel Report
///
/// Same layout as [`VDM`], carrying the reports of the receiving vessel itself.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Sentence)]
#[nmea(mnemonic("VDO"))]
pub struct VDO {
    /// Number of sentences the message is split over
    pub fragment_count: u8,
    /// Number of this sentence, starting at 1
    pub fragment_number: u8,
    /// Sequential message ID linking the fragments of one message
    pub message_id: u8,
    /// Radio channel, `A` or `B`
    pub channel: char,
    /// Six-bit armored payload
    pub payload: String,
    /// Number of fill bits padding the payload, 0 to 5
    pub fill_bits: u8,
}

#[cfg(feature = "ais")]
impl VDM {
    /// Decodes the payload of a single-fragment message.
    ///
    /// Multi-fragment messages must be reassembled by the caller, who can then
    /// pass the concatenated payloads to [`AisMessage::decode`].
    ///
    /// ```rust
    /// use nmea0183_decoder::{Sentence, ais::AisMessage, sentences::VDM};
    ///
    /// let vdm = VDM::decode("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C").sentence;
    /// let Ok(AisMessage::PositionReport(report)) = vdm.decode_ais() else {
    ///     panic!("expected a position report");
    /// };
    /// assert_eq!(report.mmsi, 477553000);
    /// ```
    pub fn decode_ais(&self) -> Result<AisMessage, AisError> {
        AisMessage::decode(&self.payload)
    }
}

#[cfg(feature = "ais")]
impl VDO {
    /// Decodes the payload of a single-fragment own-vessel report.
    pub fn decode_ais(&self) -> Result<AisMessage, AisError> {
        AisMessage::decode(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vdm_decoding() {
        let decoded = VDM::decode("!AIVDM,1,1,1,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C");
        assert!(decoded.is_valid(), "Failed: {decoded:?}");

        let vdm = decoded.sentence;
        assert_eq!((vdm.fragment_count, vdm.fragment_number), (1, 1));
        assert_eq!(vdm.message_id, 1);
        assert_eq!(vdm.channel, 'B');
        assert_eq!(vdm.payload, "177KQJ5000G?tO`K>RA1wUbN0TKH");
        assert_eq!(vdm.fill_bits, 0);
    }

    #[test]
    fn test_vdm_blank_message_id() {
        let decoded = VDM::decode("!AIVDM,1,1,,A,13u?etPv2;0n:dDPwUM1U1Cb069D,0*24");

        assert_eq!(decoded.validity.failed_fields().collect::<Vec<_>>(), ["message_id"]);
        assert_eq!(decoded.sentence.channel, 'A');
    }

    #[test]
    fn test_vdo_header() {
        let decoded = VDO::decode("!AIVDO,1,1,,A,B5NJ;PP005l4ot5Isbl03wsUkP06,0*76");
        assert_eq!(decoded.sentence.payload, "B5NJ;PP005l4ot5Isbl03wsUkP06");

        let decoded = VDO::decode("!AIVDM,1,1,,A,B5NJ;PP005l4ot5Isbl03wsUkP06,0*76");
        assert!(decoded.validity.is_all_failed());
        assert_eq!(decoded.sentence.payload, "-");
    }

    #[cfg(feature = "ais")]
    #[test]
    fn test_vdm_decode_ais() {
        use crate::ais::{AisMessage, NavigationStatus};

        let vdm = VDM::decode("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C").sentence;
        let result = vdm.decode_ais();

        let Ok(AisMessage::PositionReport(report)) = &result else {
            panic!("Failed: {result:?}");
        };
        assert_eq!(report.mmsi, 477553000);
        assert_eq!(report.navigation_status, NavigationStatus::Moored);

        let vdo = VDO::decode("!AIVDO,1,1,,A,B5NJ;PP005l4ot5Isbl03wsUkP06,0*76").sentence;
        let result = vdo.decode_ais();
        assert!(
            matches!(result, Ok(AisMessage::ClassBPositionReport(_))),
            "Failed: {result:?}"
        );
    }
}
