//! # Description Tables
//!
//! Human-readable names for talker IDs and sentence mnemonics.
//!
//! ```rust
//! use nmea0183_decoder::lookup::{self, UNKNOWN};
//!
//! assert_eq!(lookup::talker_description("GP"), "Global Positioning System (GPS)");
//! assert_eq!(lookup::sentence_description("DPT"), "Depth of Water");
//! assert_eq!(lookup::sentence_description("ZZZ"), UNKNOWN);
//! ```

/// Returned for a key that is not in a table.
pub const UNKNOWN: &str = "Unknown";

/// Describes a two character talker ID, such as `GP` or `AI`.
pub fn talker_description(talker: &str) -> &'static str {
    match talker {
        "AB" => "Independent AIS Base Station",
        "AD" => "Dependent AIS Base Station",
        "AG" => "Autopilot - General",
        "AI" => "Mobile AIS Station",
        "AN" => "AIS Aids to Navigation",
        "AP" => "Autopilot - Magnetic",
        "AR" => "AIS Receiving Station",
        "AT" => "AIS Transmitting Station",
        "AX" => "AIS Simplex Repeater",
        "BD" | "GB" => "BeiDou Navigation Satellite System",
        "BN" => "Bridge Navigational Watch Alarm System",
        "CC" => "Computer - Programmed Calculator",
        "CD" => "Digital Selective Calling (DSC)",
        "CR" => "Data Receiver",
        "CS" => "Satellite Communications",
        "CT" => "Radio-Telephone (MF/HF)",
        "CV" => "Radio-Telephone (VHF)",
        "CX" => "Scanning Receiver",
        "DE" => "DECCA Navigation",
        "DF" => "Direction Finder",
        "DU" => "Duplex Repeater Station",
        "EC" => "Electronic Chart Display & Information System (ECDIS)",
        "EP" => "Emergency Position Indicating Beacon (EPIRB)",
        "ER" => "Engine Room Monitoring Systems",
        "GA" => "Galileo Positioning System",
        "GI" => "NavIC (IRNSS)",
        "GL" => "GLONASS",
        "GN" => "Global Navigation Satellite System (GNSS)",
        "GP" => "Global Positioning System (GPS)",
        "GQ" | "QZ" => "QZSS",
        "HC" => "Heading - Magnetic Compass",
        "HE" => "Heading - North Seeking Gyro",
        "HN" => "Heading - Non North Seeking Gyro",
        "II" => "Integrated Instrumentation",
        "IN" => "Integrated Navigation",
        "LC" => "Loran C",
        "P" => "Proprietary",
        "RA" => "RADAR and/or ARPA",
        "SD" => "Sounder, Depth",
        "SN" => "Electronic Positioning System",
        "SS" => "Sounder, Scanning",
        "TI" => "Turn Rate Indicator",
        "TR" => "TRANSIT Navigation System",
        "UP" => "Microprocessor Controller",
        "VD" => "Velocity Sensor, Doppler",
        "VM" => "Velocity Sensor, Speed Log, Water, Magnetic",
        "VW" => "Velocity Sensor, Speed Log, Water, Mechanical",
        "WI" => "Weather Instruments",
        "YX" => "Transducer",
        "ZA" => "Timekeeper - Atomic Clock",
        "ZC" => "Timekeeper - Chronometer",
        "ZQ" => "Timekeeper - Quartz",
        "ZV" => "Timekeeper - Radio Update",
        _ => UNKNOWN,
    }
}

/// Describes a sentence mnemonic, such as `GGA`, or a proprietary identifier
/// such as `PSKPDPT`.
pub fn sentence_description(mnemonic: &str) -> &'static str {
    match mnemonic {
        "AAM" => "Waypoint Arrival Alarm",
        "ALR" => "Set Alarm State",
        "APB" => "Autopilot Sentence B",
        "BOD" => "Bearing - Waypoint to Waypoint",
        "BWC" => "Bearing & Distance to Waypoint - Great Circle",
        "DBK" => "Depth Below Keel",
        "DBS" => "Depth Below Surface",
        "DBT" => "Depth Below Transducer",
        "DPT" => "Depth of Water",
        "DTM" => "Datum Reference",
        "GBS" => "GNSS Satellite Fault Detection",
        "GGA" => "Global Positioning System Fix Data",
        "GLL" => "Geographic Position - Latitude/Longitude",
        "GNS" => "GNSS Fix Data",
        "GSA" => "GNSS DOP and Active Satellites",
        "GST" => "GNSS Pseudorange Noise Statistics",
        "GSV" => "GNSS Satellites in View",
        "HDG" => "Heading, Deviation & Variation",
        "HDM" => "Heading - Magnetic",
        "HDT" => "Heading - True",
        "MTW" => "Mean Temperature of Water",
        "MWD" => "Wind Direction & Speed",
        "MWV" => "Wind Speed and Angle",
        "OSD" => "Own Ship Data",
        "PSKPDPT" => "SkipperDepth Depth Sounder Data",
        "RMB" => "Recommended Minimum Navigation Information B",
        "RMC" => "Recommended Minimum Navigation Information",
        "ROT" => "Rate Of Turn",
        "RPM" => "Revolutions",
        "RSA" => "Rudder Sensor Angle",
        "RSD" => "Radar System Data",
        "RTE" => "Routes",
        "TLB" => "Target Label",
        "TLL" => "Target Latitude and Longitude",
        "TTD" => "Tracked Target Data",
        "TTM" => "Tracked Target Message",
        "TXT" => "Text Transmission",
        "VBW" => "Dual Ground/Water Speed",
        "VDM" => "AIS VHF Data-Link Message",
        "VDO" => "AIS VHF Data-Link Own-Vessel Report",
        "VDR" => "Set and Drift",
        "VHW" => "Water Speed and Heading",
        "VLW" => "Distance Traveled through Water",
        "VTG" => "Track Made Good and Ground Speed",
        "VWR" => "Relative Wind Speed and Angle",
        "WPL" => "Waypoint Location",
        "XDR" => "Transducer Measurement",
        "XTE" => "Cross-Track Error, Measured",
        "ZDA" => "Time & Date - UTC, Day, Month, Year and Local Time Zone",
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sentence, sentences::*};

    #[test]
    fn test_talker_description() {
        let cases = [
            ("GP", "Global Positioning System (GPS)"),
            ("AI", "Mobile AIS Station"),
            ("SD", "Sounder, Depth"),
            ("GB", "BeiDou Navigation Satellite System"),
            ("BD", "BeiDou Navigation Satellite System"),
            ("gp", UNKNOWN),
            ("", UNKNOWN),
            ("GPS", UNKNOWN),
        ];

        for (input, expected) in cases {
            let result = talker_description(input);
            assert_eq!(result, expected, "Failed: {input:?}\n\t{result:?}");
        }
    }

    #[test]
    fn test_every_supported_sentence_is_described() {
        let mnemonics = [
            DBK::HEADER.mnemonic(),
            DBT::HEADER.mnemonic(),
            DPT::HEADER.mnemonic(),
            GGA::HEADER.mnemonic(),
            GLL::HEADER.mnemonic(),
            HDG::HEADER.mnemonic(),
            HDM::HEADER.mnemonic(),
            HDT::HEADER.mnemonic(),
            MTW::HEADER.mnemonic(),
            MWD::HEADER.mnemonic(),
            MWV::HEADER.mnemonic(),
            OSD::HEADER.mnemonic(),
            PSKPDPT::HEADER.mnemonic(),
            RMC::HEADER.mnemonic(),
            ROT::HEADER.mnemonic(),
            RSD::HEADER.mnemonic(),
            RTE::HEADER.mnemonic(),
            TLB::HEADER.mnemonic(),
            TTD::HEADER.mnemonic(),
            TTM::HEADER.mnemonic(),
            VBW::HEADER.mnemonic(),
            VDM::HEADER.mnemonic(),
            VDO::HEADER.mnemonic(),
            VHW::HEADER.mnemonic(),
            VLW::HEADER.mnemonic(),
            VTG::HEADER.mnemonic(),
            WPL::HEADER.mnemonic(),
            XDR::HEADER.mnemonic(),
            ZDA::HEADER.mnemonic(),
        ];

        for mnemonic in mnemonics {
            let result = sentence_description(mnemonic);
            assert_ne!(result, UNKNOWN, "Failed: {mnemonic:?}\n\t{result:?}");
        }
    }

    #[test]
    fn test_unknown_sentence() {
        for input in ["", "gga", "GG", "$GPGGA", "PSKP"] {
            let result = sentence_description(input);
            assert_eq!(result, UNKNOWN, "Failed: {input:?}\n\t{result:?}");
        }
    }
}
