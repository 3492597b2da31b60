//! # NMEA 0183 Sentences
//!
//! One strongly typed record per supported sentence, each implementing
//! [`Sentence`], plus the single-character enumerations they share and the
//! [`NmeaSentence`] dispatcher.

mod dbk;
mod dbt;
mod dpt;
mod gga;
mod gll;
mod hdg;
mod hdm;
mod hdt;
mod mtw;
mod mwd;
mod mwv;
mod osd;
mod pskpdpt;
mod rmc;
mod rot;
mod rsd;
mod rte;
mod tlb;
mod ttd;
mod ttm;
mod vbw;
mod vdm;
mod vhw;
mod vlw;
mod vtg;
mod wpl;
mod xdr;
mod zda;

pub use dbk::DBK;
pub use dbt::DBT;
pub use dpt::DPT;
pub use gga::GGA;
pub use gll::GLL;
pub use hdg::HDG;
pub use hdm::HDM;
pub use hdt::HDT;
pub use mtw::MTW;
pub use mwd::MWD;
pub use mwv::MWV;
pub use osd::OSD;
pub use pskpdpt::PSKPDPT;
pub use rmc::RMC;
pub use rot::ROT;
pub use rsd::RSD;
pub use rte::RTE;
pub use tlb::{TLB, TargetLabel};
pub use ttd::TTD;
pub use ttm::TTM;
pub use vbw::VBW;
pub use vdm::{VDM, VDO};
pub use vhw::VHW;
pub use vlw::VLW;
pub use vtg::VTG;
pub use wpl::WPL;
pub use xdr::{Measurement, XDR};
pub use zda::ZDA;

use nom::{
    AsChar, Input, Parser,
    bytes::complete::take_till,
    error::ParseError,
};

use crate::{Decoded, Error, FieldDefault, IResult, NmeaParse, Sentence};

macro_rules! nmea_sentences {
    (
        $(
            $(#[$variant_meta:meta])*
            $variant:ident
        ),* $(,)?
    ) => {
        /// A unified enum representing all supported NMEA 0183 sentence types.
        ///
        /// Each variant wraps the corresponding strongly-typed record. Use
        /// [`NmeaSentence::decode`] to decode a line whose type is not known in
        /// advance.
        ///
        /// ```rust
        /// use nmea0183_decoder::sentences::NmeaSentence;
        ///
        /// let decoded = NmeaSentence::decode("$GPHDT,274.07,T*03").unwrap();
        /// assert!(decoded.is_valid());
        ///
        /// match decoded.sentence {
        ///     NmeaSentence::HDT(hdt) => assert_eq!(hdt.heading_true, 274.07),
        ///     _ => unreachable!(),
        /// }
        ///
        /// // This will fail - unrecognized sentence type
        /// assert!(NmeaSentence::decode("$GPUNK,some,data,here").is_err());
        /// ```
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, PartialEq)]
        pub enum NmeaSentence {
            $(
                $(#[$variant_meta])*
                $variant($variant),
            )*
        }

        impl NmeaSentence {
            /// Decodes a line of any supported sentence type.
            ///
            /// The type is selected from the identifier in the first token; the
            /// chosen parser then never fails. An identifier no parser claims is
            /// an [`Error::UnrecognizedMessage`] carrying that token.
            pub fn decode(
                line: &str,
            ) -> Result<Decoded<Self>, Error<&str, nom::error::Error<&str>>> {
                let identifier = sentence_identifier(line);

                $(
                    if <$variant as Sentence>::HEADER.matches(identifier) {
                        return Ok(<$variant as Sentence>::decode(line).map(Self::$variant));
                    }
                )*

                log::trace!("unrecognized sentence identifier {identifier:?}");
                Err(Error::UnrecognizedMessage(identifier))
            }

            /// The mnemonic (or proprietary identifier) of the sentence type.
            pub fn mnemonic(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$variant as Sentence>::HEADER.mnemonic(),)*
                }
            }
        }
    };
}

nmea_sentences! {
    /// Depth Below Keel
    DBK,
    /// Depth Below Transducer
    DBT,
    /// Depth of Water
    DPT,
    /// Global Positioning System Fix Data
    GGA,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// Heading, Deviation & Variation
    HDG,
    /// Heading - Magnetic
    HDM,
    /// Heading - True
    HDT,
    /// Mean Temperature of Water
    MTW,
    /// Wind Direction & Speed
    MWD,
    /// Wind Speed and Angle
    MWV,
    /// Own Ship Data
    OSD,
    /// SkipperDepth depth sounder data
    PSKPDPT,
    /// Recommended Minimum Navigation Information
    RMC,
    /// Rate Of Turn
    ROT,
    /// Radar System Data
    RSD,
    /// Routes
    RTE,
    /// Target Label
    TLB,
    /// Tracked Target Data
    TTD,
    /// Tracked Target Message
    TTM,
    /// Dual Ground/Water Speed
    VBW,
    /// AIS VHF Data-Link Message
    VDM,
    /// AIS VHF Data-Link Own-Vessel Report
    VDO,
    /// Water Speed and Heading
    VHW,
    /// Distance Traveled through Water
    VLW,
    /// Track made good and Ground speed
    VTG,
    /// Waypoint Location
    WPL,
    /// Transducer Measurement
    XDR,
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA,
}

// The first token of a line, without checksum or line ending.
fn sentence_identifier(line: &str) -> &str {
    let result: IResult<&str, &str> = take_till(|c: char| c == ',' || c == '*').parse(line);
    result.map_or(line, |(_, identifier)| identifier)
}

macro_rules! char_enum {
    (
        @define
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),+
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// The single-character code of the variant.
            pub fn code(&self) -> char {
                match self {
                    $(Self::$variant => $char,)+
                }
            }
        }

        impl FieldDefault for $name {
            fn field_default() -> Self {
                Self::default()
            }
        }
    };

    // Any character not listed maps to the residual variant.
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),+ $(,)?
        } else $residual:ident
    ) => {
        char_enum! {
            @define
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $char => $variant
                ),+
            }
        }

        impl<I, E> NmeaParse<I, E> for $name
        where
            I: Input,
            <I as Input>::Item: AsChar,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::character::complete::anychar
                    .map(|c| match c {
                        $($char => Self::$variant,)+
                        _ => Self::$residual,
                    })
                    .parse(i)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),+ $(,)?
        }
    ) => {
        char_enum! {
            @define
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $char => $variant
                ),+
            }
        }

        impl<I, E> NmeaParse<I, E> for $name
        where
            I: Input,
            <I as Input>::Item: AsChar,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::combinator::map_opt(nom::character::complete::anychar, |c| match c {
                    $($char => Some(Self::$variant),)+
                    _ => None,
                })
                .parse(i)
            }
        }
    };
}

char_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        #[default]
        'V' => Invalid,
    }
}

char_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK Float mode
        'F' => FloatRtk,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Data Not Valid
        #[default]
        'N' => DataNotValid,
        /// P - Precise
        'P' => Precise,
        /// R - RTK Integer mode
        'R' => FixedRtk,
        /// S - Simulated Mode
        'S' => Simulator,
    }
}

char_enum! {
    /// Route message mode of [`RTE`]
    pub enum RouteMode {
        /// C - Complete route, all waypoints
        #[default]
        'C' => Complete,
        /// W - Working route, first listed waypoint is the one being navigated from
        'W' => Working,
    }
}

char_enum! {
    /// Wind angle reference of [`MWV`]
    pub enum WindReference {
        /// T - Theoretical, calculated from the vessel's movement
        'T' => Theoretical,
        /// R - Relative to the vessel's heading, and any other letter
        #[default]
        'R' => Relative,
    } else Relative
}

char_enum! {
    /// Wind speed units of [`MWV`]
    pub enum WindSpeedUnits {
        /// K - Kilometers per hour
        'K' => KilometersPerHour,
        /// N - Knots
        'N' => Knots,
        /// M - Meters per second, and any other letter
        #[default]
        'M' => MetersPerSecond,
    } else MetersPerSecond
}

char_enum! {
    /// Bearing and course reference of [`TTM`]
    pub enum Reference {
        /// T - True
        'T' => True,
        /// R - Relative, and any other letter
        #[default]
        'R' => Relative,
    } else Relative
}

char_enum! {
    /// Speed and distance units of [`TTM`]
    pub enum DistanceUnits {
        /// K - Kilometers
        'K' => Kilometers,
        /// N - Nautical miles
        'N' => NauticalMiles,
        /// S - Statute miles, and any other letter
        #[default]
        'S' => StatuteMiles,
    } else StatuteMiles
}

char_enum! {
    /// Target status of [`TTM`]
    pub enum TargetStatus {
        /// L - Lost, tracked target has been lost
        'L' => Lost,
        /// Q - Query, target in the process of acquisition
        'Q' => Query,
        /// T - Tracking, and any other letter
        #[default]
        'T' => Tracking,
    } else Tracking
}

char_enum! {
    /// Type of target acquisition of [`TTM`]
    pub enum Acquisition {
        /// A - Automatic
        'A' => Automatic,
        /// M - Manual
        'M' => Manual,
        /// R - Reported, and any other letter
        #[default]
        'R' => Reported,
    } else Reported
}

char_enum! {
    /// Course and speed reference system of [`OSD`]
    pub enum ReferenceSystem {
        /// B - Bottom tracking log
        'B' => BottomTrack,
        /// M - Manually entered
        #[default]
        'M' => Manual,
        /// P - Positioning system ground reference
        'P' => Positioning,
        /// R - Radar tracking of a fixed target
        'R' => Radar,
        /// W - Water referenced
        'W' => WaterReferenced,
    }
}

char_enum! {
    /// Speed units of [`OSD`]
    pub enum SpeedUnits {
        /// K - Kilometers per hour
        'K' => KilometersPerHour,
        /// N - Knots
        #[default]
        'N' => Knots,
        /// S - Statute miles per hour
        'S' => StatuteMilesPerHour,
    }
}

char_enum! {
    /// Range units of [`RSD`]
    pub enum RangeUnits {
        /// K - Kilometers
        'K' => Kilometers,
        /// N - Nautical miles
        #[default]
        'N' => NauticalMiles,
        /// S - Statute miles
        'S' => StatuteMiles,
    }
}

char_enum! {
    /// Display rotation of [`RSD`]
    pub enum DisplayRotation {
        /// C - Course up, course-over-ground up, degrees true
        'C' => CourseUp,
        /// H - Head up, ship's heading 0 degrees
        'H' => HeadUp,
        /// N - North up, true north is 0 degrees
        #[default]
        'N' => NorthUp,
    }
}

/// GPS quality indicator of [`GGA`]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GpsQuality {
    /// 0 - Fix not available
    #[default]
    NotValid,
    /// 1 - GPS fix
    GpsFix,
    /// 2 - Differential GPS fix
    DifferentialFix,
    /// 3 - PPS fix
    PpsFix,
    /// 4 - Real Time Kinematic
    RealTimeKinematic,
}

impl TryFrom<u8> for GpsQuality {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GpsQuality::NotValid),
            1 => Ok(GpsQuality::GpsFix),
            2 => Ok(GpsQuality::DifferentialFix),
            3 => Ok(GpsQuality::PpsFix),
            4 => Ok(GpsQuality::RealTimeKinematic),
            _ => Err(value),
        }
    }
}

impl<'a> NmeaParse<&'a str> for GpsQuality {
    fn parse(i: &'a str) -> IResult<&'a str, Self> {
        let (rest, value) = nom::character::complete::u8(i)?;
        let quality =
            GpsQuality::try_from(value).or(Err(nom::Err::Error(Error::InvalidField(i))))?;

        Ok((rest, quality))
    }
}

impl FieldDefault for GpsQuality {
    fn field_default() -> Self {
        GpsQuality::NotValid
    }
}
