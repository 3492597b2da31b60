#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

u8_enum! {
    /// Navigational status of a class A station.
    pub enum NavigationStatus {
        /// 0 - Under way using engine
        0 => UnderWayUsingEngine,
        /// 1 - At anchor
        1 => AtAnchor,
        /// 2 - Not under command
        2 => NotUnderCommand,
        /// 3 - Restricted manoeuverability
        3 => RestrictedManoeuverability,
        /// 4 - Constrained by her draught
        4 => ConstrainedByDraught,
        /// 5 - Moored
        5 => Moored,
        /// 6 - Aground
        6 => Aground,
        /// 7 - Engaged in fishing
        7 => EngagedInFishing,
        /// 8 - Under way sailing
        8 => UnderWaySailing,
        /// 11 - Power-driven vessel towing astern
        11 => TowingAstern,
        /// 12 - Power-driven vessel pushing ahead or towing alongside
        12 => PushingAhead,
        /// 14 - AIS-SART, MOB-AIS or EPIRB-AIS active
        14 => AisSartActive,
        /// 15 - Not defined
        15 => NotDefined,
    } else Reserved
}

u8_enum! {
    /// Special manoeuvre indicator.
    pub enum ManeuverIndicator {
        /// 0 - Not available
        0 => NotAvailable,
        /// 1 - Not engaged in special manoeuvre
        1 => NoSpecialManeuver,
        /// 2 - Engaged in special manoeuvre
        2 => SpecialManeuver,
    } else Reserved
}

u8_enum! {
    /// Type of electronic position fixing device.
    pub enum EpfdType {
        /// 0 - Undefined
        0 => Undefined,
        /// 1 - GPS
        1 => Gps,
        /// 2 - GLONASS
        2 => Glonass,
        /// 3 - Combined GPS/GLONASS
        3 => CombinedGpsGlonass,
        /// 4 - Loran-C
        4 => LoranC,
        /// 5 - Chayka
        5 => Chayka,
        /// 6 - Integrated navigation system
        6 => IntegratedNavigation,
        /// 7 - Surveyed
        7 => Surveyed,
        /// 8 - Galileo
        8 => Galileo,
        /// 15 - Internal GNSS
        15 => InternalGnss,
    } else Reserved
}

/// Position accuracy flag.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionAccuracy {
    /// Accuracy worse than 10 m, or unknown
    Low,
    /// Differential quality fix, accuracy better than 10 m
    High,
}

impl From<bool> for PositionAccuracy {
    fn from(flag: bool) -> Self {
        if flag {
            PositionAccuracy::High
        } else {
            PositionAccuracy::Low
        }
    }
}

/// Receiver autonomous integrity monitoring flag.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Raim {
    NotInUse,
    InUse,
}

impl From<bool> for Raim {
    fn from(flag: bool) -> Self {
        if flag { Raim::InUse } else { Raim::NotInUse }
    }
}

/// Type of ship and cargo.
///
/// Categories that span a range of codes keep the second digit, which for
/// most of them names the hazardous cargo category (1 = A to 4 = D).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipType {
    /// 0 - Not available
    NotAvailable,
    /// 20 to 29 - Wing in ground craft
    WingInGround(u8),
    /// 30 - Fishing
    Fishing,
    /// 31 - Towing
    Towing,
    /// 32 - Towing, length over 200 m or breadth over 25 m
    TowingLarge,
    /// 33 - Dredging or underwater operations
    Dredging,
    /// 34 - Diving operations
    Diving,
    /// 35 - Military operations
    Military,
    /// 36 - Sailing
    Sailing,
    /// 37 - Pleasure craft
    PleasureCraft,
    /// 40 to 49 - High speed craft
    HighSpeedCraft(u8),
    /// 50 - Pilot vessel
    PilotVessel,
    /// 51 - Search and rescue vessel
    SearchAndRescue,
    /// 52 - Tug
    Tug,
    /// 53 - Port tender
    PortTender,
    /// 54 - Anti-pollution equipment
    AntiPollution,
    /// 55 - Law enforcement
    LawEnforcement,
    /// 58 - Medical transport
    MedicalTransport,
    /// 59 - Noncombatant ship according to RR Resolution No. 18
    Noncombatant,
    /// 60 to 69 - Passenger
    Passenger(u8),
    /// 70 to 79 - Cargo
    Cargo(u8),
    /// 80 to 89 - Tanker
    Tanker(u8),
    /// 90 to 99 - Other type
    Other(u8),
    /// Reserved or regional codes
    Reserved(u8),
}

impl From<u8> for ShipType {
    fn from(value: u8) -> Self {
        match value {
            0 => ShipType::NotAvailable,
            20..=29 => ShipType::WingInGround(value % 10),
            30 => ShipType::Fishing,
            31 => ShipType::Towing,
            32 => ShipType::TowingLarge,
            33 => ShipType::Dredging,
            34 => ShipType::Diving,
            35 => ShipType::Military,
            36 => ShipType::Sailing,
            37 => ShipType::PleasureCraft,
            40..=49 => ShipType::HighSpeedCraft(value % 10),
            50 => ShipType::PilotVessel,
            51 => ShipType::SearchAndRescue,
            52 => ShipType::Tug,
            53 => ShipType::PortTender,
            54 => ShipType::AntiPollution,
            55 => ShipType::LawEnforcement,
            58 => ShipType::MedicalTransport,
            59 => ShipType::Noncombatant,
            60..=69 => ShipType::Passenger(value % 10),
            70..=79 => ShipType::Cargo(value % 10),
            80..=89 => ShipType::Tanker(value % 10),
            90..=99 => ShipType::Other(value % 10),
            other => ShipType::Reserved(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_status() {
        let cases = [
            (0, NavigationStatus::UnderWayUsingEngine),
            (5, NavigationStatus::Moored),
            (9, NavigationStatus::Reserved(9)),
            (13, NavigationStatus::Reserved(13)),
            (15, NavigationStatus::NotDefined),
        ];

        for (input, expected) in cases {
            let result = NavigationStatus::from(input);
            assert_eq!(result, expected, "Failed: {input:?}\n\t{result:?}");
            assert_eq!(u8::from(result), input);
        }
    }

    #[test]
    fn test_ship_type() {
        let cases = [
            (0, ShipType::NotAvailable),
            (7, ShipType::Reserved(7)),
            (24, ShipType::WingInGround(4)),
            (30, ShipType::Fishing),
            (37, ShipType::PleasureCraft),
            (38, ShipType::Reserved(38)),
            (52, ShipType::Tug),
            (56, ShipType::Reserved(56)),
            (60, ShipType::Passenger(0)),
            (70, ShipType::Cargo(0)),
            (84, ShipType::Tanker(4)),
            (99, ShipType::Other(9)),
            (255, ShipType::Reserved(255)),
        ];

        for (input, expected) in cases {
            let result = ShipType::from(input);
            assert_eq!(result, expected, "Failed: {input:?}\n\t{result:?}");
        }
    }

    #[test]
    fn test_flags() {
        assert_eq!(PositionAccuracy::from(true), PositionAccuracy::High);
        assert_eq!(PositionAccuracy::from(false), PositionAccuracy::Low);
        assert_eq!(Raim::from(true), Raim::InUse);
        assert_eq!(EpfdType::from(7), EpfdType::Surveyed);
        assert_eq!(EpfdType::from(12), EpfdType::Reserved(12));
        assert_eq!(ManeuverIndicator::from(3), ManeuverIndicator::Reserved(3));
    }
}
