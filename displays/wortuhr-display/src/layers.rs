//! Face layer and icon identifiers

use wortuhr_core::LayoutVariant;

/// Number of face layers
pub const LAYER_COUNT: usize = 8;

/// A region of the face that can be shown, hidden or written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceLayer {
    /// Minute container for three-line phrases
    MinuteThreeLine,
    /// Minute container for two long lines
    MinuteTwoLineLong,
    /// Minute container for two lines of large text
    MinuteTwoLineBig,
    /// Hour name
    Hour,
    /// Weekday and day of month
    Date,
    /// Battery outline icon
    Battery,
    /// Battery charge bar
    BatteryFill,
    /// Bluetooth icon
    Bluetooth,
}

impl FaceLayer {
    /// Every layer, in index order
    pub const ALL: [FaceLayer; LAYER_COUNT] = [
        FaceLayer::MinuteThreeLine,
        FaceLayer::MinuteTwoLineLong,
        FaceLayer::MinuteTwoLineBig,
        FaceLayer::Hour,
        FaceLayer::Date,
        FaceLayer::Battery,
        FaceLayer::BatteryFill,
        FaceLayer::Bluetooth,
    ];

    /// The three minute containers
    pub const MINUTE: [FaceLayer; 3] = [
        FaceLayer::MinuteThreeLine,
        FaceLayer::MinuteTwoLineLong,
        FaceLayer::MinuteTwoLineBig,
    ];

    /// Minute container that renders a layout variant
    pub const fn minute_container(layout: LayoutVariant) -> Self {
        match layout {
            LayoutVariant::ThreeLine => FaceLayer::MinuteThreeLine,
            LayoutVariant::TwoLineLong => FaceLayer::MinuteTwoLineLong,
            LayoutVariant::TwoLineBig => FaceLayer::MinuteTwoLineBig,
        }
    }

    /// Index into per-layer arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the three minute containers
    pub fn is_minute(&self) -> bool {
        Self::MINUTE.contains(self)
    }
}

/// Battery outline bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryIcon {
    #[default]
    Plain,
    Charging,
}

/// Bluetooth bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BluetoothIcon {
    Connected,
    #[default]
    Disconnected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_order() {
        for (i, layer) in FaceLayer::ALL.iter().enumerate() {
            assert_eq!(layer.index(), i);
        }
    }

    #[test]
    fn test_each_layout_has_own_container() {
        let three = FaceLayer::minute_container(LayoutVariant::ThreeLine);
        let long = FaceLayer::minute_container(LayoutVariant::TwoLineLong);
        let big = FaceLayer::minute_container(LayoutVariant::TwoLineBig);
        assert_ne!(three, long);
        assert_ne!(long, big);
        assert_ne!(three, big);
        assert!(three.is_minute() && long.is_minute() && big.is_minute());
        assert!(!FaceLayer::Hour.is_minute());
    }
}
