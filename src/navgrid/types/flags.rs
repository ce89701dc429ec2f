//! Per-cell flag sets.
//!
//! The full bit semantics of the format are not known, so every flag set keeps
//! its raw value and reports the bits it cannot name instead of rejecting them.
//!
//! Two shapes exist:
//! - Bitmask sets ([`VisionPathingFlags`], [`RiverRegionFlags`]), where each
//!   named flag is an independent bit.
//! - Categorical sets (the nibble fields), where the value as a whole names
//!   one member of a small enumeration.

use std::fmt;

use bitflags::bitflags;

/// Identifies one of the eight flag categories stored per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagCategory {
    VisionPathing,
    RiverRegion,
    JungleQuadrant,
    MainRegion,
    NearestLane,
    PointOfInterest,
    RingSegment,
    Reserved,
}

impl FlagCategory {
    pub const ALL: [FlagCategory; 8] = [
        FlagCategory::VisionPathing,
        FlagCategory::RiverRegion,
        FlagCategory::JungleQuadrant,
        FlagCategory::MainRegion,
        FlagCategory::NearestLane,
        FlagCategory::PointOfInterest,
        FlagCategory::RingSegment,
        FlagCategory::Reserved,
    ];

    /// The bits of this category whose meaning is established.
    pub const fn known_mask(self) -> u16 {
        match self {
            FlagCategory::VisionPathing => VisionPathingFlags::KNOWN_MASK,
            FlagCategory::RiverRegion => RiverRegionFlags::KNOWN_MASK,
            FlagCategory::JungleQuadrant => JungleQuadrant::KNOWN_MASK,
            FlagCategory::MainRegion => MainRegion::KNOWN_MASK,
            FlagCategory::NearestLane => NearestLane::KNOWN_MASK,
            FlagCategory::PointOfInterest => PointOfInterest::KNOWN_MASK,
            FlagCategory::RingSegment => RingSegment::KNOWN_MASK,
            FlagCategory::Reserved => ReservedFlags::KNOWN_MASK,
        }
    }
}

impl fmt::Display for FlagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlagCategory::VisionPathing => "vision-pathing",
            FlagCategory::RiverRegion => "river-region",
            FlagCategory::JungleQuadrant => "jungle-quadrant",
            FlagCategory::MainRegion => "main-region",
            FlagCategory::NearestLane => "nearest-lane",
            FlagCategory::PointOfInterest => "point-of-interest",
            FlagCategory::RingSegment => "ring-segment",
            FlagCategory::Reserved => "reserved",
        };
        f.write_str(name)
    }
}

/// Common interface over every flag category.
///
/// `raw()` always returns the value exactly as it was read; bits outside
/// [`FlagSet::KNOWN_MASK`] are preserved and reported by `unknown_bits()`.
///
/// For categorical sets the mask only bounds the width of the named values.
/// A value inside the mask can still be unnamed (`kind()` is `None`), so
/// `unknown_bits() == 0` does not mean the value is recognized; use
/// `is_named()` for that.
pub trait FlagSet: Copy {
    /// The named flag (bitmask sets) or named value (categorical sets).
    type Flag: Copy;

    const CATEGORY: FlagCategory;
    const KNOWN_MASK: u16;

    /// Wraps a raw value. Never fails; bits beyond the storage width of the
    /// category are truncated by the caller's split, not here.
    fn from_raw(raw: u16) -> Self;

    fn raw(&self) -> u16;

    fn is_set(&self, flag: Self::Flag) -> bool;

    fn unknown_bits(&self) -> u16 {
        self.raw() & !Self::KNOWN_MASK
    }
}

bitflags! {
    /// Walkability, brush, walls and visibility zones.
    ///
    /// An empty set means a plain walkable cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VisionPathingFlags: u16 {
        const BRUSH = 1 << 0;
        const WALL = 1 << 1;
        const WALL_STRUCTURE = 1 << 2;
        const UNOBSERVED_A = 1 << 3;
        const UNOBSERVED_B = 1 << 4;
        const UNOBSERVED_C = 1 << 5;
        const WALL_TRANSPARENT = 1 << 6;
        const UNKNOWN_A = 1 << 7;
        const ALWAYS_VISIBLE = 1 << 8;
        const UNKNOWN_B = 1 << 9;
        const BLUE_ZONE = 1 << 10;
        const RED_ZONE = 1 << 11;
        const NEUTRAL_ZONE = 1 << 12;
    }
}

impl VisionPathingFlags {
    /// The flags whose meaning is established. The `UNOBSERVED_*` and
    /// `UNKNOWN_*` placeholders are named but not part of it.
    pub const ESTABLISHED: Self = Self::BRUSH
        .union(Self::WALL)
        .union(Self::WALL_STRUCTURE)
        .union(Self::WALL_TRANSPARENT)
        .union(Self::ALWAYS_VISIBLE)
        .union(Self::BLUE_ZONE)
        .union(Self::RED_ZONE)
        .union(Self::NEUTRAL_ZONE);
}

bitflags! {
    /// Jungle/river topology. An empty set means a non-jungle cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RiverRegionFlags: u8 {
        const JUNGLE_QUADRANT = 1 << 0;
        const BARON_PIT = 1 << 1;
        const UNOBSERVED_A = 1 << 2;
        const UNOBSERVED_B = 1 << 3;
        const RIVER = 1 << 4;
        const UNKNOWN_A = 1 << 5;
        const RIVER_ENTRANCE = 1 << 6;
    }
}

impl RiverRegionFlags {
    /// The flags whose meaning is established.
    pub const ESTABLISHED: Self = Self::JUNGLE_QUADRANT
        .union(Self::BARON_PIT)
        .union(Self::RIVER)
        .union(Self::RIVER_ENTRANCE);
}

impl FlagSet for VisionPathingFlags {
    type Flag = VisionPathingFlags;
    const CATEGORY: FlagCategory = FlagCategory::VisionPathing;
    const KNOWN_MASK: u16 = VisionPathingFlags::ESTABLISHED.bits();

    fn from_raw(raw: u16) -> Self {
        Self::from_bits_retain(raw)
    }

    fn raw(&self) -> u16 {
        self.bits()
    }

    fn is_set(&self, flag: Self::Flag) -> bool {
        !flag.is_empty() && self.contains(flag)
    }
}

impl FlagSet for RiverRegionFlags {
    type Flag = RiverRegionFlags;
    const CATEGORY: FlagCategory = FlagCategory::RiverRegion;
    const KNOWN_MASK: u16 = RiverRegionFlags::ESTABLISHED.bits() as u16;

    fn from_raw(raw: u16) -> Self {
        Self::from_bits_retain(raw as u8)
    }

    fn raw(&self) -> u16 {
        self.bits() as u16
    }

    fn is_set(&self, flag: Self::Flag) -> bool {
        !flag.is_empty() && self.contains(flag)
    }
}

/// Declares a categorical nibble field: a `u8` newtype that keeps the raw
/// value, plus the enumeration of its named values.
macro_rules! categorical_flags {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:ident, $category:expr, $mask:expr,
        { $($variant:ident = $value:literal),* $(,)? }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $kind {
            $($variant = $value),*
        }

        impl $kind {
            pub fn from_value(value: u8) -> Option<Self> {
                match value {
                    $($value => Some($kind::$variant),)*
                    _ => None,
                }
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(u8);

        impl $name {
            pub const fn new(value: u8) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> u8 {
                self.0
            }

            /// The named value, or `None` if the raw value has no name.
            pub fn kind(&self) -> Option<$kind> {
                $kind::from_value(self.0)
            }

            pub fn is_named(&self) -> bool {
                self.kind().is_some()
            }
        }

        impl FlagSet for $name {
            type Flag = $kind;
            const CATEGORY: FlagCategory = $category;
            const KNOWN_MASK: u16 = $mask;

            fn from_raw(raw: u16) -> Self {
                Self(raw as u8)
            }

            fn raw(&self) -> u16 {
                self.0 as u16
            }

            fn is_set(&self, flag: Self::Flag) -> bool {
                self.0 == flag as u8
            }
        }
    };
}

categorical_flags! {
    /// Which jungle quadrant a cell sits in.
    JungleQuadrant, JungleQuadrantKind, FlagCategory::JungleQuadrant, 0x07,
    {
        None = 0,
        North = 1,
        East = 2,
        West = 3,
        South = 4,
    }
}

categorical_flags! {
    /// The coarse map region of a cell.
    MainRegion, MainRegionKind, FlagCategory::MainRegion, 0x0F,
    {
        Spawn = 0,
        Base = 1,
        LaneTop = 2,
        LaneMid = 3,
        LaneBot = 4,
        JungleTop = 5,
        JungleBot = 6,
        RiverTop = 7,
        RiverBot = 8,
        BasePerimTop = 9,
        BasePerimBot = 10,
        AlcoveTop = 11,
        AlcoveBot = 12,
    }
}

categorical_flags! {
    /// The lane closest to a cell.
    NearestLane, NearestLaneKind, FlagCategory::NearestLane, 0x0F,
    {
        BlueTop = 0,
        BlueMid = 1,
        BlueBot = 2,
        RedTop = 3,
        RedMid = 4,
        RedBot = 5,
        BlueNeutralTop = 6,
        BlueNeutralMid = 7,
        BlueNeutralBot = 8,
        RedNeutralTop = 9,
        RedNeutralMid = 10,
        RedNeutralBot = 11,
    }
}

categorical_flags! {
    PointOfInterest, PointOfInterestKind, FlagCategory::PointOfInterest, 0x03,
    {
        None = 0,
        Turret = 1,
        CloudTunnel = 2,
    }
}

categorical_flags! {
    /// Concentric ring segment between spawn and the neutral zone.
    RingSegment, RingSegmentKind, FlagCategory::RingSegment, 0x0F,
    {
        BlueSpawnToNexus = 0,
        BlueNexusToInhib = 1,
        BlueInhibToInner = 2,
        BlueInhibToOuter = 3,
        BlueOuterToNeutral = 4,
        RedSpawnToNexus = 5,
        RedNexusToInhib = 6,
        RedInhibToInner = 7,
        RedInhibToOuter = 8,
        RedOuterToNeutral = 9,
    }
}

/// High nibble of the ring byte. No value in it has a known meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReservedFlags(u8);

impl ReservedFlags {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl FlagSet for ReservedFlags {
    type Flag = u8;
    const CATEGORY: FlagCategory = FlagCategory::Reserved;
    const KNOWN_MASK: u16 = 0x00;

    fn from_raw(raw: u16) -> Self {
        Self(raw as u8)
    }

    fn raw(&self) -> u16 {
        self.0 as u16
    }

    fn is_set(&self, flag: Self::Flag) -> bool {
        self.0 == flag
    }
}

/// All flag sets of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFlags {
    pub vision_pathing: VisionPathingFlags,
    pub river_region: RiverRegionFlags,
    pub jungle_quadrant: JungleQuadrant,
    pub main_region: MainRegion,
    pub nearest_lane: NearestLane,
    pub point_of_interest: PointOfInterest,
    pub ring_segment: RingSegment,
    pub reserved: ReservedFlags,
}
