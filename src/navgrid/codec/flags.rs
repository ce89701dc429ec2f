//! Decomposition of packed flag bytes into per-category flag sets.
//!
//! Pure functions only: nothing here reads from a cursor or can fail.
//!
//! Packed bytes with two sub-fields always split the same way: the low field
//! is `value & 0x0F`, the high field is `(value & 0xF0) >> 4`.

use crate::navgrid::types::flags::{
    CellFlags, FlagSet, JungleQuadrant, MainRegion, NearestLane, PointOfInterest,
    ReservedFlags, RingSegment, RiverRegionFlags, VisionPathingFlags,
};

pub const LOW_NIBBLE: u8 = 0x0F;
pub const HIGH_NIBBLE: u8 = 0xF0;

/// Splits a byte into its `(low, high)` nibbles.
pub const fn split_nibbles(value: u8) -> (u8, u8) {
    (value & LOW_NIBBLE, (value & HIGH_NIBBLE) >> 4)
}

/// Wraps a raw value as the flag set of category `F`.
pub fn decompose<F: FlagSet>(raw: u16) -> F {
    F::from_raw(raw)
}

/// Interprets one vision-pathing short. The on-disk field is signed; its
/// bits are taken as-is.
pub fn vision_pathing(raw: i16) -> VisionPathingFlags {
    decompose(raw as u16)
}

/// The four region bytes stored per cell in the combined flag pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionBytes {
    /// River-region bitmask; used whole, not split.
    pub river: u8,
    /// Jungle quadrant (low) and main region (high).
    pub jungle_main: u8,
    /// Nearest lane (low) and point of interest (high).
    pub lane_poi: u8,
    /// Ring segment (low) and reserved (high).
    pub ring_reserved: u8,
}

impl From<[u8; 4]> for RegionBytes {
    fn from(bytes: [u8; 4]) -> Self {
        Self {
            river: bytes[0],
            jungle_main: bytes[1],
            lane_poi: bytes[2],
            ring_reserved: bytes[3],
        }
    }
}

/// Builds a cell's full flag bundle from its vision short and region bytes.
pub fn cell_flags(vision: i16, region: RegionBytes) -> CellFlags {
    let (jungle, main) = split_nibbles(region.jungle_main);
    let (lane, poi) = split_nibbles(region.lane_poi);
    let (ring, reserved) = split_nibbles(region.ring_reserved);

    CellFlags {
        vision_pathing: vision_pathing(vision),
        river_region: decompose::<RiverRegionFlags>(region.river as u16),
        jungle_quadrant: JungleQuadrant::new(jungle),
        main_region: MainRegion::new(main),
        nearest_lane: NearestLane::new(lane),
        point_of_interest: PointOfInterest::new(poi),
        ring_segment: RingSegment::new(ring),
        reserved: ReservedFlags::new(reserved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navgrid::types::flags::{
        FlagCategory, JungleQuadrantKind, MainRegionKind, NearestLaneKind, PointOfInterestKind,
        RingSegmentKind,
    };

    #[test]
    fn nibble_split_recombines_for_every_byte() {
        for value in 0..=u8::MAX {
            let (low, high) = split_nibbles(value);
            assert!(low <= 0x0F && high <= 0x0F);
            assert_eq!((high << 4) | low, value, "byte {:#04x}", value);
        }
    }

    #[test]
    fn splits_combined_region_bytes() {
        let flags = cell_flags(
            0x0003,
            RegionBytes::from([0x50, 0x31, 0x1B, 0x29]),
        );

        assert!(flags.vision_pathing.is_set(VisionPathingFlags::BRUSH));
        assert!(flags.vision_pathing.is_set(VisionPathingFlags::WALL));
        assert!(!flags.vision_pathing.is_set(VisionPathingFlags::WALL_STRUCTURE));

        assert!(flags.river_region.is_set(RiverRegionFlags::RIVER));
        assert!(flags.river_region.is_set(RiverRegionFlags::RIVER_ENTRANCE));
        assert!(!flags.river_region.is_set(RiverRegionFlags::BARON_PIT));

        assert_eq!(flags.jungle_quadrant.kind(), Some(JungleQuadrantKind::North));
        assert_eq!(flags.main_region.kind(), Some(MainRegionKind::LaneMid));
        assert_eq!(flags.nearest_lane.kind(), Some(NearestLaneKind::RedNeutralBot));
        assert_eq!(flags.point_of_interest.kind(), Some(PointOfInterestKind::Turret));
        assert!(flags.ring_segment.is_set(RingSegmentKind::RedOuterToNeutral));
        assert_eq!(flags.reserved.value(), 2);
    }

    #[test]
    fn unknown_bits_survive_decomposition() {
        let vision = vision_pathing(0xE001u16 as i16);
        assert_eq!(vision.raw(), 0xE001);
        assert_eq!(vision.unknown_bits(), 0xE000);
        assert!(vision.is_set(VisionPathingFlags::BRUSH));

        let river = decompose::<RiverRegionFlags>(0x81);
        assert_eq!(river.raw(), 0x81);
        assert_eq!(river.unknown_bits(), 0x80);

        let poi = PointOfInterest::new(0x0E);
        assert_eq!(poi.kind(), None);
        assert_eq!(poi.raw(), 0x0E);
        assert_eq!(poi.unknown_bits(), 0x0C);

        let jungle = JungleQuadrant::new(0x0F);
        assert_eq!(jungle.kind(), None);
        assert_eq!(jungle.unknown_bits(), 0x08);

        let reserved = ReservedFlags::new(0x05);
        assert_eq!(reserved.unknown_bits(), 0x05);
    }

    #[test]
    fn empty_values_are_named() {
        let flags = cell_flags(0, RegionBytes::default());
        assert!(flags.vision_pathing.is_empty());
        assert!(flags.river_region.is_empty());
        assert!(!flags.vision_pathing.is_set(VisionPathingFlags::empty()));
        assert!(flags.jungle_quadrant.is_set(JungleQuadrantKind::None));
        assert!(flags.main_region.is_set(MainRegionKind::Spawn));
        assert!(flags.nearest_lane.is_set(NearestLaneKind::BlueTop));
        assert!(flags.point_of_interest.is_set(PointOfInterestKind::None));
        assert!(flags.ring_segment.is_set(RingSegmentKind::BlueSpawnToNexus));
    }

    #[test]
    fn category_masks_match_established_flags() {
        assert_eq!(FlagCategory::VisionPathing.known_mask(), 0x1D47);
        assert_eq!(FlagCategory::RiverRegion.known_mask(), 0x53);
        assert_eq!(FlagCategory::JungleQuadrant.known_mask(), 0x07);
        assert_eq!(FlagCategory::PointOfInterest.known_mask(), 0x03);
        assert_eq!(FlagCategory::Reserved.known_mask(), 0x00);
        assert_eq!(VisionPathingFlags::all().iter().count(), 13);
        assert_eq!(VisionPathingFlags::ESTABLISHED.iter().count(), 8);
        assert_eq!(RiverRegionFlags::ESTABLISHED.iter().count(), 4);
        for category in FlagCategory::ALL {
            assert!(!category.to_string().is_empty());
        }
    }

    #[test]
    fn placeholder_flags_are_reported_as_unknown() {
        let vision = vision_pathing(0x0288);
        assert!(vision.is_set(VisionPathingFlags::UNOBSERVED_A));
        assert_eq!(vision.unknown_bits(), 0x0288);

        let vision = vision_pathing(0x0289);
        assert!(vision.is_set(VisionPathingFlags::BRUSH));
        assert_eq!(vision.unknown_bits(), 0x0288);

        let river = decompose::<RiverRegionFlags>(0x2C);
        assert!(river.is_set(RiverRegionFlags::UNKNOWN_A));
        assert_eq!(river.unknown_bits(), 0x2C);
        assert_eq!(decompose::<RiverRegionFlags>(0x53).unknown_bits(), 0);
    }

    #[test]
    fn unnamed_values_inside_the_mask() {
        let jungle = JungleQuadrant::new(5);
        assert_eq!(jungle.unknown_bits(), 0);
        assert!(!jungle.is_named());

        let poi = PointOfInterest::new(3);
        assert_eq!(poi.unknown_bits(), 0);
        assert!(!poi.is_named());

        let region = MainRegion::new(13);
        assert_eq!(region.unknown_bits(), 0);
        assert!(!region.is_named());

        assert!(JungleQuadrant::new(1).is_named());
        assert!(PointOfInterest::new(2).is_named());
    }

    fn category_of<F: FlagSet>() -> (FlagCategory, u16) {
        (F::CATEGORY, F::KNOWN_MASK)
    }

    #[test]
    fn each_type_carries_its_category() {
        let pairs = [
            category_of::<VisionPathingFlags>(),
            category_of::<RiverRegionFlags>(),
            category_of::<JungleQuadrant>(),
            category_of::<MainRegion>(),
            category_of::<NearestLane>(),
            category_of::<PointOfInterest>(),
            category_of::<RingSegment>(),
            category_of::<ReservedFlags>(),
        ];
        let categories: Vec<FlagCategory> = pairs.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, FlagCategory::ALL.to_vec());
        for (category, mask) in pairs {
            assert_eq!(category.known_mask(), mask, "{category}");
        }
    }
}
