// ── Frequency model ──
//
// Channel <-> center-frequency conversion and the overlap predicate.
// This predicate is the sole primitive used both for detecting existing
// conflicts (findings) and for validating candidate assignments (planner).

use crate::model::{Band, ChannelWidth};

/// The three non-overlapping 2.4 GHz channels.
pub const VALID_2G_CHANNELS: [u16; 3] = [1, 6, 11];

/// 5 GHz channels subject to radar-avoidance (DFS) regulations.
pub const DFS_CHANNELS: [u16; 16] = [
    52, 56, 60, 64, 100, 104, 108, 112, 116, 120, 124, 128, 132, 136, 140, 144,
];

/// UNII-3 sub-band (non-DFS, 149-165).
pub const UNII3_CHANNELS: [u16; 5] = [149, 153, 157, 161, 165];

/// UNII-1 sub-band (non-DFS, 36-48).
pub const UNII1_CHANNELS: [u16; 4] = [36, 40, 44, 48];

/// Center frequency in MHz for a channel on a band, or `None` for channels
/// outside the band's valid range.
///
/// 2.4 GHz channels 1-13 sit at 2412 + 5 MHz steps; channel 14 is the
/// Japanese outlier at 2484. 5 GHz channels follow 5000 + 5 * n.
pub fn center_frequency_mhz(band: Band, channel: u16) -> Option<u32> {
    match band {
        Band::Ghz2_4 => match channel {
            1..=13 => Some(2407 + 5 * u32::from(channel)),
            14 => Some(2484),
            _ => None,
        },
        Band::Ghz5 => match channel {
            36..=165 => Some(5000 + 5 * u32::from(channel)),
            _ => None,
        },
    }
}

pub fn is_valid_2g(channel: u16) -> bool {
    VALID_2G_CHANNELS.contains(&channel)
}

pub fn is_dfs(channel: u16) -> bool {
    DFS_CHANNELS.contains(&channel)
}

/// Do two channels overlap at the given widths?
///
/// A channel of width W occupies the half-open span
/// `[center - W/2, center + W/2)`; two channels overlap iff their spans
/// intersect. Symmetric and reflexive. Handles unequal widths via span
/// intersection, not position-count comparison. Channels outside the
/// band's valid range never overlap anything.
pub fn overlaps(
    band: Band,
    channel_a: u16,
    width_a: ChannelWidth,
    channel_b: u16,
    width_b: ChannelWidth,
) -> bool {
    let (Some(center_a), Some(center_b)) = (
        center_frequency_mhz(band, channel_a),
        center_frequency_mhz(band, channel_b),
    ) else {
        return false;
    };

    let (a_lo, a_hi) = (center_a - width_a.mhz() / 2, center_a + width_a.mhz() / 2);
    let (b_lo, b_hi) = (center_b - width_b.mhz() / 2, center_b + width_b.mhz() / 2);

    a_lo < b_hi && b_lo < a_hi
}
