// Default interpolation settings.

// h3 resolution, larger = smaller hexes
pub const HEX_RESOLUTION: u8 = 7;
// a sample can affect a hex this many rings away
pub const INTERPOLATION_RING_RADIUS: u32 = 12;
// only cells at most this many rings from some sample get a result
pub const DRAW_RING_RADIUS: u32 = 6;
pub const IDW_POWER: f64 = 3.0;
// confidence at exactly DRAW_RING_RADIUS
pub const MIN_CONFIDENCE: f64 = 0.25;
// confidence stays at 1 within this many rings
pub const CONFIDENCE_RADIUS: u32 = 4;
// higher = steeper confidence drop with distance
pub const CONFIDENCE_POWER: f64 = 1.0;

// added to the ring distance so the origin cell (d = 0) has a finite weight
pub const IDW_DISTANCE_OFFSET: f64 = 0.5;

pub const MAX_H3_RESOLUTION: u8 = 15;

// ring expansion allocates one bucket per ring up to the interpolation radius
pub const MAX_RING_RADIUS: u32 = 1000;
