// ── Radar / DFS advisory ──

use crate::model::Event;

/// Scan the event history for radar indications.
///
/// One global boolean for the whole snapshot: the site's 5 GHz radios
/// share regulatory radar exposure, so a single hit anywhere disqualifies
/// DFS channels everywhere.
pub fn radar_detected(events: &[Event]) -> bool {
    events.iter().any(Event::mentions_radar)
}
