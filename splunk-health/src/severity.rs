use crate::{invariants::Color, models::Entry};

/// Worst recognized color in the block, `Green` when nothing ranks higher.
/// Unrecognized colors neither raise nor lower the result.
pub fn worst_color(entries: &[Entry]) -> Color {
    entries
        .iter()
        .filter_map(|e| Color::try_from_name(&e.color()))
        .fold(Color::Green, Ord::max)
}
