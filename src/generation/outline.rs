//! Outline ring painted around the filled cells of an avatar

use crate::generation::painter::Canvas;
use crate::generation::palette::Color;
use crate::spatial::FilledCellSet;
use std::collections::BTreeSet;

/// Cardinal neighbor offsets as `[dx, dy]`: left, right, up, down
pub const NEIGHBOR_OFFSETS: [[i64; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// Every cardinal neighbor of a filled cell that is not itself filled
///
/// Includes neighbors that fall outside the grid; painting clips those away.
pub fn outline_cells(filled: &FilledCellSet) -> BTreeSet<[i64; 2]> {
    let mut outline = BTreeSet::new();
    for [x, y] in filled.iter() {
        for [dx, dy] in NEIGHBOR_OFFSETS {
            let (nx, ny) = (x as i64 + dx, y as i64 + dy);
            if !filled.contains(nx, ny) {
                outline.insert([nx, ny]);
            }
        }
    }
    outline
}

/// Paint a border square in `outline_color` on every empty cardinal neighbor
pub fn draw_outline(canvas: &mut Canvas, filled: &FilledCellSet, outline_color: Color) {
    let color = outline_color.to_rgba();
    for [x, y] in outline_cells(filled) {
        canvas.fill_cell(x, y, color);
    }
}
