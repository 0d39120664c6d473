use crate::config::Palette;
use crate::life::Grid;

/// Size in pixels of the frame buffer holding a `width` by `height` grid.
pub fn buffer_size(width: usize, height: usize, scale: u32) -> Option<(u32, u32)> {
    let w = u32::try_from(width).ok()?.checked_mul(scale)?;
    let h = u32::try_from(height).ok()?.checked_mul(scale)?;
    // RGBA bytes must fit in memory too
    (w as usize).checked_mul(h as usize)?.checked_mul(4)?;
    Some((w, h))
}

pub fn cell_color(x: usize, y: usize, alive: bool, palette: &Palette) -> [u8; 4] {
    if alive {
        palette.alive
    } else if (x + y % 2) % 2 == 0 {
        palette.dead_even
    } else {
        palette.dead_odd
    }
}

/// Maps a frame pixel to the cell under it. Pixels left of or above the grid
/// map to negative cells.
pub fn cell_at(pixel: (isize, isize), scale: u32) -> (isize, isize) {
    let scale = scale as isize;
    (pixel.0.div_euclid(scale), pixel.1.div_euclid(scale))
}

/// The cell a press lands on, given the pixel position the frame buffer
/// reports for it. Positions outside the buffer or the grid give `None`.
pub fn click_cell(
    pixel: Result<(usize, usize), (isize, isize)>,
    scale: u32,
    grid: &Grid,
) -> Option<(usize, usize)> {
    let (px, py) = pixel.ok()?;
    let (x, y) = cell_at((isize::try_from(px).ok()?, isize::try_from(py).ok()?), scale);
    let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
    grid.contains(x, y).then_some((x, y))
}

/// Draw the grid into an RGBA frame of `grid.width() * scale` pixels per row.
pub fn draw(grid: &Grid, frame: &mut [u8], scale: u32, palette: &Palette) {
    let scale = scale as usize;
    let row_bytes = grid.width() * scale * 4;
    debug_assert_eq!(frame.len(), row_bytes * grid.height() * scale);

    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&palette.background);
    }

    for (x, y, alive) in grid.iter() {
        let rgba = cell_color(x, y, alive, palette);
        for row in y * scale..(y + 1) * scale {
            let start = row * row_bytes + x * scale * 4;
            for pixel in frame[start..start + scale * 4].chunks_exact_mut(4) {
                pixel.copy_from_slice(&rgba);
            }
        }
    }
}
