//! Plain-text rendering of a percolation model.

use seep_core::{PercolationError, PercolationModel, Site};

/// Glyph for a closed site.
pub const CLOSED: char = '#';
/// Glyph for an open site not connected to the top.
pub const OPEN: char = '.';
/// Glyph for a full site.
pub const FULL: char = '~';

/// Render `model` as `n` lines of `n` glyphs, top row first.
///
/// # Examples
///
/// ```
/// use seep_cli::render::render;
/// use seep_core::{PercolationModel, Site};
/// use seep_grid::SiteGrid;
///
/// let mut grid = SiteGrid::new(2).unwrap();
/// grid.open(Site::new(1, 1)).unwrap();
/// grid.open(Site::new(2, 2)).unwrap();
/// assert_eq!(render(&mut grid).unwrap(), "~#\n#.\n");
/// ```
pub fn render<M: PercolationModel + ?Sized>(model: &mut M) -> Result<String, PercolationError> {
    let n = model.size();
    let mut out = String::with_capacity(n * (n + 1));
    for row in 1..=n {
        for col in 1..=n {
            let site = Site::new(row, col);
            let glyph = if model.is_full(site)? {
                FULL
            } else if model.is_open(site)? {
                OPEN
            } else {
                CLOSED
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    Ok(out)
}
