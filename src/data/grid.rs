use crate::error::Result;
use crate::network::Network;

/// A square sampling grid over `[-ratio, ratio]²`, used to draw decision maps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub side: usize,
    pub ratio: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Grid { side: 40, ratio: 1.0 }
    }
}

impl Grid {
    /// Plane coordinates of cell `(row, col)`. Row 0 is the top edge (`y = ratio`).
    pub fn point(&self, row: usize, col: usize) -> (f64, f64) {
        let side = self.side as f64;
        let x = self.ratio * (2.0 * col as f64 / side - 1.0);
        let y = self.ratio * (1.0 - 2.0 * row as f64 / side);
        (x, y)
    }
}

/// First network output at every grid cell, row-major, top row first.
pub fn evaluate_grid<F>(network: &Network, grid: &Grid, featurize: F) -> Result<Vec<Vec<f64>>>
where
    F: Fn(f64, f64) -> Vec<f64>,
{
    (0..grid.side)
        .map(|row| {
            (0..grid.side)
                .map(|col| -> Result<f64> {
                    let (x, y) = grid.point(row, col);
                    Ok(network.apply(&featurize(x, y))?[0])
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}
