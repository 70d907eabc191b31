/// A `width × height` grid of colors, row-major with the origin at the top
/// left.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap<C> {
    width: usize,
    height: usize,
    pixels: Vec<C>,
}

impl<C> Bitmap<C> {
    /// Assembles a bitmap from rows. Every row must be `width` long.
    pub(crate) fn from_rows(width: usize, rows: Vec<Vec<C>>) -> Self {
        let height = rows.len();
        let pixels: Vec<C> = rows.into_iter().flatten().collect();
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at column `x`, row `y`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&C> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.pixels.chunks(self.width)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[C] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<C> {
        self.pixels
    }

    /// Applies `f` to every pixel, e.g. to convert into another space.
    pub fn map<D>(&self, f: impl Fn(&C) -> D) -> Bitmap<D> {
        Bitmap {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(f).collect(),
        }
    }
}
