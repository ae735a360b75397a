//! Dot canvas: a square grid of dots painted by dragging

pub const GRID_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotCanvas {
    dots: [[bool; GRID_SIZE]; GRID_SIZE],
    erasing: bool,
    drawing: bool,
}

impl Default for DotCanvas {
    fn default() -> Self {
        Self {
            dots: [[false; GRID_SIZE]; GRID_SIZE],
            erasing: false,
            drawing: false,
        }
    }
}

impl DotCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between painting and erasing
    pub fn set_erasing(&mut self, erasing: bool) {
        self.erasing = erasing;
    }

    #[must_use]
    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    /// Begin a stroke at a cell
    pub fn press(&mut self, row: usize, col: usize) {
        self.drawing = true;
        self.apply(row, col);
    }

    /// Continue a stroke; ignored unless a stroke is active
    pub fn drag(&mut self, row: usize, col: usize) {
        if self.drawing {
            self.apply(row, col);
        }
    }

    pub fn release(&mut self) {
        self.drawing = false;
    }

    fn apply(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.dots.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = !self.erasing;
        }
    }

    pub fn clear(&mut self) {
        self.dots = [[false; GRID_SIZE]; GRID_SIZE];
    }

    #[must_use]
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.dots
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    #[must_use]
    pub fn filled(&self) -> usize {
        self.dots.iter().flatten().filter(|&&dot| dot).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_paints_pressed_and_dragged_cells() {
        let mut canvas = DotCanvas::new();
        canvas.press(0, 0);
        canvas.drag(0, 1);
        canvas.release();
        canvas.drag(5, 5);

        assert!(canvas.is_set(0, 0));
        assert!(canvas.is_set(0, 1));
        assert!(!canvas.is_set(5, 5));
        assert_eq!(canvas.filled(), 2);
    }

    #[test]
    fn erasing_clears_cells() {
        let mut canvas = DotCanvas::new();
        canvas.press(3, 3);
        canvas.release();
        canvas.set_erasing(true);
        canvas.press(3, 3);
        assert!(!canvas.is_set(3, 3));
    }

    #[test]
    fn out_of_range_cells_are_ignored() {
        let mut canvas = DotCanvas::new();
        canvas.press(GRID_SIZE, 0);
        assert_eq!(canvas.filled(), 0);
        assert!(!canvas.is_set(0, GRID_SIZE));
    }

    #[test]
    fn clear_resets_grid() {
        let mut canvas = DotCanvas::new();
        canvas.press(1, 1);
        canvas.clear();
        assert_eq!(canvas.filled(), 0);
    }
}
