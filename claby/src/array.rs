use std::ops;

use crate::dims::Cell;

/// Row-major grid storage indexed by [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    height: usize,
    width: usize,
}

impl<T> Array2D<T> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Cell) -> Option<usize> {
        let Cell(row, col) = pos;
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }

        Some(row * self.width + col)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Cell> {
        if idx >= self.buf.len() {
            return None;
        }

        let row = idx / self.width;
        let col = idx % self.width;

        Some(Cell(row as i32, col as i32))
    }

    pub fn get(&self, pos: Cell) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Cell) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn all(&self, f: impl Fn(&T) -> bool) -> bool {
        self.buf.iter().all(f)
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, height: usize, width: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            height,
            width,
        }
    }

    pub fn fill(&mut self, item: T) {
        self.buf.fill(item);
    }
}

impl<T> ops::Index<Cell> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Cell) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

impl<T> ops::IndexMut<Cell> for Array2D<T> {
    fn index_mut(&mut self, index: Cell) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping() {
        let arr = Array2D::new(0u8, 3, 4);
        assert_eq!(arr.len(), 12);
        assert_eq!(arr.dim_to_idx(Cell(0, 0)), Some(0));
        assert_eq!(arr.dim_to_idx(Cell(1, 2)), Some(6));
        assert_eq!(arr.dim_to_idx(Cell(2, 3)), Some(11));
        assert_eq!(arr.dim_to_idx(Cell(3, 0)), None);
        assert_eq!(arr.dim_to_idx(Cell(0, 4)), None);
        assert_eq!(arr.dim_to_idx(Cell(-1, 0)), None);

        assert_eq!(arr.idx_to_dim(6), Some(Cell(1, 2)));
        assert_eq!(arr.idx_to_dim(12), None);
    }

    #[test]
    fn write_through_index() {
        let mut arr = Array2D::new(false, 2, 2);
        arr[Cell(1, 0)] = true;
        assert_eq!(arr.iter().filter(|&&b| b).count(), 1);
        assert!(arr[Cell(1, 0)]);
        assert!(!arr.all(|&b| b));

        arr.fill(true);
        assert!(arr.all(|&b| b));
        assert_eq!(arr.iter_pos().last(), Some(Cell(1, 1)));
    }
}
