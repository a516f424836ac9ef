#[derive(Clone, Debug, PartialEq)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Film<T> {
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }

    /// scanlines from top to bottom
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.buffer.chunks(self.width)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut film = Film::new(3, 2, 0u8);
        film.write_at(2, 1, 7);
        film.write_at(0, 1, 5);
        assert_eq!(film.at(2, 1), 7);
        assert_eq!(film.buffer, vec![0, 0, 0, 5, 0, 7]);
        assert_eq!(film.total_pixels(), 6);
        let rows: Vec<&[u8]> = film.rows().collect();
        assert_eq!(rows, vec![&[0, 0, 0][..], &[5, 0, 7][..]]);
    }
}
