//! Dense rectangular grids addressed by `(row, col)`

use aoc_solver::ParseError;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// The four grid directions, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_left(self) -> Self {
        self.turn_right().opposite()
    }

    pub fn opposite(self) -> Self {
        self.turn_right().turn_right()
    }

    /// `(drow, dcol)`
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// `^ > v <` arrows and `U R D L` letters
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'^' | b'U' | b'N' => Some(Direction::North),
            b'>' | b'R' | b'E' => Some(Direction::East),
            b'v' | b'D' | b'S' => Some(Direction::South),
            b'<' | b'L' | b'W' => Some(Direction::West),
            _ => None,
        }
    }

    /// Index in [`Direction::ALL`], handy for per-direction bitsets
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl Grid<u8> {
    /// One byte per cell; every line must have the same width
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let lines: Vec<&[u8]> = input
            .lines()
            .map(|l| l.trim_end_matches('\r').as_bytes())
            .skip_while(|l| l.is_empty())
            .collect();
        let lines: Vec<&[u8]> = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => lines[..=last].to_vec(),
            None => return Err(ParseError::MissingData("empty grid".into())),
        };

        let width = lines[0].len();
        if let Some((i, _)) = lines.iter().enumerate().find(|(_, l)| l.len() != width) {
            return Err(ParseError::at_line(
                i + 1,
                format!("expected {width} columns, found {}", lines[i].len()),
            ));
        }

        Ok(Self {
            width,
            height: lines.len(),
            cells: lines.concat(),
        })
    }

    /// First cell holding `b`
    pub fn find_byte(&self, b: u8) -> Option<Point> {
        self.position(|&c| c == b)
    }
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        (p.row < self.height && p.col < self.width).then(|| &self.cells[p.row * self.width + p.col])
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        if p.row < self.height && p.col < self.width {
            Some(&mut self.cells[p.row * self.width + p.col])
        } else {
            None
        }
    }

    /// Neighbour in direction `d`, if it is on the grid
    pub fn step(&self, p: Point, d: Direction) -> Option<Point> {
        let (dr, dc) = d.delta();
        self.offset(p, dr, dc)
    }

    pub fn offset(&self, p: Point, dr: isize, dc: isize) -> Option<Point> {
        let row = p.row as isize + dr;
        let col = p.col as isize + dc;
        self.in_bounds(row, col)
            .then(|| Point::new(row as usize, col as usize))
    }

    pub fn neighbours4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| self.step(p, d))
    }

    pub fn neighbours8(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&d| d != (0, 0))
            .filter_map(move |(dr, dc)| self.offset(p, dr, dc))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Point::new(row, col)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.points().zip(self.cells.iter())
    }

    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.cells
            .iter()
            .position(|c| pred(c))
            .map(|i| Point::new(i / self.width, i % self.width))
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        &self.cells[p.row * self.width + p.col]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        &mut self.cells[p.row * self.width + p.col]
    }
}

impl fmt::Debug for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            writeln!(f, "{}", String::from_utf8_lossy(self.row(row)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_index() {
        let grid = Grid::parse("\n#.S\n...\n\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.find_byte(b'S'), Some(Point::new(0, 2)));
        assert_eq!(grid[Point::new(0, 0)], b'#');
        assert_eq!(grid.get(Point::new(2, 0)), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::parse("###\n##\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
        assert!(Grid::parse("\n\n").is_err());
    }

    #[test]
    fn neighbours_stay_on_grid() {
        let grid = Grid::new(3, 3, 0u8);
        assert_eq!(grid.neighbours4(Point::new(0, 0)).count(), 2);
        assert_eq!(grid.neighbours8(Point::new(1, 1)).count(), 8);
        assert_eq!(grid.neighbours8(Point::new(2, 2)).count(), 3);
        assert_eq!(grid.step(Point::new(0, 1), Direction::North), None);
    }

    #[test]
    fn turning() {
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::North.turn_left(), Direction::West);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::from_byte(b'v'), Some(Direction::South));
    }
}
