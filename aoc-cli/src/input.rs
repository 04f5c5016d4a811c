//! Local puzzle input files

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Reads inputs laid out as `{base_dir}/{year}/{day}.txt`
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.base_dir.join(year.to_string()).join(format!("{day}.txt"))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        if !path.is_file() {
            return Err(InputError::Missing(path));
        }
        Ok(fs::read_to_string(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_is_year_directory_and_unpadded_day() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(store.input_path(2023, 7), PathBuf::from("inputs/2023/7.txt"));
        assert_eq!(store.input_path(2015, 25), PathBuf::from("inputs/2015/25.txt"));
    }

    #[test]
    fn reads_existing_input() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2016")).unwrap();
        fs::write(temp.path().join("2016/2.txt"), "ULL\nRRDDD\n").unwrap();

        let store = InputStore::new(temp.path().to_path_buf());
        assert!(store.contains(2016, 2));
        assert_eq!(store.read(2016, 2).unwrap(), "ULL\nRRDDD\n");
    }

    #[test]
    fn missing_input_names_the_path() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(2024, 1));
        match store.read(2024, 1) {
            Err(InputError::Missing(path)) => assert!(path.ends_with("2024/1.txt")),
            other => panic!("expected missing input, got {other:?}"),
        }
    }
}
