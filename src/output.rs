use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TwisterError};
use crate::twister::Twister64;

/// Typed form of the 'd'/'f'/'i' selector characters.
enum Precision {
    Double,
    Float,
    Int,
}

impl Precision {
    fn from_selector(selector: char) -> Result<Self> {
        match selector {
            'd' => Ok(Self::Double),
            'f' => Ok(Self::Float),
            'i' => Ok(Self::Int),
            other => Err(TwisterError::InvalidPrecision(other)),
        }
    }
}

impl Twister64 {
    /// Appends `count` newline-terminated values in `[0, range]` to the
    /// file at `path`, creating it first if needed. `precision` selects the
    /// value type: 'd' doubles, 'f' floats, 'i' integers (the integer draw
    /// truncates `range`).
    ///
    /// A count of zero is a no-op that touches nothing, not even the file.
    /// An unknown selector writes nothing and reports
    /// [`TwisterError::InvalidPrecision`].
    pub fn write_batch(
        &mut self,
        path: impl AsRef<Path>,
        count: usize,
        range: f64,
        precision: char,
    ) -> Result<()> {
        if count == 0 {
            return Ok(());
        }

        let precision = Precision::from_selector(precision)?;

        let file = OpenOptions::new().append(true).create(true).open(path)?;
        let mut sink = BufWriter::new(file);
        self.write_values(&mut sink, count, range, precision)?;
        sink.flush()?;

        Ok(())
    }

    fn write_values(
        &mut self,
        sink: &mut impl Write,
        count: usize,
        range: f64,
        precision: Precision,
    ) -> Result<()> {
        match precision {
            Precision::Double => {
                for _ in 0..count {
                    writeln!(sink, "{}", self.rand_double(range)?)?;
                }
            }
            Precision::Float => {
                for _ in 0..count {
                    writeln!(sink, "{}", self.rand_float(range as f32)?)?;
                }
            }
            Precision::Int => {
                for _ in 0..count {
                    writeln!(sink, "{}", self.rand_int(range as i32)?)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("twister64-{}-{name}", std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn appends_rather_than_overwrites() {
        let path = scratch_path("append.txt");
        let mut rng = Twister64::default();
        rng.write_batch(&path, 3, 10.0, 'i').unwrap();
        rng.write_batch(&path, 3, 10.0, 'i').unwrap();
        assert_eq!(read_lines(&path).len(), 6);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn zero_count_leaves_no_file_behind() {
        let path = scratch_path("empty.txt");
        let mut rng = Twister64::default();
        rng.write_batch(&path, 0, 10.0, 'i').unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn unknown_selector_writes_nothing() {
        let path = scratch_path("invalid.txt");
        let mut rng = Twister64::default();
        match rng.write_batch(&path, 5, 10.0, 'x') {
            Err(TwisterError::InvalidPrecision('x')) => {}
            other => panic!("expected InvalidPrecision, got {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn integer_lines_parse_within_range() {
        let path = scratch_path("ints.txt");
        let mut rng = Twister64::default();
        rng.write_batch(&path, 50, 99.0, 'i').unwrap();
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 50);
        for line in lines {
            let value: i32 = line.parse().unwrap();
            assert!((0..=99).contains(&value));
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn double_lines_parse_within_range() {
        let path = scratch_path("doubles.txt");
        let mut rng = Twister64::default();
        rng.write_batch(&path, 50, 1.0, 'd').unwrap();
        for line in read_lines(&path) {
            let value: f64 = line.parse().unwrap();
            assert!((0.0..=1.0).contains(&value));
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn same_seed_writes_identical_batches() {
        let a = scratch_path("det-a.txt");
        let b = scratch_path("det-b.txt");
        Twister64::new(777).write_batch(&a, 20, 50.0, 'f').unwrap();
        Twister64::new(777).write_batch(&b, 20, 50.0, 'f').unwrap();
        assert_eq!(
            fs::read_to_string(&a).unwrap(),
            fs::read_to_string(&b).unwrap()
        );
        let _ = fs::remove_file(&a);
        let _ = fs::remove_file(&b);
    }
}
