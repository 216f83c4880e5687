use std::fs;
use std::path::Path;
use std::result;

use crate::errors::*;

/// A dense, row-major matrix of `f64` loaded from a text file.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from nested rows. Returns `None` for ragged or empty input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Matrix> {
        let cols = rows.first().map(|r| r.len())?;
        if cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let n_rows = rows.len();
        let data = rows.into_iter().flatten().collect();
        Some(Matrix { rows: n_rows, cols, data })
    }

    /// Reads and parses the matrix stored at `path`.
    ///
    /// A missing or unreadable file is reported as a parse error, the same as
    /// malformed contents.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Matrix> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        debug!("loading matrix from {}", origin);
        let text = fs::read_to_string(path)
            .map_err(|cause| ParseError::Unreadable { path: origin.clone(), cause })
            .map_err(ErrorKind::from)?;
        let matrix = Matrix::parse(&text, &origin).map_err(ErrorKind::from)?;
        Ok(matrix)
    }

    /// Parses whitespace separated numbers, one matrix row per line.
    ///
    /// Everything after a `#` is a comment. Lines without values are skipped.
    /// `origin` only names the source in error messages.
    pub fn parse(text: &str, origin: &str) -> result::Result<Matrix, ParseError> {
        let mut data = Vec::new();
        let mut cols = None;
        let mut rows = 0;

        for (index, line) in text.lines().enumerate() {
            let line = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };

            let start = data.len();
            for token in line.split_whitespace() {
                let value = token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    path: origin.to_owned(),
                    line: index + 1,
                    token: token.to_owned(),
                })?;
                data.push(value);
            }

            let found = data.len() - start;
            if found == 0 {
                continue;
            }
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(ParseError::RaggedRow {
                        path: origin.to_owned(),
                        line: index + 1,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        match cols {
            Some(cols) => Ok(Matrix { rows, cols, data }),
            None => Err(ParseError::Empty { path: origin.to_owned() }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All values, row after row.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn row(&self, r: usize) -> Option<&[f64]> {
        if r < self.rows {
            Some(&self.data[r * self.cols..(r + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn get(&self, r: usize, c: usize) -> Option<f64> {
        if c < self.cols {
            self.row(r).map(|row| row[c])
        } else {
            None
        }
    }

    pub fn dims(&self) -> Dims {
        Dims(self.rows, self.cols)
    }
}
