#![allow(non_snake_case)]

use super::format::format_value;
use super::{get_infinity, Compression, MpsError, MpsSettings};
use crate::algebra::FloatT;
use crate::model::{ObjectiveSense, SparseModel};
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

impl<T> SparseModel<T>
where
    T: FloatT,
{
    /// Write the model to a file in fixed-format MPS.
    ///
    /// Default attributes are first materialized for every row and column
    /// implied by earlier element or attribute setters.  This happens even
    /// if the settings are invalid or the file cannot then be written.
    ///
    /// Compressed output is not available.  Requesting it logs a warning
    /// and writes plain text to `path` unchanged.
    pub fn write_mps(&mut self, path: impl AsRef<Path>, settings: &MpsSettings) -> Result<(), MpsError> {
        let path = path.as_ref();
        self.fill_rows();
        self.fill_columns();
        settings.validate()?;

        if settings.compression != Compression::Plain {
            log::warn!(
                "{:?} compression is not available; writing {} as plain text",
                settings.compression,
                path.display()
            );
        }

        let mut out = BufWriter::new(File::create(path)?);
        MpsWriter::new(self, settings).write(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the model in fixed-format MPS to any writer.  The
    /// `compression` setting is ignored.  Gap rows and columns are filled
    /// as for [`write_mps`](Self::write_mps).
    pub fn write_mps_to<W: Write>(&mut self, mut out: W, settings: &MpsSettings) -> Result<(), MpsError> {
        self.fill_rows();
        self.fill_columns();
        settings.validate()?;
        MpsWriter::new(self, settings).write(&mut out)?;
        Ok(())
    }
}

// how a row is written in the ROWS section
#[derive(Debug, Clone, Copy, PartialEq)]
struct RowSense {
    code: &'static str,
    rhs: Option<f64>,
    range: Option<f64>,
}

struct MpsWriter<'a, T: FloatT> {
    model: &'a SparseModel<T>,
    settings: &'a MpsSettings,
    row_names: Vec<String>,
    column_names: Vec<String>,
    infinity: f64,
}

impl<'a, T> MpsWriter<'a, T>
where
    T: FloatT,
{
    fn new(model: &'a SparseModel<T>, settings: &'a MpsSettings) -> Self {
        let row_names = (0..model.number_rows())
            .map(|r| match model.row_name(r) {
                "" => format!("R{:07}", r),
                name => name.to_string(),
            })
            .collect();
        let column_names = (0..model.number_columns())
            .map(|c| match model.column_name(c) {
                "" => format!("C{:07}", c),
                name => name.to_string(),
            })
            .collect();
        Self {
            model,
            settings,
            row_names,
            column_names,
            infinity: get_infinity(),
        }
    }

    fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let senses: Vec<RowSense> = (0..self.model.number_rows())
            .map(|r| self.row_sense(r))
            .collect();

        writeln!(out, "NAME          {}", self.settings.problem_name)?;
        if self.model.optimization_direction() == ObjectiveSense::Maximize {
            writeln!(out, "OBJSENSE")?;
            writeln!(out, "    MAX")?;
        }

        writeln!(out, "ROWS")?;
        write_record(out, "N", &self.settings.objective_name, &[])?;
        for (name, sense) in self.row_names.iter().zip(&senses) {
            write_record(out, sense.code, name, &[])?;
        }

        writeln!(out, "COLUMNS")?;
        self.write_columns(out)?;

        writeln!(out, "RHS")?;
        let rhs = self.row_values(&senses, |s| s.rhs);
        self.write_chunked(out, "RHS", &rhs)?;

        let ranges = self.row_values(&senses, |s| s.range);
        if !ranges.is_empty() {
            writeln!(out, "RANGES")?;
            self.write_chunked(out, "RANGE", &ranges)?;
        }

        self.write_bounds(out)?;
        self.write_quadratic(out)?;

        writeln!(out, "ENDATA")
    }

    fn write_columns<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let A = self.model.matrix();
        let objective: &str = &self.settings.objective_name;

        // integer columns are bracketed by markers, one pair per run
        let runs = (0..self.model.number_columns()).group_by(|&c| self.model.column_is_integer(c));
        for (is_integer, run) in &runs {
            if is_integer {
                write_marker(out, "'INTORG'")?;
            }
            for col in run {
                let cost = self.model.column_objective(col);
                let mut entries: Vec<(&str, String)> = Vec::new();
                if cost != T::zero() {
                    entries.push((objective, self.format(cost)));
                }
                for (row, value) in A.column_entries(col) {
                    entries.push((self.row_names[row].as_str(), self.format(value)));
                }
                // an empty column still has to be declared
                if entries.is_empty() {
                    entries.push((objective, "0".to_string()));
                }
                self.write_chunked(out, &self.column_names[col], &entries)?;
            }
            if is_integer {
                write_marker(out, "'INTEND'")?;
            }
        }
        Ok(())
    }

    fn write_bounds<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut lines: Vec<(&str, &str, String)> = Vec::new();

        for (col, name) in self.column_names.iter().map(String::as_str).enumerate() {
            let lower = self.value(self.model.column_lower(col));
            let upper = self.value(self.model.column_upper(col));
            let lower_inf = lower <= -self.infinity;
            let upper_inf = upper >= self.infinity;

            if self.model.column_is_integer(col) && lower == 0.0 && upper == 1.0 {
                lines.push(("BV", name, String::new()));
            } else if !lower_inf && lower == upper {
                lines.push(("FX", name, self.format_f64(lower)));
            } else if lower_inf && upper_inf {
                lines.push(("FR", name, String::new()));
            } else {
                if lower_inf {
                    lines.push(("MI", name, String::new()));
                } else if lower != 0.0 {
                    lines.push(("LO", name, self.format_f64(lower)));
                }
                if !upper_inf {
                    lines.push(("UP", name, self.format_f64(upper)));
                }
            }
        }

        if lines.is_empty() {
            return Ok(());
        }
        writeln!(out, "BOUNDS")?;
        for (code, name, value) in lines {
            write_record(out, code, "BOUND", &[(name, value.as_str())])?;
        }
        Ok(())
    }

    fn write_quadratic<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let P = self.model.quadratic_matrix();
        if P.nnz() == 0 {
            return Ok(());
        }
        writeln!(out, "QUADOBJ")?;

        // An off-diagonal line stands for both (i, j) and (j, i), so each
        // unordered pair is written once under (min, max).  When both
        // orientations are set the upper triangle entry is written.
        let terms = (0..P.n)
            .flat_map(|j| P.column_entries(j).map(move |(i, v)| (i.min(j), i.max(j), i > j, v)))
            .sorted_by_key(|&(i, j, lower, _)| (j, i, lower))
            .dedup_by(|a, b| (a.0, a.1) == (b.0, b.1));
        for (i, j, _, value) in terms {
            write_record(
                out,
                "",
                &self.column_names[i],
                &[(self.column_names[j].as_str(), self.format(value).as_str())],
            )?;
        }
        Ok(())
    }

    // (row name, formatted value) for every row with a value of interest
    fn row_values<F>(&self, senses: &[RowSense], f: F) -> Vec<(&str, String)>
    where
        F: Fn(&RowSense) -> Option<f64>,
    {
        senses
            .iter()
            .enumerate()
            .filter_map(|(r, s)| f(s).map(|v| (self.row_names[r].as_str(), self.format_f64(v))))
            .collect()
    }

    fn write_chunked<W: Write>(
        &self,
        out: &mut W,
        name: &str,
        entries: &[(&str, String)],
    ) -> io::Result<()> {
        for chunk in entries.chunks(self.settings.number_across as usize) {
            let pairs: Vec<(&str, &str)> = chunk.iter().map(|(k, v)| (*k, v.as_str())).collect();
            write_record(out, "", name, &pairs)?;
        }
        Ok(())
    }

    fn row_sense(&self, row: usize) -> RowSense {
        let lower = self.value(self.model.row_lower(row));
        let upper = self.value(self.model.row_upper(row));
        let lower_inf = lower <= -self.infinity;
        let upper_inf = upper >= self.infinity;

        let nonzero = |v: f64| (v != 0.0).then_some(v);
        match (lower_inf, upper_inf) {
            (true, true) => RowSense {
                code: "N",
                rhs: None,
                range: None,
            },
            (true, false) => RowSense {
                code: "L",
                rhs: nonzero(upper),
                range: None,
            },
            (false, true) => RowSense {
                code: "G",
                rhs: nonzero(lower),
                range: None,
            },
            (false, false) if lower == upper => RowSense {
                code: "E",
                rhs: nonzero(lower),
                range: None,
            },
            (false, false) if lower < upper => RowSense {
                code: "L",
                rhs: nonzero(upper),
                range: Some(upper - lower),
            },
            // crossed bounds have no range form; only the upper bound is kept
            (false, false) => {
                log::warn!(
                    "row {} has lower bound {} above upper bound {}; writing it as L {}",
                    self.row_names[row],
                    lower,
                    upper,
                    upper
                );
                RowSense {
                    code: "L",
                    rhs: nonzero(upper),
                    range: None,
                }
            }
        }
    }

    fn value(&self, v: T) -> f64 {
        v.to_f64().unwrap_or(f64::NAN)
    }

    fn format(&self, v: T) -> String {
        self.format_f64(self.value(v))
    }

    fn format_f64(&self, v: f64) -> String {
        format_value(v, self.settings.format)
    }
}

// One fixed-format line: code in field 1 (columns 2-3), name in field 2
// (columns 5-12), then up to two (name, value) pairs starting at columns
// 15 and 40.  Trailing blanks are dropped.

fn write_record<W: Write>(out: &mut W, code: &str, name: &str, pairs: &[(&str, &str)]) -> io::Result<()> {
    let mut line = format!(" {:<2} {:<8}", code, name);
    for (k, (key, value)) in pairs.iter().enumerate() {
        let gap = if k == 0 { "  " } else { "   " };
        line.push_str(&format!("{}{:<8}  {:<12}", gap, key, value));
    }
    writeln!(out, "{}", line.trim_end())
}

fn write_marker<W: Write>(out: &mut W, kind: &str) -> io::Result<()> {
    write_record(out, "", "MARKER", &[("'MARKER'", ""), (kind, "")])
}

#[test]
fn test_gaps_filled_before_settings_check() {
    let mut model = SparseModel::<f64>::new();
    model.set_element(2, 1, 1.0);
    assert!(model.attributes.rows.is_empty());

    let settings = MpsSettings {
        number_across: 0,
        ..MpsSettings::default()
    };
    let mut buf: Vec<u8> = Vec::new();
    assert!(matches!(
        model.write_mps_to(&mut buf, &settings),
        Err(MpsError::Settings(_))
    ));
    assert!(buf.is_empty());
    assert_eq!(model.attributes.rows.len(), 3);
    assert_eq!(model.attributes.columns.len(), 2);
}
