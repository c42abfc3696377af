//! Human-readable display of marginals, probabilistic inputs and test functions.
//!
//! Everything is rendered as `tabled` tables: a marginal as a one-row
//! table, a probabilistic input as a summary followed by one row per
//! marginal.

use std::fmt::{self, Display};

use itertools::Itertools;
use ndarray::{Array1, ArrayView2};
use tabled::{builder::Builder, settings::Style};

use crate::{
    prob_input::{marginal::Marginal, multivariate::ProbInput},
    testfun::function::{TestFunction, UqTestFun},
};

/// Conversion of a component into a row of a table.
trait TableRecord {
    fn columns() -> Vec<String>;

    fn to_record(&self) -> Vec<String>;
}

/// Renders records as a rounded table with a leading `No.` column.
fn to_table<T: TableRecord>(records: &[T]) -> String {
    let mut builder = Builder::default();

    let mut columns = vec!["No.".to_string()];
    columns.extend(T::columns());
    builder.push_record(columns);

    for (idx, record) in records.iter().enumerate() {
        let mut row = vec![(idx + 1).to_string()];
        row.extend(record.to_record());
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

impl TableRecord for Marginal {
    fn columns() -> Vec<String> {
        vec![
            "Name".to_string(),
            "Distribution".to_string(),
            "Parameters".to_string(),
            "Description".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            or_dash(self.name()),
            self.distribution().to_string(),
            format!("[{}]", self.parameters().iter().join(", ")),
            or_dash(self.description()),
        ]
    }
}

impl Display for Marginal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(Marginal::columns());
        builder.push_record(self.to_record());

        let mut table = builder.build();
        table.with(Style::rounded());
        write!(f, "{table}")
    }
}

impl Display for ProbInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(vec!["Name".to_string(), or_dash(self.name())]);
        builder.push_record(vec![
            "Spatial Dimension".to_string(),
            self.spatial_dimension().to_string(),
        ]);
        builder.push_record(vec!["Description".to_string(), or_dash(self.description())]);
        builder.push_record(vec!["Copula".to_string(), self.copula().to_string()]);

        let mut summary = builder.build();
        summary.with(Style::sharp());

        write!(f, "{summary}\n{}", to_table(self.marginals()))
    }
}

impl<F> Display for TestFunction<F>
where
    F: Fn(ArrayView2<'_, f64>, &[f64]) -> Array1<f64>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameterized = self.parameters().is_some_and(|p| !p.is_empty());

        let mut builder = Builder::default();
        builder.push_record(vec!["Function ID".to_string(), or_dash(self.name())]);
        builder.push_record(vec![
            "Spatial Dimension".to_string(),
            self.spatial_dimension().to_string(),
        ]);
        builder.push_record(vec!["Parameterized".to_string(), parameterized.to_string()]);

        let mut table = builder.build();
        table.with(Style::sharp());
        write!(f, "{table}")?;

        if let Some(prob_input) = self.prob_input() {
            write!(f, "\n{prob_input}")?;
        }

        Ok(())
    }
}
