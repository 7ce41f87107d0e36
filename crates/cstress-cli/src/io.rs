//! CSV input and output.
//!
//! The input boundary is two CSV tables: `Portfolio` (loan-level) and
//! `Scenario_Uplifts` (sector x scenario). Headers are verified up front so a schema error names all
//! missing columns at once; numeric fields are parsed strictly and a
//! failure aborts the load with full cell context.

use std::collections::HashMap;
use std::path::Path;

use csv::StringRecord;

use cstress_core::schema::{self, PORTFOLIO_COLUMNS, PORTFOLIO_TABLE, UPLIFTS_TABLE};
use cstress_core::{Loan, Scenario, SectorUplift, StressError, UpliftPair};
use cstress_engine::{ClimateVarSummary, DimensionSummary, ScenarioResult};

use crate::error::CliResult;

/// Maps column names to their positions in the header row.
fn column_index(header: &StringRecord) -> HashMap<String, usize> {
    header
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim().to_string(), i))
        .collect()
}

/// Reads a cell by column name; a column absent from the header map reads
/// as empty rather than panicking, so numeric columns fall through to a
/// type-conversion error.
fn field<'a>(record: &'a StringRecord, index: &HashMap<String, usize>, column: &str) -> &'a str {
    index
        .get(column)
        .and_then(|&i| record.get(i))
        .unwrap_or("")
        .trim()
}

fn numeric_field(
    table: &str,
    record: &StringRecord,
    index: &HashMap<String, usize>,
    column: &str,
    row: usize,
) -> CliResult<f64> {
    let raw = field(record, index, column);
    raw.parse::<f64>()
        .map_err(|_| StressError::type_conversion(table, column, row, raw).into())
}

/// Loads the portfolio table.
///
/// # Errors
///
/// [`StressError::Schema`] if required columns are absent,
/// [`StressError::TypeConversion`] if a numeric field fails to parse,
/// or a CSV/IO error from the underlying reader.
pub fn load_portfolio(path: impl AsRef<Path>) -> CliResult<Vec<Loan>> {
    let mut reader = csv::Reader::from_path(path)?;

    let header: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let required: Vec<String> = PORTFOLIO_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    schema::check_columns(PORTFOLIO_TABLE, &header, &required)?;

    let index = column_index(reader.headers()?);
    let mut loans = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;
        loans.push(Loan {
            loan_id: field(&record, &index, "loan_id").to_string(),
            sector: field(&record, &index, "sector").to_string(),
            country: field(&record, &index, "country").to_string(),
            region: field(&record, &index, "region").to_string(),
            ead_eur: numeric_field(PORTFOLIO_TABLE, &record, &index, "EAD_EUR", row)?,
            pd_base: numeric_field(PORTFOLIO_TABLE, &record, &index, "PD_base", row)?,
            lgd: numeric_field(PORTFOLIO_TABLE, &record, &index, "LGD", row)?,
            maturity_years: numeric_field(PORTFOLIO_TABLE, &record, &index, "maturity_years", row)?,
        });
    }

    Ok(loans)
}

/// Loads the scenario uplift table.
///
/// # Errors
///
/// Same taxonomy as [`load_portfolio`].
pub fn load_uplifts(path: impl AsRef<Path>) -> CliResult<Vec<SectorUplift>> {
    let mut reader = csv::Reader::from_path(path)?;

    let header: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    schema::check_columns(UPLIFTS_TABLE, &header, &schema::uplift_columns())?;

    let index = column_index(reader.headers()?);
    let mut uplifts = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;

        let mut pairs = [UpliftPair::new(0.0, 0.0); 3];
        for (slot, scenario) in Scenario::ALL.iter().enumerate() {
            pairs[slot] = UpliftPair::new(
                numeric_field(UPLIFTS_TABLE, &record, &index, &scenario.pd_uplift_column(), row)?,
                numeric_field(UPLIFTS_TABLE, &record, &index, &scenario.lgd_uplift_column(), row)?,
            );
        }

        uplifts.push(SectorUplift::new(
            field(&record, &index, "sector").to_string(),
            pairs[0],
            pairs[1],
            pairs[2],
        ));
    }

    Ok(uplifts)
}

/// Writes a loan-level scenario result as `results_<Scenario>.csv`,
/// identity columns first, derived columns after.
pub fn write_results(outdir: &Path, result: &ScenarioResult) -> CliResult<()> {
    let path = outdir.join(format!("results_{}.csv", result.scenario));
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "scenario",
        "loan_id",
        "sector",
        "country",
        "region",
        "EAD_EUR",
        "PD_base",
        "PD_stress",
        "dPD",
        "LGD",
        "LGD_stress",
        "maturity_years",
        "pd_uplift",
        "lgd_uplift",
        "loss_projected",
    ])?;

    for row in &result.rows {
        writer.write_record(&[
            result.scenario.to_string(),
            row.loan_id.clone(),
            row.sector.clone(),
            row.country.clone(),
            row.region.clone(),
            row.ead_eur.to_string(),
            row.pd_base.to_string(),
            row.pd_stress.to_string(),
            row.d_pd.to_string(),
            row.lgd.to_string(),
            row.lgd_stress.to_string(),
            row.maturity_years.to_string(),
            row.pd_uplift.to_string(),
            row.lgd_uplift.to_string(),
            row.loss_projected.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes a dimension summary as `summary_by_<dim>_<Scenario>.csv`.
pub fn write_summary(outdir: &Path, summary: &DimensionSummary) -> CliResult<()> {
    let path = outdir.join(format!(
        "summary_by_{}_{}.csv",
        summary.dimension, summary.scenario
    ));
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        summary.dimension.as_str(),
        "n_loans",
        "EAD_EUR",
        "loss_projected",
        "avg_PD_base",
        "avg_PD_stress",
        "avg_LGD",
        "avg_LGD_stress",
        "loss_rate_on_EAD",
    ])?;

    for group in &summary.groups {
        writer.write_record(&[
            group.key.clone(),
            group.n_loans.to_string(),
            group.ead_eur.to_string(),
            group.loss_projected.to_string(),
            group.avg_pd_base.to_string(),
            group.avg_pd_stress.to_string(),
            group.avg_lgd.to_string(),
            group.avg_lgd_stress.to_string(),
            group.loss_rate_on_ead.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the cross-scenario summary as `climate_var_summary.csv`:
/// one row per scenario plus the labeled quantile row.
pub fn write_var_summary(outdir: &Path, summary: &ClimateVarSummary) -> CliResult<()> {
    let path = outdir.join("climate_var_summary.csv");
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["scenario", "total_loss_projected"])?;
    for (label, value) in summary.rows() {
        writer.write_record(&[label, value.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}
