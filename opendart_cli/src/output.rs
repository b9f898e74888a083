//! Table and JSON rendering for CLI results.

use anyhow::Result;
use opendart_lib::types::Disclosure;
use opendart_lib::Corp;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct CorpRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    corp_code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    corp_name: String,
    #[tabled(rename = "English Name")]
    #[serde(rename = "English Name")]
    corp_eng_name: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    stock_code: String,
    #[tabled(rename = "Modified")]
    #[serde(rename = "Modified")]
    modify_date: String,
}

#[derive(Tabled, Serialize)]
struct DisclosureRow {
    #[tabled(rename = "Filed")]
    #[serde(rename = "Filed")]
    rcept_dt: String,
    #[tabled(rename = "Report")]
    #[serde(rename = "Report")]
    report_nm: String,
    #[tabled(rename = "Filer")]
    #[serde(rename = "Filer")]
    flr_nm: String,
    #[tabled(rename = "Receipt No")]
    #[serde(rename = "Receipt No")]
    rcept_no: String,
}

// -- Row builders --

fn build_corp_rows(corps: &[Corp]) -> Vec<CorpRow> {
    corps
        .iter()
        .map(|c| CorpRow {
            corp_code: c.corp_code.clone(),
            corp_name: c.corp_name.clone(),
            corp_eng_name: c.corp_eng_name.clone().unwrap_or_default(),
            stock_code: c.stock_code.clone().unwrap_or_default(),
            modify_date: c.modify_date.clone(),
        })
        .collect()
}

fn build_disclosure_rows(disclosures: &[Disclosure]) -> Vec<DisclosureRow> {
    disclosures
        .iter()
        .map(|d| DisclosureRow {
            rcept_dt: d.rcept_dt.clone(),
            report_nm: d.report_nm.clone(),
            flr_nm: d.flr_nm.clone(),
            rcept_no: d.rcept_no.clone(),
        })
        .collect()
}

// -- Printers --

pub fn print_corps(corps: &[Corp], format: &OutputFormat) -> Result<()> {
    let rows = build_corp_rows(corps);
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}

pub fn print_disclosures(disclosures: &[Disclosure], format: &OutputFormat) -> Result<()> {
    let rows = build_disclosure_rows(disclosures);
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}
