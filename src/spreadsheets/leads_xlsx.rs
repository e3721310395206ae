use crate::leads::{LeadRecord, LeadsError};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

pub const SHEET_NAME: &str = "Leads";

pub const HEADERS: [&str; 6] = [
    "Company Name",
    "Phone",
    "Email",
    "Address",
    "Latitude",
    "Longitude",
];

/// Download name for a region's export, e.g. `Viman_Nagar_pvt_leads.xlsx`.
pub fn leads_filename(region: &str) -> String {
    format!("{}_pvt_leads.xlsx", region.replace(' ', "_"))
}

pub fn leads_to_xlsx(leads: &[LeadRecord]) -> Result<Vec<u8>, LeadsError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name(SHEET_NAME)
        .map_err(|e| xlsx_err("set sheet name", e))?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| xlsx_err(header, e))?;
    }

    for (i, lead) in leads.iter().enumerate() {
        write_lead(worksheet, (i + 1) as u32, lead)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| xlsx_err("save workbook", e))
}

fn write_lead(worksheet: &mut Worksheet, r: u32, lead: &LeadRecord) -> Result<(), LeadsError> {
    // Blank cells for absent values, matching an empty DataFrame cell.
    if let Some(name) = lead.company_name.as_deref() {
        worksheet
            .write_string(r, 0, name)
            .map_err(|e| xlsx_err("company name", e))?;
    }

    worksheet
        .write_string(r, 1, &lead.phone)
        .map_err(|e| xlsx_err("phone", e))?;

    if let Some(email) = lead.email.as_deref() {
        worksheet
            .write_string(r, 2, email)
            .map_err(|e| xlsx_err("email", e))?;
    }

    if !lead.address.is_empty() {
        worksheet
            .write_string(r, 3, &lead.address)
            .map_err(|e| xlsx_err("address", e))?;
    }

    if let Some(lat) = lead.latitude {
        worksheet
            .write_number(r, 4, lat)
            .map_err(|e| xlsx_err("latitude", e))?;
    }

    if let Some(lon) = lead.longitude {
        worksheet
            .write_number(r, 5, lon)
            .map_err(|e| xlsx_err("longitude", e))?;
    }

    Ok(())
}

fn xlsx_err(what: &str, e: XlsxError) -> LeadsError {
    LeadsError::Serialization(format!("Failed to write {what}: {e}"))
}
