use crate::leads::LeadRecord;
use crate::spreadsheets::leads_xlsx::HEADERS;
use maud::{html, Markup};

fn coord(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.6}")).unwrap_or_default()
}

pub fn leads_table(leads: &[LeadRecord], limit: usize) -> Markup {
    html! {
        table {
            thead {
                tr {
                    @for header in HEADERS {
                        th scope="col" { (header) }
                    }
                }
            }
            tbody {
                @for lead in leads.iter().take(limit) {
                    tr {
                        td { (lead.company_name.as_deref().unwrap_or("")) }
                        td { (lead.phone) }
                        td { (lead.email.as_deref().unwrap_or("")) }
                        td { (lead.address) }
                        td { (coord(lead.latitude)) }
                        td { (coord(lead.longitude)) }
                    }
                }
            }
        }
    }
}
