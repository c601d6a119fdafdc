//! Roster ingestion from CSV.
//!
//! The spreadsheet boundary: rows map to attendee records through the
//! header columns `Company`, `LastName` and `FirstName` (case-sensitive;
//! the Spanish headers `Empresa`/`Apellido`/`Nombre` are accepted as a
//! legacy fallback). Rows with all three fields blank are dropped; a
//! header carrying none of the expected columns is an error.

use std::io::Read;
use std::path::Path;

use badge_layout::Attendee;

use crate::types::{BadgeError, Result};

const COLUMNS: [(&str, &str); 3] = [
    ("Company", "Empresa"),
    ("LastName", "Apellido"),
    ("FirstName", "Nombre"),
];

pub async fn load_attendees_from_csv(path: impl AsRef<Path>) -> Result<Vec<Attendee>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let attendees =
        tokio::task::spawn_blocking(move || attendees_from_reader(contents.as_bytes())).await??;

    Ok(attendees)
}

pub fn attendees_from_reader<R: Read>(reader: R) -> Result<Vec<Attendee>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?.clone();
    let [company_col, last_col, first_col] =
        COLUMNS.map(|(name, alias)| find_column(&headers, name, alias));

    if company_col.is_none() && last_col.is_none() && first_col.is_none() {
        return Err(BadgeError::Config(
            "no Company/LastName/FirstName columns found in the CSV header".to_string(),
        ));
    }

    let mut attendees = Vec::new();
    for result in reader.records() {
        let record = result?;
        let field = |col: Option<usize>| col.and_then(|i| record.get(i)).unwrap_or("");
        if let Some(attendee) =
            Attendee::from_fields(field(company_col), field(last_col), field(first_col))
        {
            attendees.push(attendee);
        }
    }

    Ok(attendees)
}

fn find_column(headers: &csv::StringRecord, name: &str, alias: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .or_else(|| headers.iter().position(|h| h.trim() == alias))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_english_headers() {
        let data = "Company,LastName,FirstName\nTsuru,Aguayo,Diego\n";
        let attendees = attendees_from_reader(data.as_bytes()).unwrap();
        assert_eq!(attendees.len(), 1);
        assert_eq!(attendees[0].full_name, "Diego Aguayo");
        assert_eq!(attendees[0].company, "Tsuru");
    }

    #[test]
    fn test_reads_spanish_fallback_headers() {
        let data = "Empresa,Apellido,Nombre\ndavara Abogados,Rangel,María\n";
        let attendees = attendees_from_reader(data.as_bytes()).unwrap();
        assert_eq!(attendees.len(), 1);
        assert_eq!(attendees[0].full_name, "María Rangel");
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let data = "company,lastname,firstname\nTsuru,Aguayo,Diego\n";
        assert!(matches!(
            attendees_from_reader(data.as_bytes()),
            Err(BadgeError::Config(_))
        ));
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let data = "Company,LastName,FirstName\nTsuru,Aguayo,Diego\n, , \nKia,Paz,Ana\n";
        let attendees = attendees_from_reader(data.as_bytes()).unwrap();
        assert_eq!(attendees.len(), 2);
    }

    #[test]
    fn test_partial_rows_survive() {
        let data = "Company,LastName,FirstName\nTsuru,,\n,Rangel,\n";
        let attendees = attendees_from_reader(data.as_bytes()).unwrap();
        assert_eq!(attendees.len(), 2);
        assert_eq!(attendees[0].full_name, "");
        assert_eq!(attendees[1].full_name, "Rangel");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = "Email,Company,Badge,LastName,FirstName\na@b.c,Tsuru,7,Aguayo,Diego\n";
        let attendees = attendees_from_reader(data.as_bytes()).unwrap();
        assert_eq!(attendees.len(), 1);
        assert_eq!(attendees[0].company, "Tsuru");
    }
}
