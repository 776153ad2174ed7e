// SPDX-License-Identifier: MPL-2.0
//! Static showcase data.
//!
//! The records exist only to drive the interactions; nothing here is
//! persisted or fetched.

use crate::ui::data_table::DataTable;

/// Header keys for the records table, resolved through i18n at render time.
pub const RECORD_HEADERS: [&str; 4] = [
    "records-column-area",
    "records-column-category",
    "records-column-schedule",
    "records-column-status",
];

/// Builds the collection records table.
#[must_use]
pub fn records_table() -> DataTable {
    let rows = [
        ["North Hollow", "Paper", "Mon 08:00", "Done"],
        ["North Hollow", "Organic", "Mon 10:30", "Done"],
        ["East Quay", "Plastic", "Tue 09:00", "Planned"],
        ["East Quay", "Glass", "Tue 11:15", "Planned"],
        ["South Field", "Metal", "Wed 07:30", "Planned"],
        ["South Field", "Mixed", "Wed 12:00", "Skipped"],
        ["West Gate", "Paper", "Thu 08:45", "Planned"],
        ["West Gate", "Plastic", "Thu 13:30", "Planned"],
        ["Riverside", "Organic", "Fri 07:00", "Done"],
        ["Riverside", "Glass", "Fri 09:40", "Planned"],
        ["Old Town", "Metal", "Sat 10:00", "Planned"],
        ["Old Town", "Mixed", "Sat 14:20", "Planned"],
    ];

    DataTable::new(
        RECORD_HEADERS.to_vec(),
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_rows_and_matching_headers() {
        let table = records_table();
        assert_eq!(table.header_keys().len(), 4);
        assert!(table.len() >= 10);
        for (_, row) in table.rows() {
            assert_eq!(row.cells().len(), 4);
        }
    }
}
