//! Per-country forward-fill over the sorted row set.

use atlas_model::MergedRow;

/// Forward-fill each metric column within each country's rows.
///
/// Single streaming pass: carries a last-seen value per metric slot and
/// resets it whenever the country key changes. A null at a country's
/// earliest observed year stays null (no backward-fill), and values
/// never cross country boundaries.
///
/// Rows must already be sorted by `(country_name, year)` ascending.
pub fn forward_fill(rows: &mut [MergedRow]) {
    let mut current_country: Option<String> = None;
    let mut last_seen: [Option<f64>; 3] = [None; 3];

    for row in rows.iter_mut() {
        if current_country.as_deref() != Some(row.country_name.as_str()) {
            current_country = Some(row.country_name.clone());
            last_seen = [None; 3];
        }
        for (slot, carried) in row.values.iter_mut().zip(last_seen.iter_mut()) {
            match *slot {
                Some(value) => *carried = Some(value),
                None => *slot = *carried,
            }
        }
    }
}
