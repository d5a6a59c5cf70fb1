use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{EngineError, Result};
use crate::types::DailyLoadPoint;

/// Utvider en glissen liste (dato, belastning) til én rad per kalenderdag.
///
/// Dager uten økt får 0. Flere økter samme dag summeres. NaN-belastning teller som 0.
pub fn densify(loads: &[(NaiveDate, f64)]) -> Result<Vec<DailyLoadPoint>> {
    let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for &(date, load) in loads {
        let load = if load.is_finite() { load } else { 0.0 };
        *per_day.entry(date).or_insert(0.0) += load;
    }

    let (first, last) = match (per_day.keys().next(), per_day.keys().next_back()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Err(EngineError::EmptyInput),
    };

    let days = (last - first).num_days() as usize + 1;
    let mut out = Vec::with_capacity(days);
    for date in first.iter_days().take(days) {
        let load = per_day.get(&date).copied().unwrap_or(0.0);
        out.push(DailyLoadPoint::new(date, load));
    }

    log::debug!("tidslinje: {} økter → {} dager ({first}..={last})", loads.len(), out.len());
    Ok(out)
}
