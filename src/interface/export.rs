use std::path::Path;

use crate::error::Result;
use crate::interface::render::comparison_rows;
use crate::models::Plan;

/// Write the side-by-side comparison table to a CSV file.
///
/// Same rows as the terminal table: one header row of plan names, one record
/// per feature.
pub fn export_comparison_csv<P: AsRef<Path>>(path: P, plans: &[&Plan]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["Feature".to_string()];
    header.extend(plans.iter().map(|p| p.plan_name.clone()));
    writer.write_record(&header)?;

    for row in comparison_rows() {
        let mut record = vec![row.label.to_string()];
        record.extend(plans.iter().map(|p| (row.value)(p)));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
