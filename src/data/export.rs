use std::fs;

use crate::data::types::TeamMember;

/// Export the fetched roster to CSV format.
///
/// Columns: wallet_address, name, tasks_assigned, tasks_completed, active
pub fn export_roster_csv(roster: &[TeamMember], path: &str) -> Result<String, String> {
    let file = fs::File::create(path).map_err(|e| format!("Failed to create file: {e}"))?;
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "wallet_address",
        "name",
        "tasks_assigned",
        "tasks_completed",
        "active",
    ])
    .map_err(|e| format!("Failed to write CSV header: {e}"))?;

    for member in roster {
        wtr.write_record(&[
            format!("{:#x}", member.wallet_address),
            member.name.clone(),
            member.tasks_assigned.to_string(),
            member.tasks_completed.to_string(),
            member.active.to_string(),
        ])
        .map_err(|e| format!("Failed to write CSV row: {e}"))?;
    }

    wtr.flush().map_err(|e| format!("Failed to flush CSV: {e}"))?;

    Ok(format!("Exported {} members to {path}", roster.len()))
}

/// Default export path, timestamped so repeated exports don't clobber
/// each other.
pub fn default_export_path() -> String {
    let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(std::env::temp_dir);
    dir.join(format!("team-roster-{stamp}.csv"))
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};
    use std::fs;

    fn sample_roster() -> Vec<TeamMember> {
        vec![
            TeamMember {
                wallet_address: Address::from_slice(&[0x01; 20]),
                name: "Alice".to_string(),
                tasks_assigned: U256::from(4u64),
                tasks_completed: U256::from(2u64),
                active: true,
            },
            TeamMember {
                wallet_address: Address::from_slice(&[0x02; 20]),
                name: "Bob".to_string(),
                tasks_assigned: U256::from(1u64),
                tasks_completed: U256::from(1u64),
                active: false,
            },
        ]
    }

    #[test]
    fn test_export_roster_csv() {
        let roster = sample_roster();
        let path = "/tmp/team-tui-test-roster.csv";
        let result = export_roster_csv(&roster, path);
        assert!(result.is_ok());

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("wallet_address"));
        assert!(contents.contains("Alice"));
        assert!(contents.contains("Bob"));
        assert!(contents.contains("false"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_export_roster_csv_empty() {
        let path = "/tmp/team-tui-test-roster-empty.csv";
        let result = export_roster_csv(&[], path);
        assert!(result.is_ok());
        assert!(result.unwrap().contains("0 members"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_default_export_path() {
        let path = default_export_path();
        assert!(path.contains("team-roster-"));
        assert!(path.ends_with(".csv"));
    }
}
