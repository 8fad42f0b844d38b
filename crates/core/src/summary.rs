// crates/core/src/summary.rs
//! Chart/table transforms over an inventory snapshot.
//!
//! All pure: the CLI (and the browser dashboard, via the same shapes) feeds
//! these straight into rendering.

use migration_view_types::{Inventory, MigrationIssue};

/// One slice of the operating-system distribution donut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsSlice {
    pub name: String,
    pub count: u64,
}

/// Operating-system distribution: descending by count, ties broken by name,
/// capped at `top` named slices with everything else summed into "Other".
pub fn os_distribution(inventory: &Inventory, top: usize) -> Vec<OsSlice> {
    let mut slices: Vec<OsSlice> = inventory
        .vms
        .os
        .iter()
        .map(|(name, count)| OsSlice {
            name: name.clone(),
            count: *count,
        })
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

    if slices.len() > top {
        let other: u64 = slices[top..].iter().map(|s| s.count).sum();
        slices.truncate(top);
        slices.push(OsSlice {
            name: "Other".to_string(),
            count: other,
        });
    }
    slices
}

/// Migratable-vs-blocked VM split for the headline donut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigratableSplit {
    pub migratable: u64,
    pub blocked: u64,
}

pub fn migratable_split(inventory: &Inventory) -> MigratableSplit {
    let vms = &inventory.vms;
    MigratableSplit {
        migratable: vms.total_migratable.min(vms.total),
        blocked: vms.total.saturating_sub(vms.total_migratable),
    }
}

/// Migration warnings, most-affected first, ties broken by label.
pub fn warnings_table(inventory: &Inventory) -> Vec<MigrationIssue> {
    let mut rows = inventory.vms.migration_warnings.clone();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}

/// Human-readable capacity from a GiB count: "512 GiB", "2.0 TiB".
pub fn format_capacity_gb(gb: u64) -> String {
    if gb < 1024 {
        format!("{gb} GiB")
    } else {
        format!("{:.1} TiB", gb as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration_view_types::VmSummary;
    use pretty_assertions::assert_eq;

    fn inventory_with_os(counts: &[(&str, u64)]) -> Inventory {
        let mut vms = VmSummary::default();
        for (name, count) in counts {
            vms.os.insert((*name).to_string(), *count);
        }
        Inventory {
            vms,
            ..Inventory::default()
        }
    }

    #[test]
    fn test_os_distribution_orders_and_buckets() {
        let inv = inventory_with_os(&[
            ("RHEL 9", 12),
            ("Windows Server 2019", 30),
            ("Ubuntu 22.04", 12),
            ("SLES 15", 2),
            ("FreeBSD 14", 1),
        ]);
        let slices = os_distribution(&inv, 3);
        let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
        // Ties (RHEL/Ubuntu at 12) break alphabetically; the tail sums to Other.
        assert_eq!(
            names,
            vec!["Windows Server 2019", "RHEL 9", "Ubuntu 22.04", "Other"]
        );
        assert_eq!(slices.last().unwrap().count, 3);
    }

    #[test]
    fn test_os_distribution_without_overflow_has_no_other() {
        let inv = inventory_with_os(&[("RHEL 9", 5), ("Windows Server 2019", 2)]);
        let slices = os_distribution(&inv, 10);
        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| s.name != "Other"));
    }

    #[test]
    fn test_migratable_split_clamps_bad_server_data() {
        let mut inv = Inventory::default();
        inv.vms.total = 10;
        inv.vms.total_migratable = 12; // server regression; never underflow
        let split = migratable_split(&inv);
        assert_eq!(split.migratable, 10);
        assert_eq!(split.blocked, 0);

        inv.vms.total_migratable = 7;
        let split = migratable_split(&inv);
        assert_eq!(split.migratable, 7);
        assert_eq!(split.blocked, 3);
    }

    #[test]
    fn test_warnings_table_sorted_by_impact() {
        let mut inv = Inventory::default();
        inv.vms.migration_warnings = vec![
            MigrationIssue {
                label: "Changed Block Tracking disabled".into(),
                count: 4,
                assessment: None,
            },
            MigrationIssue {
                label: "Independent disk".into(),
                count: 9,
                assessment: None,
            },
            MigrationIssue {
                label: "USB passthrough".into(),
                count: 4,
                assessment: None,
            },
        ];
        let rows = warnings_table(&inv);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Independent disk",
                "Changed Block Tracking disabled",
                "USB passthrough"
            ]
        );
    }

    #[test]
    fn test_format_capacity() {
        assert_eq!(format_capacity_gb(0), "0 GiB");
        assert_eq!(format_capacity_gb(512), "512 GiB");
        assert_eq!(format_capacity_gb(1024), "1.0 TiB");
        assert_eq!(format_capacity_gb(2560), "2.5 TiB");
    }
}
