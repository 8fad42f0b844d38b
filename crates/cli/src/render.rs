// crates/cli/src/render.rs
//! Plain-text tables for the terminal. Column widths are fixed: these are
//! glanceable reports, not a TUI.

use migration_view_api::service_info;
use migration_view_core::{format_capacity_gb, migratable_split, os_distribution, warnings_table};
use migration_view_types::{Assessment, Inventory, Source};

pub fn assessment_table(rows: &[&Assessment]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<36}  {:<28}  {:<14}  {}\n",
        "ID", "NAME", "SOURCE", "CREATED"
    ));
    for a in rows {
        out.push_str(&format!(
            "{:<36}  {:<28}  {:<14}  {}\n",
            a.id,
            truncate(&a.name, 28),
            a.source_type.label(),
            a.created_at.format("%Y-%m-%d %H:%M")
        ));
    }
    if rows.is_empty() {
        out.push_str("(no assessments)\n");
    }
    out
}

pub fn source_table(rows: &[&Source]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<36}  {:<28}  {:<24}  {}\n",
        "ID", "NAME", "STATUS", "CREATED"
    ));
    for s in rows {
        out.push_str(&format!(
            "{:<36}  {:<28}  {:<24}  {}\n",
            s.id,
            truncate(&s.name, 28),
            s.status.label(),
            s.created_at.format("%Y-%m-%d %H:%M")
        ));
    }
    if rows.is_empty() {
        out.push_str("(no discovery sources)\n");
    }
    out
}

/// The full summary report for one source's inventory: headline VM split,
/// OS distribution, migration warnings, and the infrastructure row.
pub fn summary_report(name: &str, inventory: &Inventory, top_os: usize) -> String {
    let mut out = String::new();
    let vms = &inventory.vms;
    let infra = &inventory.infra;
    let split = migratable_split(inventory);

    out.push_str(&format!("Inventory summary for {name}\n\n"));
    out.push_str(&format!(
        "VMs: {} total ({} migratable, {} blocked)\n",
        vms.total, split.migratable, split.blocked
    ));
    out.push_str(&format!(
        "Capacity: {} vCPU, {} memory, {} disk\n\n",
        vms.cpu_cores,
        format_capacity_gb(vms.ram_gb),
        format_capacity_gb(vms.disk_gb)
    ));

    out.push_str("Operating systems:\n");
    let slices = os_distribution(inventory, top_os);
    if slices.is_empty() {
        out.push_str("  (none reported)\n");
    }
    for slice in &slices {
        out.push_str(&format!("  {:<40} {:>6}\n", slice.name, slice.count));
    }

    let warnings = warnings_table(inventory);
    if !warnings.is_empty() {
        out.push_str("\nMigration warnings:\n");
        for issue in &warnings {
            out.push_str(&format!("  {:<40} {:>6}\n", issue.label, issue.count));
        }
    }

    out.push_str(&format!(
        "\nInfrastructure: {} hosts, {} clusters, {} datastores, {} networks\n",
        infra.total_hosts, infra.total_clusters, infra.total_datastores, infra.total_networks
    ));

    match service_info() {
        Some(info) => out.push_str(&format!("Planner service: v{}\n", info.version)),
        None => out.push_str("Planner service: unknown\n"),
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
