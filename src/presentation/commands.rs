// Command handlers - Map CLI commands onto the dashboards page
use crate::application::dashboards_page::{DashboardsPage, ErrorBoundary, PageView, Screen};
use crate::domain::dashboard::Dashboard;
use crate::presentation::cli::Command;
use anyhow::{bail, Context};
use std::collections::HashSet;

pub async fn run(page: &DashboardsPage, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List => match ErrorBoundary::render(page) {
            Screen::Page(view) => print!("{}", format_view(&view)),
            Screen::Fallback(message) => bail!(message),
        },
        Command::Show { id } => {
            let dashboard = lookup(page, &id)?;
            if let Some(fresh) = page.fetch_dashboard(&dashboard).await {
                println!("{}", serde_json::to_string_pretty(&fresh)?);
            }
        }
        Command::Create => {
            page.create_dashboard().await;
        }
        Command::Clone { id } => {
            let dashboard = lookup(page, &id)?;
            page.clone_dashboard(&dashboard).await;
        }
        Command::Delete { ids } => {
            let dashboards = unique_ids(&ids)
                .into_iter()
                .map(|id| lookup(page, id))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let service = page.service();
            futures::future::join_all(dashboards.into_iter().map(|d| service.delete(d))).await;
        }
        Command::Export { id } => {
            let dashboard = lookup(page, &id)?;
            page.export_dashboard(&dashboard).await;
        }
        Command::Import { file } => {
            let text = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let document: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("{} is not valid JSON", file.display()))?;
            page.import_dashboard(&document).await;
        }
        Command::Rename { id, name } => {
            let dashboard = lookup(page, &id)?;
            page.rename_dashboard(&dashboard, &name).await;
        }
    }

    Ok(())
}

fn lookup(page: &DashboardsPage, id: &str) -> anyhow::Result<Dashboard> {
    match page.state().find(id) {
        Some(dashboard) => Ok(dashboard),
        None => bail!("No dashboard with id {} at {}", id, page.links().dashboards),
    }
}

/// Keep the first occurrence of each id; two in-flight deletes of one
/// dashboard would have the second roll back the first.
fn unique_ids(ids: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    ids.iter()
        .map(String::as_str)
        .filter(|id| seen.insert(*id))
        .collect()
}

fn format_view(view: &PageView) -> String {
    let mut out = format!("{} ({})\n", view.title, view.dashboard_link);
    if view.rows.is_empty() {
        out.push_str("  no dashboards\n");
        return out;
    }

    let id_width = view.rows.iter().map(|r| r.id.chars().count()).max().unwrap_or(0);
    let name_width = view.rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    for row in &view.rows {
        out.push_str(&format!(
            "  {:id_width$}  {:name_width$}  {:>3} cells  {}\n",
            row.id, row.name, row.cell_count, row.href
        ));
    }
    out
}
