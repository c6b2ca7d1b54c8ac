use std::io::Write;

use anyhow::{bail, Result};
use inventory_core::{
    site_list, CategoryTag, Dashboard, Item, ItemUpdate, JobSiteId, JobSiteRepository,
    JobSiteStatus, NewJobSite, StorageAdapter,
};

/// Changes requested for one item.
#[derive(Debug, Default, Clone)]
pub struct ItemChanges {
    pub item: Option<String>,
    pub quantity: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

pub fn list_sites<S: StorageAdapter>(
    repo: &JobSiteRepository<S>,
    search: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let rows = site_list::rows(repo, search.unwrap_or_default());
    if rows.is_empty() {
        writeln!(out, "No job sites found.")?;
        return Ok(());
    }

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(4).max(4);
    writeln!(out, "{:>4}  {:<name_width$}  {:<12}  Categories", "ID", "Name", "Status")?;
    for row in rows {
        writeln!(
            out,
            "{:>4}  {:<name_width$}  {:<12}  {}",
            row.id,
            row.name,
            row.status.to_string(),
            row.category_labels.join(", ")
        )?;
    }
    Ok(())
}

pub fn create_site<S: StorageAdapter>(
    repo: &mut JobSiteRepository<S>,
    name: &str,
    categories: Vec<CategoryTag>,
    status: JobSiteStatus,
    out: &mut impl Write,
) -> Result<()> {
    let mut form = NewJobSite::new().with_name(name).with_status(status);
    for category in categories {
        form.add_category(category);
    }
    let site = repo.create_from(form)?;
    writeln!(out, "Created job site {} ({})", site.id, site.name)?;
    Ok(())
}

pub fn list_items<S: StorageAdapter>(
    repo: &mut JobSiteRepository<S>,
    site: JobSiteId,
    category: CategoryTag,
    search: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let mut dashboard = open_dashboard(repo, site)?;
    dashboard.select_category(repo, category);
    if let Some(term) = search {
        dashboard.set_search(term);
    }

    writeln!(out, "{} / {}", dashboard.job_site_name(), category.label())?;
    write_items(&dashboard.visible_items(), out)
}

pub fn edit_item<S: StorageAdapter>(
    repo: &mut JobSiteRepository<S>,
    site: JobSiteId,
    category: CategoryTag,
    item_id: u32,
    changes: ItemChanges,
    out: &mut impl Write,
) -> Result<()> {
    let mut dashboard = open_dashboard(repo, site)?;
    dashboard.select_category(repo, category);
    if !dashboard.begin_edit(item_id) {
        bail!("Item {item_id} not found in {}", category.label());
    }

    if let Some(draft) = dashboard.draft_mut() {
        if let Some(item) = changes.item {
            draft.item = item;
        }
        if let Some(quantity) = changes.quantity {
            draft.quantity = quantity;
        }
        if let Some(description) = changes.description {
            draft.description = description;
        }
        if let Some(notes) = changes.notes {
            draft.notes = notes;
        }
    }

    match dashboard.save_edit(repo)? {
        ItemUpdate::Applied => {
            writeln!(out, "Saved item {item_id}")?;
            write_items(&dashboard.visible_items(), out)
        }
        ItemUpdate::ItemNotFound => bail!("Item {item_id} not found in {}", category.label()),
        ItemUpdate::JobSiteNotFound => bail!("Job site {site} not found"),
    }
}

pub fn list_categories(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Categories:")?;
    for category in CategoryTag::all() {
        writeln!(
            out,
            "  {:<14} {:<14} {}",
            category.key(),
            category.label(),
            category.color()
        )?;
    }
    writeln!(out, "Statuses:")?;
    for status in JobSiteStatus::all() {
        writeln!(out, "  {:<14} {}", status.to_string(), status.color())?;
    }
    Ok(())
}

fn open_dashboard<S: StorageAdapter>(
    repo: &JobSiteRepository<S>,
    site: JobSiteId,
) -> Result<Dashboard> {
    match Dashboard::open(repo, site) {
        Some(dashboard) => Ok(dashboard),
        None => bail!("Job site {site} not found"),
    }
}

fn write_items(items: &[&Item], out: &mut impl Write) -> Result<()> {
    if items.is_empty() {
        writeln!(out, "No items.")?;
        return Ok(());
    }

    let item_width = items.iter().map(|i| i.item.len()).max().unwrap_or(4).max(4);
    writeln!(
        out,
        "{:>3}  {:<item_width$}  {:>8}  {:<32}  Notes",
        "No.", "Item", "Quantity", "Description"
    )?;
    for (index, item) in items.iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:<item_width$}  {:>8}  {:<32}  {}",
            index + 1,
            item.item,
            item.quantity,
            item.description,
            item.notes
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{CategoryDataGenerator, MemoryStorage};

    fn repo() -> JobSiteRepository<MemoryStorage> {
        JobSiteRepository::with_generator(MemoryStorage::new(), CategoryDataGenerator::seeded(5))
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_site_list() {
        let mut out = Vec::new();
        list_sites(&repo(), None, &mut out).unwrap();
        assert_eq!(output(out), "No job sites found.\n");
    }

    #[test]
    fn created_site_is_listed() {
        let mut repo = repo();
        let mut out = Vec::new();
        create_site(
            &mut repo,
            "Elm Street",
            vec![CategoryTag::SidewalkShed, CategoryTag::Shoring],
            JobSiteStatus::OnHold,
            &mut out,
        )
        .unwrap();
        assert_eq!(output(out), "Created job site 1 (Elm Street)\n");

        let mut out = Vec::new();
        list_sites(&repo, Some("elm"), &mut out).unwrap();
        let text = output(out);
        assert!(text.contains("Elm Street"));
        assert!(text.contains("On Hold"));
        assert!(text.contains("Sidewalk Shed, Shoring"));
    }

    #[test]
    fn duplicate_site_reports_notice() {
        let mut repo = repo();
        let mut out = Vec::new();
        let shoring = vec![CategoryTag::Shoring];
        create_site(&mut repo, "Elm", shoring.clone(), JobSiteStatus::Completed, &mut out).unwrap();
        let err = create_site(&mut repo, "ELM", shoring, JobSiteStatus::Completed, &mut out)
            .unwrap_err();
        assert_eq!(err.to_string(), "A job site with this name already exists!");
    }

    #[test]
    fn blank_name_is_a_validation_notice() {
        let mut repo = repo();
        let mut out = Vec::new();
        let err = create_site(
            &mut repo,
            "  ",
            vec![CategoryTag::Scaffold],
            JobSiteStatus::InProgress,
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Please fill out all the fields!"));
        assert!(repo.list().is_empty());
    }

    #[test]
    fn repeated_category_is_kept_once() {
        let mut repo = repo();
        let mut out = Vec::new();
        create_site(
            &mut repo,
            "Elm",
            vec![CategoryTag::Shoring, CategoryTag::Scaffold, CategoryTag::Shoring],
            JobSiteStatus::InProgress,
            &mut out,
        )
        .unwrap();
        assert_eq!(
            repo.list()[0].categories,
            vec![CategoryTag::Shoring, CategoryTag::Scaffold]
        );
    }

    #[test]
    fn edit_changes_only_requested_fields() {
        let mut repo = repo();
        let site = repo
            .create("Elm", [CategoryTag::Scaffold], JobSiteStatus::InProgress)
            .unwrap();
        let mut out = Vec::new();

        edit_item(
            &mut repo,
            site.id,
            CategoryTag::Scaffold,
            3,
            ItemChanges {
                quantity: Some("42".to_string()),
                ..Default::default()
            },
            &mut out,
        )
        .unwrap();

        let items = repo.get_category_items(site.id, CategoryTag::Scaffold);
        assert_eq!(items[2].quantity, 42);
        assert_eq!(items[2].item, "Scaffold Item 3");
        assert_eq!(items[2].notes, "Notes for Scaffold Item 3");
        assert!(output(out).starts_with("Saved item 3\n"));
    }

    #[test]
    fn edit_unknown_item_fails() {
        let mut repo = repo();
        let site = repo
            .create("Elm", [CategoryTag::Scaffold], JobSiteStatus::InProgress)
            .unwrap();
        let mut out = Vec::new();
        let result = edit_item(
            &mut repo,
            site.id,
            CategoryTag::Scaffold,
            9,
            ItemChanges::default(),
            &mut out,
        );
        assert!(result.is_err());
    }

    #[test]
    fn items_for_unknown_site_fail() {
        let mut repo = repo();
        let mut out = Vec::new();
        let err = list_items(&mut repo, JobSiteId::new(4), CategoryTag::Shoring, None, &mut out)
            .unwrap_err();
        assert_eq!(err.to_string(), "Job site 4 not found");
    }

    #[test]
    fn item_search_filters_rows() {
        let mut repo = repo();
        let site = repo
            .create("Elm", [CategoryTag::Shoring], JobSiteStatus::InProgress)
            .unwrap();
        let mut out = Vec::new();
        list_items(&mut repo, site.id, CategoryTag::Shoring, Some("item 4"), &mut out).unwrap();

        let text = output(out);
        assert!(text.contains("Shoring Item 4"));
        assert!(!text.contains("Shoring Item 1"));
    }
}
