//! Command implementations for the KeySearch CLI.

use std::collections::BTreeMap;
use std::fs;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::convert::{export_csv, export_json, import_json};
use crate::error::{KeySearchError, Result};
use crate::item::{Item, normalize_link};
use crate::search::{SearchRequest, filter_and_search, sort_items};
use crate::storage::{ItemStore, JsonFileStore};

/// Execute a CLI command.
pub fn execute_command(args: KeySearchArgs) -> Result<()> {
    let mut store = JsonFileStore::open(&args.store)?;
    match &args.command {
        Command::Add(add_args) => add_item(add_args.clone(), &mut store, &args),
        Command::Update(update_args) => update_item(update_args.clone(), &mut store, &args),
        Command::Search(search_args) => search_items(search_args.clone(), &store, &args),
        Command::List(list_args) => list_items(list_args.clone(), &store, &args),
        Command::Delete(delete_args) => delete_item(delete_args.clone(), &mut store, &args),
        Command::Import(import_args) => import_items(import_args.clone(), &mut store, &args),
        Command::Export(export_args) => export_items(export_args.clone(), &store, &args),
        Command::Stats => show_stats(&store, &args),
    }
}

/// Add a new item to the store.
fn add_item<S: ItemStore>(cmd: AddArgs, store: &mut S, cli_args: &KeySearchArgs) -> Result<()> {
    let links: Vec<String> = cmd.links.iter().map(|link| normalize_link(link)).collect();
    let item = Item::new(cmd.title)
        .with_identity(cmd.identity)
        .with_kind(cmd.kind)
        .with_tags(cmd.tags)
        .with_links(links)
        .with_content(cmd.content);
    let id = item.id.clone();
    store.put(item)?;

    output_result(
        &format!("Added item {id}"),
        &MutationOutput {
            id: Some(id.clone()),
            affected: 1,
        },
        cli_args,
    )
}

/// Update fields of an existing item, bumping its version.
fn update_item<S: ItemStore>(cmd: UpdateArgs, store: &mut S, cli_args: &KeySearchArgs) -> Result<()> {
    let Some(mut item) = store.get(&cmd.id)? else {
        return Err(KeySearchError::invalid_operation(format!(
            "no item with id '{}'",
            cmd.id
        )));
    };

    if let Some(title) = cmd.title {
        item.title = title;
    }
    if let Some(identity) = cmd.identity {
        item.identity = identity;
    }
    if let Some(kind) = cmd.kind {
        item.kind = kind;
    }
    if let Some(tags) = cmd.tags {
        item.tags = tags;
    }
    if let Some(links) = cmd.links {
        item.links = links.iter().map(|link| normalize_link(link)).collect();
    }
    if let Some(content) = cmd.content {
        item.content = content;
    }
    item.touch();
    store.put(item)?;

    output_result(
        &format!("Updated item {}", cmd.id),
        &MutationOutput {
            id: Some(cmd.id.clone()),
            affected: 1,
        },
        cli_args,
    )
}

/// Run a free-text search over the collection.
fn search_items<S: ItemStore>(cmd: SearchArgs, store: &S, cli_args: &KeySearchArgs) -> Result<()> {
    let items = store.all()?;
    let request = SearchRequest::new()
        .query(cmd.query)
        .identity(cmd.filters.identity.clone())
        .kind(cmd.filters.kind.clone())
        .tag(cmd.filters.tag.clone());

    let mut hits = filter_and_search(&items, &request);
    sort_items(&mut hits, &cmd.filters.sort);
    let total_hits = hits.len();
    if let Some(limit) = cmd.limit {
        hits.truncate(limit);
    }

    output_search_results(
        &SearchOutput {
            hits,
            total_hits,
            sort: cmd.filters.sort,
        },
        cli_args,
    )
}

/// List items with structural filters only.
fn list_items<S: ItemStore>(cmd: ListArgs, store: &S, cli_args: &KeySearchArgs) -> Result<()> {
    search_items(
        SearchArgs {
            query: String::new(),
            filters: cmd.filters,
            limit: cmd.limit,
        },
        store,
        cli_args,
    )
}

/// Delete an item by id.
fn delete_item<S: ItemStore>(cmd: DeleteArgs, store: &mut S, cli_args: &KeySearchArgs) -> Result<()> {
    if !store.delete(&cmd.id)? {
        return Err(KeySearchError::invalid_operation(format!(
            "no item with id '{}'",
            cmd.id
        )));
    }

    output_result(
        &format!("Deleted item {}", cmd.id),
        &MutationOutput {
            id: Some(cmd.id.clone()),
            affected: 1,
        },
        cli_args,
    )
}

/// Import a JSON export into the store.
fn import_items<S: ItemStore>(cmd: ImportArgs, store: &mut S, cli_args: &KeySearchArgs) -> Result<()> {
    let text = fs::read_to_string(&cmd.file)?;
    let items = import_json(&text)?;
    let count = items.len();
    store.put_many(items)?;

    output_result(
        &format!("Imported {count} item(s) from {}", cmd.file.display()),
        &MutationOutput {
            id: None,
            affected: count,
        },
        cli_args,
    )
}

/// Export the filtered, sorted view of the collection to a file.
fn export_items<S: ItemStore>(cmd: ExportArgs, store: &S, cli_args: &KeySearchArgs) -> Result<()> {
    let items = store.all()?;
    let request = SearchRequest::new()
        .query(cmd.query)
        .identity(cmd.filters.identity.clone())
        .kind(cmd.filters.kind.clone())
        .tag(cmd.filters.tag.clone());

    let mut hits = filter_and_search(&items, &request);
    sort_items(&mut hits, &cmd.filters.sort);
    let view: Vec<Item> = hits.into_iter().map(|hit| hit.item).collect();

    let text = match cmd.format {
        ExportFormat::Json => export_json(&view)?,
        // BOM so spreadsheet tools detect UTF-8.
        ExportFormat::Csv => format!("\u{feff}{}", export_csv(&view)?),
    };
    fs::write(&cmd.output, text)?;

    output_result(
        &format!("Exported {} item(s) to {}", view.len(), cmd.output.display()),
        &MutationOutput {
            id: None,
            affected: view.len(),
        },
        cli_args,
    )
}

/// Show collection statistics.
fn show_stats<S: ItemStore>(store: &S, cli_args: &KeySearchArgs) -> Result<()> {
    let items = store.all()?;
    let mut items_by_identity: BTreeMap<String, usize> = BTreeMap::new();
    let mut items_by_type: BTreeMap<String, usize> = BTreeMap::new();
    for item in &items {
        *items_by_identity.entry(item.identity.clone()).or_insert(0) += 1;
        *items_by_type.entry(item.kind.clone()).or_insert(0) += 1;
    }

    output_stats(
        &StoreStats {
            total_items: items.len(),
            items_by_identity,
            items_by_type,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn cli_args(command: Command) -> KeySearchArgs {
        KeySearchArgs {
            store: "unused.json".into(),
            verbose: 0,
            quiet: true,
            output_format: OutputFormat::Human,
            command,
        }
    }

    #[test]
    fn test_add_then_delete() -> Result<()> {
        let mut store = MemoryStore::new();
        let add = AddArgs {
            title: "Budget Plan".to_string(),
            identity: "Company".to_string(),
            kind: "Project".to_string(),
            tags: vec!["finance".to_string()],
            links: vec![r"C:\Docs\plan.xlsx".to_string()],
            content: "Q3 numbers".to_string(),
        };
        let args = cli_args(Command::Stats);
        add_item(add, &mut store, &args)?;
        assert_eq!(store.len(), 1);

        let stored = store.all()?;
        assert_eq!(stored[0].links, vec!["file:///C:/Docs/plan.xlsx"]);

        let id = stored[0].id.clone();
        delete_item(DeleteArgs { id }, &mut store, &args)?;
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_update_bumps_version_and_timestamp() -> Result<()> {
        let mut store = MemoryStore::new();
        let item = Item::new("Draft");
        let id = item.id.clone();
        let before = item.updated_at.clone();
        store.put(item)?;

        let args = cli_args(Command::Stats);
        update_item(
            UpdateArgs {
                id: id.clone(),
                title: Some("Final".to_string()),
                identity: None,
                kind: None,
                tags: Some(vec!["done".to_string()]),
                links: None,
                content: None,
            },
            &mut store,
            &args,
        )?;

        let updated = store.get(&id)?.unwrap();
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.tags, vec!["done"]);
        assert_eq!(updated.version, 2);
        assert!(updated.updated_at >= before);
        Ok(())
    }

    #[test]
    fn test_update_missing_is_an_error() {
        let mut store = MemoryStore::new();
        let args = cli_args(Command::Stats);
        let result = update_item(
            UpdateArgs {
                id: "missing".to_string(),
                title: None,
                identity: None,
                kind: None,
                tags: None,
                links: None,
                content: None,
            },
            &mut store,
            &args,
        );
        assert!(matches!(result, Err(KeySearchError::InvalidOperation(_))));
    }

    #[test]
    fn test_delete_missing_is_an_error() {
        let mut store = MemoryStore::new();
        let args = cli_args(Command::Stats);
        let result = delete_item(
            DeleteArgs {
                id: "missing".to_string(),
            },
            &mut store,
            &args,
        );
        assert!(matches!(result, Err(KeySearchError::InvalidOperation(_))));
    }

    #[test]
    fn test_import_upserts_by_id() -> Result<()> {
        let mut store = MemoryStore::new();
        store.put(Item {
            id: "a1".to_string(),
            ..Item::new("Old title")
        })?;

        let items = import_json(r#"[{"id":"a1","title":"New title"}]"#)?;
        store.put_many(items)?;
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a1")?.unwrap().title, "New title");
        Ok(())
    }
}
