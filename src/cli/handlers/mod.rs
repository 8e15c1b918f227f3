use std::error::Error;

use log::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::RecordFields;
use crate::store::RecordStore;
use crate::util::unicode;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one non-interactive subcommand against `store`
pub fn dispatch(
    command: Commands,
    json: bool,
    store: &mut dyn RecordStore,
) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::List => cmd_list(store, json),
        Commands::Show(args) => cmd_show(store, args, json),
        Commands::Add(args) => cmd_add(store, args, json),
        Commands::Done(args) => cmd_done(store, args, json),
        Commands::Rm(args) => cmd_rm(store, args),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &dyn RecordStore, json: bool) -> Result<(), Box<dyn Error>> {
    let records = store.list_all()?;
    if json {
        let out: Vec<RecordJson> = records.iter().map(record_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for record in &records {
            println!("{}", format_record_line(record));
        }
    }
    Ok(())
}

fn cmd_show(store: &dyn RecordStore, args: IdArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let record = store.get(args.id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record_to_json(&record))?);
    } else {
        for line in format_record_detail(&record) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(store: &mut dyn RecordStore, args: AddArgs, json: bool) -> Result<(), Box<dyn Error>> {
    // the editor's fields are single-line; store what it can load back
    let fields = RecordFields::new(
        unicode::flatten_line(&args.title),
        unicode::flatten_line(&args.content.unwrap_or_default()),
        false,
    );
    let id = store.create(&fields)?;
    info!("cli: created todo {}", id);
    if json {
        println!("{}", serde_json::to_string_pretty(&record_to_json(&store.get(id)?))?);
    } else {
        println!("{}", id);
    }
    Ok(())
}

fn cmd_done(store: &mut dyn RecordStore, args: IdArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let record = store.get(args.id)?;
    let mut fields = record.to_fields();
    fields.completed = !fields.completed;
    store.update(record.id, &fields)?;
    info!("cli: todo {} completed={}", record.id, fields.completed);

    let updated = store.get(record.id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record_to_json(&updated))?);
    } else {
        println!("{}", format_record_line(&updated));
    }
    Ok(())
}

fn cmd_rm(store: &mut dyn RecordStore, args: IdArgs) -> Result<(), Box<dyn Error>> {
    store.delete(args.id)?;
    info!("cli: deleted todo {}", args.id);
    println!("deleted {}", args.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{SqliteStore, StoreError};

    fn store_with(titles: &[&str]) -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        for title in titles {
            store.create(&RecordFields::new(*title, "", false)).unwrap();
        }
        store
    }

    #[test]
    fn add_then_done_toggles() {
        let mut store = store_with(&[]);
        let add = AddArgs {
            title: "Buy milk".into(),
            content: Some("2 litres".into()),
        };
        dispatch(Commands::Add(add), false, &mut store).unwrap();
        let record = &store.list_all().unwrap()[0];
        assert_eq!(record.content, "2 litres");
        assert!(!record.completed);

        dispatch(Commands::Done(IdArgs { id: record.id }), false, &mut store).unwrap();
        assert!(store.get(record.id).unwrap().completed);
        dispatch(Commands::Done(IdArgs { id: record.id }), false, &mut store).unwrap();
        assert!(!store.get(record.id).unwrap().completed);
    }

    #[test]
    fn add_rejects_empty_title() {
        let mut store = store_with(&[]);
        let add = AddArgs {
            title: String::new(),
            content: None,
        };
        let err = dispatch(Commands::Add(add), false, &mut store).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::EmptyTitle)
        ));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn add_rejects_title_over_limit() {
        let mut store = store_with(&[]);
        let add = AddArgs {
            title: "t".repeat(80),
            content: None,
        };
        let err = dispatch(Commands::Add(add), false, &mut store).unwrap_err();
        assert_eq!(err.to_string(), "todo title is longer than 50 characters");
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn add_flattens_multiline_content() {
        let mut store = store_with(&[]);
        let add = AddArgs {
            title: "Buy\nmilk".into(),
            content: Some("line1\nline2".into()),
        };
        dispatch(Commands::Add(add), false, &mut store).unwrap();
        let record = &store.list_all().unwrap()[0];
        assert_eq!(record.title, "Buy milk");
        assert_eq!(record.content, "line1 line2");
    }

    #[test]
    fn rm_and_show_unknown_id_fail() {
        let mut store = store_with(&["A"]);
        let id = store.list_all().unwrap()[0].id;
        dispatch(Commands::Rm(IdArgs { id }), false, &mut store).unwrap();
        assert!(store.list_all().unwrap().is_empty());

        let err = dispatch(Commands::Show(IdArgs { id }), true, &mut store).unwrap_err();
        assert_eq!(err.to_string(), format!("todo not found: {}", id));
        assert!(dispatch(Commands::Rm(IdArgs { id }), false, &mut store).is_err());
    }
}
