use anyhow::Context;
use clap::Parser;
use phonebook::cli::{run_browse, run_list, run_search, run_show, Cli, Commands};
use phonebook::config::Config;
use phonebook::import::load_records;
use phonebook::logging::init_tracing;
use phonebook::store::{ContactStore, MemoryStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    init_tracing(&config);

    let records = match config.contacts_file(cli.file.as_deref()) {
        Some(path) => load_records(path)
            .with_context(|| format!("Failed to load contacts from {}", path.display()))?,
        None => {
            tracing::info!("no contacts file configured, starting empty");
            Vec::new()
        }
    };
    let mut store = MemoryStore::with_records(records);

    match cli.command {
        None | Some(Commands::Browse) => {
            run_browse(&mut store)?;
        }
        Some(Commands::List) => {
            run_list(&store.phones_not_in_trash())?;
        }
        Some(Commands::Search(args)) => {
            run_search(&store.phones_not_in_trash(), &args.query, args.json)?;
        }
        Some(Commands::Show(args)) => {
            run_show(&store.phones_not_in_trash(), args.id)?;
        }
    }

    Ok(())
}
