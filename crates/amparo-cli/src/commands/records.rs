//! Generic list/show/remove over any collection.

use amparo_client::{ChildResource, Resource};
use amparo_store::{ChildStore, EntityStore};

use crate::cli::CollectionArg;
use crate::context::AppContext;

pub async fn list(ctx: &mut AppContext, collection: CollectionArg) -> anyhow::Result<()> {
    ctx.require_session()?;
    match collection {
        CollectionArg::Usuarios => list_entity(&mut ctx.participants).await,
        CollectionArg::Empresas => list_entity(&mut ctx.companies).await,
        CollectionArg::Funcionarios => list_entity(&mut ctx.staff).await,
        CollectionArg::Avaliacoes => list_child(&mut ctx.evaluations).await,
        CollectionArg::Entrevistas => list_child(&mut ctx.interviews).await,
        CollectionArg::Encaminhamentos => list_child(&mut ctx.placements).await,
        CollectionArg::Acompanhamentos => list_child(&mut ctx.visits).await,
    }
}

pub async fn show(ctx: &mut AppContext, collection: CollectionArg, id: &str) -> anyhow::Result<()> {
    ctx.require_session()?;
    match collection {
        CollectionArg::Usuarios => show_entity(&mut ctx.participants, id).await,
        CollectionArg::Empresas => show_entity(&mut ctx.companies, id).await,
        CollectionArg::Funcionarios => show_entity(&mut ctx.staff, id).await,
        CollectionArg::Avaliacoes => show_child(&mut ctx.evaluations, id).await,
        CollectionArg::Entrevistas => show_child(&mut ctx.interviews, id).await,
        CollectionArg::Encaminhamentos => show_child(&mut ctx.placements, id).await,
        CollectionArg::Acompanhamentos => show_child(&mut ctx.visits, id).await,
    }
}

pub async fn remove(
    ctx: &mut AppContext,
    collection: CollectionArg,
    id: &str,
    yes: bool,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    if !yes {
        anyhow::bail!("deleting is permanent — re-run with --yes to confirm");
    }
    match collection {
        CollectionArg::Usuarios => remove_entity(&mut ctx.participants, id).await,
        CollectionArg::Empresas => remove_entity(&mut ctx.companies, id).await,
        CollectionArg::Funcionarios => remove_entity(&mut ctx.staff, id).await,
        CollectionArg::Avaliacoes => remove_child(&mut ctx.evaluations, id).await,
        CollectionArg::Entrevistas => remove_child(&mut ctx.interviews, id).await,
        CollectionArg::Encaminhamentos => remove_child(&mut ctx.placements, id).await,
        CollectionArg::Acompanhamentos => remove_child(&mut ctx.visits, id).await,
    }
}

async fn list_entity<T: Resource>(store: &mut EntityStore<T>) -> anyhow::Result<()> {
    store.fetch_all().await;
    if let Some(error) = store.error() {
        anyhow::bail!("{error}");
    }
    println!("{}", serde_json::to_string_pretty(store.items())?);
    Ok(())
}

async fn list_child<T: ChildResource>(store: &mut ChildStore<T>) -> anyhow::Result<()> {
    store.fetch_all().await;
    if let Some(error) = store.error() {
        anyhow::bail!("{error}");
    }
    println!("{}", serde_json::to_string_pretty(store.items())?);
    Ok(())
}

async fn show_entity<T: Resource>(store: &mut EntityStore<T>, id: &str) -> anyhow::Result<()> {
    store.fetch_one(id).await;
    if let Some(error) = store.error() {
        anyhow::bail!("{error}");
    }
    match store.current() {
        Some(record) => {
            println!("{}", serde_json::to_string_pretty(record)?);
            Ok(())
        }
        None => anyhow::bail!("record {id} not found"),
    }
}

async fn show_child<T: ChildResource>(store: &mut ChildStore<T>, id: &str) -> anyhow::Result<()> {
    store.fetch_one(id).await;
    if let Some(error) = store.error() {
        anyhow::bail!("{error}");
    }
    match store.current() {
        Some(record) => {
            println!("{}", serde_json::to_string_pretty(record)?);
            Ok(())
        }
        None => anyhow::bail!("record {id} not found"),
    }
}

async fn remove_entity<T: Resource>(store: &mut EntityStore<T>, id: &str) -> anyhow::Result<()> {
    if store.delete(id).await {
        println!("deleted {id}");
        Ok(())
    } else {
        anyhow::bail!("{}", store.error().unwrap_or("delete failed"))
    }
}

async fn remove_child<T: ChildResource>(store: &mut ChildStore<T>, id: &str) -> anyhow::Result<()> {
    if store.delete(id).await {
        println!("deleted {id}");
        Ok(())
    } else {
        anyhow::bail!("{}", store.error().unwrap_or("delete failed"))
    }
}
