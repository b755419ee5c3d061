use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info};

use backlog_catalog::{CatalogEndpoints, IgdbClient, ReqwestTransport};
use backlog_cli::pipeline::{ExportOptions, export_backlog, load_mapping};
use backlog_cli::types::ExportResult;

use crate::cli::{CredentialArgs, ExportArgs, LookupArgs, MappingArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    export_backlog(&ExportOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        mapping: args.mapping.clone(),
        dry_run: args.dry_run,
    })
}

pub fn run_mapping(args: &MappingArgs) -> Result<()> {
    let mapping = load_mapping(args.mapping.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Source Column"), header_cell("Report Column")]);
    apply_table_style(&mut table);
    for (source, target) in mapping.pairs() {
        table.add_row(vec![source, target]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_game(args: &LookupArgs) -> Result<()> {
    let client = authenticated_client(&args.credentials)?;
    let game = client
        .game_by_id(args.id)
        .with_context(|| format!("fetch game {}", args.id))?;
    info!(id = game.id, name = %game.name, "fetched game");
    println!("{}", serde_json::to_string_pretty(&game)?);
    Ok(())
}

pub fn run_genre(args: &LookupArgs) -> Result<()> {
    let client = authenticated_client(&args.credentials)?;
    let genre = client
        .genre_by_id(args.id)
        .with_context(|| format!("fetch genre {}", args.id))?;
    info!(id = genre.id, name = %genre.name, "fetched genre");
    println!("{}", serde_json::to_string_pretty(&genre)?);
    Ok(())
}

fn authenticated_client(credentials: &CredentialArgs) -> Result<IgdbClient> {
    let endpoints = CatalogEndpoints {
        auth_url: credentials.auth_url.clone(),
        api_base: credentials.api_base.clone(),
    };
    let mut client = IgdbClient::with_transport(
        ReqwestTransport::new()?,
        credentials.client_id.clone(),
        endpoints,
    );
    debug!(
        auth_url = %client.endpoints().auth_url,
        api_base = %client.endpoints().api_base,
        "authenticating catalog client"
    );
    client
        .request_auth_token(&credentials.client_secret)
        .context("authenticate with Twitch")?;
    Ok(client)
}
