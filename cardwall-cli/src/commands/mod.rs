//! Command implementations for the cardwall CLI

pub mod gesture;
pub mod show;
pub mod workspaces;

use crate::cli::{Cli, Commands};
use crate::exit_codes::EXIT_SUCCESS;
use anyhow::{Context, Result};
use cardwall_api::ApiClient;
use cardwall_board::{BoardId, BoardPage, CardId, DragItem, ListId};
use cardwall_config::CardwallConfig;
use std::sync::Arc;
use tracing::debug;

async fn open(client: &Arc<ApiClient>, board: u64) -> Result<BoardPage<ApiClient>> {
    BoardPage::load(Arc::clone(client), BoardId::from(board))
        .await
        .with_context(|| format!("failed to open board {}", board))
}

/// Run `cli.command` against the configured backend and return the exit code
pub async fn execute(cli: &Cli, config: &CardwallConfig) -> Result<i32> {
    let client = Arc::new(ApiClient::from_settings(&config.api)?);
    debug!(base_url = client.base_url(), command = ?cli.command, "executing command");

    match &cli.command {
        Commands::Workspaces => {
            let all = client.workspaces().await?;
            workspaces::print_workspaces(&all, cli.format)?;
            Ok(EXIT_SUCCESS)
        }
        Commands::Show { board } => {
            let page = open(&client, *board).await?;
            show::print_board(&page, cli.format)?;
            Ok(EXIT_SUCCESS)
        }
        Commands::MoveList { board, list, zone } => {
            let mut page = open(&client, *board).await?;
            let item = DragItem::List(ListId::from(*list));
            let result = gesture::replay_drag(&mut page, item, *zone).await?;
            println!("{}", result);
            Ok(result.exit_code())
        }
        Commands::MoveCard { board, card, zone } => {
            let mut page = open(&client, *board).await?;
            let item = DragItem::Card(CardId::from(*card));
            let result = gesture::replay_drag(&mut page, item, *zone).await?;
            println!("{}", result);
            Ok(result.exit_code())
        }
        Commands::DeleteBoard { board } => {
            let mut page = open(&client, *board).await?;
            page.delete_board().await?;
            println!("deleted board {}", board);
            Ok(EXIT_SUCCESS)
        }
        Commands::AddList { board, title } => {
            let mut page = open(&client, *board).await?;
            let id = page.add_list(title.as_deref()).await?;
            println!("created list {}", id);
            Ok(EXIT_SUCCESS)
        }
        Commands::AddCard {
            board,
            list,
            title,
            content,
        } => {
            let mut page = open(&client, *board).await?;
            let id = page
                .add_card(ListId::from(*list), title.as_deref(), content.as_deref())
                .await?;
            println!("created card {}", id);
            Ok(EXIT_SUCCESS)
        }
        Commands::DeleteList { board, list } => {
            let mut page = open(&client, *board).await?;
            page.delete_list(ListId::from(*list)).await?;
            println!("deleted list {}", list);
            Ok(EXIT_SUCCESS)
        }
        Commands::DeleteCard { board, card } => {
            let mut page = open(&client, *board).await?;
            page.delete_card(CardId::from(*card)).await?;
            println!("deleted card {}", card);
            Ok(EXIT_SUCCESS)
        }
    }
}
