//! Interactive storefront session: a line-based command loop standing in for
//! the original page's filter controls, add/remove buttons and checkout form.

use std::io::Write as _;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use deisishop_app::{Storefront, StorefrontView as _, UiEvent};
use deisishop_core::SortOrder;

use crate::view::TerminalView;

#[derive(Debug, PartialEq)]
pub(crate) enum Command {
    Help,
    List,
    Categories,
    ShowCart,
    Category(String),
    Sort(SortOrder),
    Search(String),
    Add(i64),
    Remove(i64),
    Checkout {
        name: String,
        student: bool,
        coupon: String,
    },
    Quit,
}

pub(crate) async fn run(storefront: &mut Storefront, view: &mut TerminalView) -> Result<()> {
    println!("A carregar produtos...");
    storefront.start(view).await;
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            prompt()?;
            continue;
        }
        match parse_command(line) {
            Ok(Command::Help) => print_help(),
            Ok(Command::List) => view.catalog_updated(&storefront.filtered_catalog()),
            Ok(Command::Categories) => view.categories_updated(storefront.categories()),
            Ok(Command::ShowCart) => {
                view.cart_updated(storefront.cart().items(), storefront.cart().total());
            }
            Ok(Command::Category(category)) => {
                storefront
                    .handle_event(UiEvent::CategorySelected(category), view)
                    .await;
            }
            Ok(Command::Sort(order)) => {
                storefront.handle_event(UiEvent::SortChanged(order), view).await;
            }
            Ok(Command::Search(text)) => {
                storefront.handle_event(UiEvent::SearchChanged(text), view).await;
            }
            Ok(Command::Add(id)) => {
                if storefront.catalog().iter().any(|p| p.id == id) {
                    storefront.handle_event(UiEvent::AddToCart(id), view).await;
                } else {
                    println!("Produto {id} não existe no catálogo.");
                }
            }
            Ok(Command::Remove(id)) => {
                storefront
                    .handle_event(UiEvent::RemoveFromCart(id), view)
                    .await;
            }
            Ok(Command::Checkout {
                name,
                student,
                coupon,
            }) => {
                println!("A processar compra...");
                storefront
                    .handle_event(
                        UiEvent::SubmitCheckout {
                            name,
                            student,
                            coupon,
                        },
                        view,
                    )
                    .await;
            }
            Ok(Command::Quit) => break,
            Err(message) => println!("{message}"),
        }
        prompt()?;
    }
    Ok(())
}

/// Parses one input line. The error string is the usage message to print.
pub(crate) fn parse_command(line: &str) -> Result<Command, String> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Err("comando vazio (use \"help\")".to_string());
    };
    let rest: Vec<&str> = tokens.collect();

    match keyword.to_lowercase().as_str() {
        "help" | "?" => Ok(Command::Help),
        "list" | "produtos" => Ok(Command::List),
        "categories" | "categorias" => Ok(Command::Categories),
        "cart" | "cesto" => Ok(Command::ShowCart),
        // An empty argument clears the filter.
        "category" | "categoria" => Ok(Command::Category(rest.join(" "))),
        "sort" | "ordenar" => rest
            .join(" ")
            .parse::<SortOrder>()
            .map(Command::Sort)
            .map_err(|_| "uso: sort <asc|desc|none>".to_string()),
        "search" | "pesquisa" => Ok(Command::Search(rest.join(" "))),
        "add" | "adicionar" => parse_id(&rest).map(Command::Add),
        "remove" | "remover" => parse_id(&rest).map(Command::Remove),
        "checkout" | "comprar" => parse_checkout(&rest),
        "quit" | "exit" | "sair" => Ok(Command::Quit),
        other => Err(format!("comando desconhecido: {other} (use \"help\")")),
    }
}

fn parse_id(rest: &[&str]) -> Result<i64, String> {
    let [raw] = rest else {
        return Err("uso: add <id> / remove <id>".to_string());
    };
    raw.parse::<i64>()
        .map_err(|_| format!("id inválido: {raw}"))
}

fn parse_checkout(rest: &[&str]) -> Result<Command, String> {
    let mut name_parts: Vec<&str> = Vec::new();
    let mut student = false;
    let mut coupon = String::new();

    let mut tokens = rest.iter();
    while let Some(token) = tokens.next() {
        match *token {
            "--student" => student = true,
            "--coupon" => {
                coupon = tokens
                    .next()
                    .map(|code| (*code).to_string())
                    .ok_or_else(|| {
                        "uso: checkout <nome> [--student] [--coupon CÓDIGO]".to_string()
                    })?;
            }
            part => name_parts.push(part),
        }
    }

    // An empty name is allowed through here; the submitter validates it and
    // answers with the proper inline message.
    Ok(Command::Checkout {
        name: name_parts.join(" "),
        student,
        coupon,
    })
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn print_help() {
    println!();
    println!("Comandos:");
    println!("  list                    mostra os produtos filtrados");
    println!("  categories              mostra as categorias");
    println!("  category <nome>         filtra por categoria (sem nome: todas)");
    println!("  search <texto>          pesquisa no título (sem texto: limpa)");
    println!("  sort <asc|desc|none>    ordena por preço");
    println!("  add <id>                adiciona ao cesto");
    println!("  remove <id>             remove do cesto");
    println!("  cart                    mostra o cesto");
    println!("  checkout <nome> [--student] [--coupon CÓDIGO]");
    println!("  quit                    sai");
}
