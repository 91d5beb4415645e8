//! Command-line entry point.
//!
//! Against the in-process backend it runs a short scripted session: a small
//! catalog, two orders, an edit that trips over a deleted pizza, a status change
//! and a delete. Against the REST backend it only loads and prints the current
//! state.

use anyhow::Result;
use clap::Parser;
use pizza_console::config::{Backend, Settings};
use pizza_console::console::OrderConsole;
use pizza_console::lifecycle::{setup_tracing, PizzaSystem};
use pizza_console::model::{list_label_for_code, OrderStatus};
use pizza_console::services::{CatalogService, OrderService, RestBackend, TracingSink};
use std::path::PathBuf;
use tracing::{info, Instrument};

#[derive(Parser, Debug)]
#[command(version, about = "Pizza order console")]
struct Args {
    /// Settings file (defaults to ./pizza-console.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    backend: Option<Backend>,
    #[arg(long)]
    api_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(backend) = args.backend {
        settings.backend = backend;
    }
    if let Some(url) = args.api_base_url {
        settings.api_base_url = url;
    }
    info!(?settings, "Starting");

    match settings.backend {
        Backend::InMemory => {
            let mut console = OrderConsole::new(PizzaSystem::new(settings.actor_buffer), TracingSink);
            scripted_session(&mut console)
                .instrument(tracing::info_span!("scripted_session"))
                .await?;
            print_tables(&console);
            console.into_backend().shutdown().await?;
        }
        Backend::Rest => {
            let mut console = OrderConsole::new(RestBackend::from_settings(&settings)?, TracingSink);
            console.load().await?;
            print_tables(&console);
        }
    }

    Ok(())
}

async fn scripted_session<B>(console: &mut OrderConsole<B, TracingSink>) -> Result<()>
where
    B: CatalogService + OrderService,
{
    console.load().await?;

    let margherita = console.create_pizza("Margherita").await?;
    let diavola = console.create_pizza("Diavola").await?;
    let capricciosa = console.create_pizza("Capricciosa").await?;

    console.open_create();
    console.set_nickname("Mario");
    console.set_status(OrderStatus::Processing);
    console.add_pizza(margherita.id);
    console.add_pizza(diavola.id);
    console.remove_pizza("Margherita");
    let first = console.save().await?;

    console.open_create();
    console.set_nickname("Lucia");
    console.set_status(OrderStatus::Pending);
    console.add_pizza(capricciosa.id);
    console.add_pizza(margherita.id);
    let second = console.save().await?;

    // Diavola disappears while the first order is open: the save is refused locally.
    console.open_edit(first.id)?;
    console.add_pizza(capricciosa.id);
    console.delete_pizza(diavola.id).await?;
    if console.save().await.is_err() {
        console.remove_pizza("Diavola");
        console.save().await?;
    }

    console.update_order_status(second.id, OrderStatus::Fulfilled).await?;
    console.delete_order(second.id).await?;
    Ok(())
}

fn print_tables<B, N>(console: &OrderConsole<B, N>)
where
    B: CatalogService + OrderService,
    N: pizza_console::services::NotificationSink,
{
    println!("{:<6} {}", "ID", "PIZZA");
    for pizza in console.catalog() {
        println!("{:<6} {}", pizza.id.0, pizza.description);
    }
    println!();
    println!("{:<6} {:<12} {:<16} {}", "ID", "NICKNAME", "STATUS", "PIZZE");
    for order in console.orders() {
        let pizzas: Vec<_> = order.pizzas.iter().map(|p| p.description.as_str()).collect();
        println!(
            "{:<6} {:<12} {:<16} {}",
            order.id.0,
            order.nickname,
            list_label_for_code(order.status.code()),
            pizzas.join(", ")
        );
    }
}
