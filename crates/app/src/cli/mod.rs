use clap::{Parser, Subcommand};

mod order;
mod product;

#[derive(Debug, Parser)]
#[command(name = "verdant-app", about = "Verdant admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Order(order::OrderCommand),
    Product(product::ProductCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Order(command) => order::run(command).await,
            Commands::Product(command) => product::run(command).await,
        }
    }
}
