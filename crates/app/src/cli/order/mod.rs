use clap::{Args, Subcommand};

mod list;
mod set_status;
mod show;

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    List(list::ListOrdersArgs),
    Show(show::ShowOrderArgs),
    SetStatus(set_status::SetOrderStatusArgs),
}

pub(crate) async fn run(command: OrderCommand) -> Result<(), String> {
    match command.command {
        OrderSubcommand::List(args) => list::run(args).await,
        OrderSubcommand::Show(args) => show::run(args).await,
        OrderSubcommand::SetStatus(args) => set_status::run(args).await,
    }
}
