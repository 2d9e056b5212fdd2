use clap::Args;
use uuid::Uuid;
use verdant_app::{
    database::{self, Db},
    domain::orders::{OrdersService, PgOrdersService},
};

#[derive(Debug, Args)]
pub(crate) struct ListOrdersArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Restrict to one customer's orders
    #[arg(long)]
    user_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: ListOrdersArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgOrdersService::new(Db::new(pool));

    let orders = match args.user_uuid {
        Some(user) => service.list_orders_for_user(user).await,
        None => service.list_orders().await,
    }
    .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    for order in orders {
        println!("order_uuid: {}", order.uuid);
        println!("customer: {} <{}>", order.customer_name, order.customer_email);
        println!("total: {}", order.total);
        println!("status: {}", order.status);
        println!("created_at: {}", order.created_at);
        println!();
    }

    Ok(())
}
