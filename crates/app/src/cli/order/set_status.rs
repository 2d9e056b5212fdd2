use clap::Args;
use uuid::Uuid;
use verdant_app::{
    database::{self, Db},
    domain::orders::{OrdersService, PgOrdersService, models::OrderStatus},
};

#[derive(Debug, Args)]
pub(crate) struct SetOrderStatusArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Order UUID to update
    #[arg(long)]
    order_uuid: Uuid,

    /// New status: pending, paid, packed, shipped, delivered or cancelled
    #[arg(long)]
    status: OrderStatus,
}

pub(crate) async fn run(args: SetOrderStatusArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgOrdersService::new(Db::new(pool));

    let updated = service
        .update_order_status(args.order_uuid, args.status)
        .await
        .map_err(|error| format!("failed to update order status: {error}"))?;

    println!("order {} is now {}", updated.uuid, updated.status);

    Ok(())
}
