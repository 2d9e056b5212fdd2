use clap::Args;
use uuid::Uuid;
use verdant_app::{
    database::{self, Db},
    domain::orders::{OrdersService, PgOrdersService},
};

#[derive(Debug, Args)]
pub(crate) struct ShowOrderArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Order UUID to display
    #[arg(long)]
    order_uuid: Uuid,
}

pub(crate) async fn run(args: ShowOrderArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgOrdersService::new(Db::new(pool));

    let (order, items) = service
        .get_order(args.order_uuid)
        .await
        .map_err(|error| format!("failed to load order: {error}"))?;

    println!("order_uuid: {}", order.uuid);
    println!("user_uuid: {}", order.user_uuid);
    println!("status: {}", order.status);
    println!("total: {}", order.total);
    println!(
        "customer: {} <{}> {}",
        order.customer_name, order.customer_email, order.customer_phone
    );
    println!(
        "ship_to: {}, {}, {} {}",
        order.shipping_address.address_line1,
        order.shipping_address.city,
        order.shipping_address.state,
        order.shipping_address.pincode
    );
    println!("created_at: {}", order.created_at);
    println!();

    for item in items {
        println!(
            "{} x{} @ {} ({})",
            item.product_name,
            item.quantity,
            item.price,
            item.product_id.as_deref().unwrap_or("removed")
        );
    }

    Ok(())
}
