use clap::Args;
use verdant_app::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService, models::ProductUpdate},
};

#[derive(Debug, Args)]
pub(crate) struct UpdateProductArgs {
    /// Product id to update
    #[arg(long)]
    product_id: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// New selling price, in whole rupees
    #[arg(long)]
    price: Option<u64>,

    /// New strike-through price, in whole rupees
    #[arg(long)]
    original_price: Option<u64>,

    /// New short description
    #[arg(long)]
    short_description: Option<String>,

    /// New net quantity label
    #[arg(long)]
    net_qty: Option<String>,

    /// New stock count
    #[arg(long)]
    stock: Option<u32>,
}

pub(crate) async fn run(args: UpdateProductArgs) -> Result<(), String> {
    let update = ProductUpdate {
        price: args.price,
        original_price: args.original_price,
        short_description: args.short_description,
        net_qty: args.net_qty,
        stock: args.stock,
    };

    if update == ProductUpdate::default() {
        return Err("no fields to update; pass at least one --option".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    let updated = service
        .update_product(&args.product_id, update)
        .await
        .map_err(|error| format!("failed to update product: {error}"))?;

    println!("updated {}: price {}", updated.id, updated.price);

    Ok(())
}
