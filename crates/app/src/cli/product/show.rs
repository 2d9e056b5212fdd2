use clap::Args;
use verdant_app::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Args)]
pub(crate) struct ShowProductArgs {
    /// Product id to display
    #[arg(long)]
    product_id: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Look the product up by storefront slug instead of id
    #[arg(long)]
    by_slug: bool,
}

pub(crate) async fn run(args: ShowProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    let product = if args.by_slug {
        service.get_product_by_slug(&args.product_id).await
    } else {
        service.get_product(&args.product_id).await
    }
    .map_err(|error| format!("failed to load product: {error}"))?;

    println!("id: {}", product.id);
    println!("slug: {}", product.slug);
    println!("name: {}", product.name);
    println!("category: {}", product.category);
    println!("price: {}", product.price);
    println!(
        "original_price: {}",
        product
            .original_price
            .map_or_else(|| "none".to_string(), |value| value.to_string())
    );
    println!("net_qty: {}", product.net_qty.as_deref().unwrap_or("none"));
    println!("featured: {}", product.featured);
    println!(
        "stock: {}",
        product
            .stock
            .map_or_else(|| "untracked".to_string(), |value| value.to_string())
    );
    println!("created_at: {}", product.created_at);

    Ok(())
}
