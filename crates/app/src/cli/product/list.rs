use clap::Args;
use verdant_app::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Only list featured products
    #[arg(long)]
    featured: bool,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    let products = if args.featured {
        service.list_featured_products().await
    } else {
        service.list_products().await
    }
    .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in products {
        println!(
            "{}: {} @ {} (stock: {})",
            product.id,
            product.name,
            product.price,
            product
                .stock
                .map_or_else(|| "untracked".to_string(), |value| value.to_string())
        );
    }

    Ok(())
}
