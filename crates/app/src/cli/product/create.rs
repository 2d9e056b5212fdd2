use clap::Args;
use verdant_app::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService, models::NewProduct},
};

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Display name; also determines the slug id
    #[arg(long)]
    name: String,

    /// Catalogue category
    #[arg(long)]
    category: String,

    /// Selling price, in whole rupees
    #[arg(long)]
    price: u64,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Strike-through price, in whole rupees
    #[arg(long)]
    original_price: Option<u64>,

    /// Short description shown on product cards
    #[arg(long)]
    short_description: Option<String>,

    /// Net quantity label, e.g. "100g"
    #[arg(long)]
    net_qty: Option<String>,

    /// Image path or URL
    #[arg(long)]
    image: Option<String>,

    /// Highlight on the landing page
    #[arg(long)]
    featured: bool,

    /// Initial stock count
    #[arg(long)]
    stock: Option<u32>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    let created = service
        .create_product(NewProduct {
            name: args.name,
            category: args.category,
            price: args.price,
            original_price: args.original_price,
            short_description: args.short_description,
            net_qty: args.net_qty,
            image: args.image,
            featured: args.featured,
            stock: args.stock,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("created product {} ({})", created.id, created.name);

    Ok(())
}
