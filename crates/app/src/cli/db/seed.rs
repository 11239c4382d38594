use clap::Args;
use rand::{Rng, seq::SliceRandom};
use stockroom_app::{
    auth::generate_api_token,
    database::{self, Db},
    domain::{
        products::{PgProductsService, ProductsService, data::NewProduct, records::ProductUuid},
        users::{PgUsersService, UsersService, data::NewUser, records::UserUuid},
    },
};

const CATEGORIES: [&str; 4] = ["Elektronik", "Aksesoris", "Perabotan", "Buku"];
const ADJECTIVES: [&str; 6] = ["Compact", "Deluxe", "Classic", "Portable", "Heavy Duty", "Slim"];
const NOUNS: [&str; 8] = [
    "Monitor", "Keyboard", "Desk Lamp", "Office Chair", "Notebook", "Bookshelf", "Headset",
    "USB Hub",
];

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Number of random products to create in addition to the fixed demo products
    #[arg(long, default_value_t = 10)]
    random_products: usize,

    /// Email of the seeded admin user
    #[arg(long, default_value = "admin@stockroom.test")]
    admin_email: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let token = generate_api_token();

    let admin = PgUsersService::new(pool.clone())
        .create_user(NewUser {
            uuid: UserUuid::new(),
            name: "Admin".to_string(),
            email: args.admin_email,
            token_hash: token.hash(),
        })
        .await
        .map_err(|error| format!("failed to create admin user: {error}"))?;

    println!("admin_uuid: {}", admin.uuid);
    println!("admin_token: {token}");

    let products = PgProductsService::new(Db::new(pool));

    let mut seeded = vec![
        demo_product("LP14-001", "Laptop Pro 14\"", "Elektronik", 15),
        demo_product("MS-W002", "Mouse Wireless", "Aksesoris", 50),
    ];

    let mut rng = rand::thread_rng();

    seeded.extend((0..args.random_products).map(|_| random_product(&mut rng)));

    let mut created = 0_usize;

    for product in seeded {
        let sku = product.sku.clone();

        match products.create_product(product).await {
            Ok(_) => created += 1,
            Err(error) => eprintln!("skipped {sku}: {error}"),
        }
    }

    println!("products_created: {created}");

    Ok(())
}

fn demo_product(sku: &str, name: &str, category: &str, quantity: i64) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        sku: sku.to_string(),
        category: Some(category.to_string()),
        description: None,
        quantity,
    }
}

fn random_product(rng: &mut impl Rng) -> NewProduct {
    let letters: String = (0..3)
        .map(|_| char::from(rng.gen_range(b'A'..=b'Z')))
        .collect();

    let sku = format!("SKU-{:03}{letters}", rng.gen_range(0..1000));

    let name = format!(
        "{} {}",
        ADJECTIVES.choose(rng).copied().unwrap_or("Classic"),
        NOUNS.choose(rng).copied().unwrap_or("Notebook"),
    );

    NewProduct {
        uuid: ProductUuid::new(),
        name,
        sku,
        category: CATEGORIES.choose(rng).map(ToString::to_string),
        description: Some("Generated demo product".to_string()),
        quantity: rng.gen_range(0..=100),
    }
}
