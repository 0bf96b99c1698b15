//! # Seed Data Generator
//!
//! Populates the database with sample customers for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 customers (default)
//! cargo run -p gestor-db --bin seed
//!
//! # Generate a custom amount into a specific file
//! cargo run -p gestor-db --bin seed -- --count 500 --db ./data/gestorpro.db
//! ```
//!
//! Every customer gets a Brazilian-style phone number, two out of three get
//! an email address, and some get a purchase history.

use std::env;

use gestor_core::{Money, NewCustomer};
use gestor_db::{Database, DbConfig};

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Diego", "Eduarda", "Felipe", "Gabriela", "Henrique", "Isabela",
    "João", "Larissa", "Marcos", "Natália", "Otávio", "Patrícia", "Rafael", "Sofia", "Tiago",
];

const LAST_NAMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Lima", "Pereira", "Costa", "Almeida", "Ferreira",
    "Rodrigues", "Gomes", "Martins",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./gestorpro_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("GestorPro Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of customers to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./gestorpro_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 GestorPro Seed Data Generator");
    println!("================================");
    println!("Database:  {}", db_path);
    println!("Customers: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.customers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} customers", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let repo = db.customers();
    let start = std::time::Instant::now();
    let mut generated = 0;
    let mut credited = Money::zero();

    for seed in 0..count {
        let input = generate_customer(seed);
        let customer = match repo.create(input).await {
            Ok(customer) => customer,
            Err(e) => {
                eprintln!("Failed to insert customer #{}: {}", seed, e);
                continue;
            }
        };
        generated += 1;

        // Every other customer has bought something
        if seed % 2 == 0 {
            let amount = Money::from_cents(1_990 + ((seed * 7_919) % 150_000) as i64);
            repo.record_purchase(&customer.id, amount).await?;
            credited += amount;
        }
    }

    println!();
    println!("✓ Generated {} customers in {:?}", generated, start.elapsed());
    println!("  Purchases credited: {}", credited);

    let newest = repo.list().await?;
    if let Some(first) = newest.first() {
        println!("  Newest: {} ({})", first.name, first.phone);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds one customer input from a seed number.
fn generate_customer(seed: usize) -> NewCustomer {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed / FIRST_NAMES.len()) % LAST_NAMES.len()];
    let name = format!("{} {}", first, last);

    let area = 11 + (seed % 89);
    let phone = format!("({}) 9{:04}-{:04}", area, (seed * 37) % 10_000, (seed * 91) % 10_000);

    let customer = NewCustomer::new(name, phone);
    if seed % 3 == 2 {
        return customer;
    }

    let email = format!(
        "{}.{}{}@example.com",
        first.to_lowercase(),
        last.to_lowercase(),
        seed
    );
    customer.with_email(email)
}
