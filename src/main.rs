//! # recetario
//!
//! Loads a backup document, plans a menu for a pax count and prints its purchase order,
//! allergen matrix and service sheet.
//!
//! ```bash
//! RUST_LOG=info recetario --backup recetario.json --pax 24 --recipe 3 --recipe 7
//! ```

use clap::Parser;
use recetario::backup::BackupDocument;
use recetario::clients::ActorClient;
use recetario::lifecycle::{setup_tracing, KitchenSystem, DEFAULT_BUFFER_SIZE};
use recetario::model::{MenuCreate, RecipeId, Settings};
use recetario::planning::{AllergenMatrix, PurchaseOrder, ServiceSheet};
use std::path::PathBuf;
use tracing::{info, warn, Instrument};

#[derive(Debug, Parser)]
#[command(name = "recetario", version, about = "Plan a menu from a recipe backup")]
struct Config {
    /// Backup document with recipes, catalog and settings.
    #[arg(long, env = "RECETARIO_BACKUP")]
    backup: PathBuf,

    /// Diners to plan for.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pax: u32,

    /// Recipe id to serve, in menu order. Repeat the flag for each course; defaults to every
    /// recipe in the backup.
    #[arg(long = "recipe", value_name = "ID")]
    recipes: Vec<u32>,

    /// Title printed on the service sheet.
    #[arg(long, default_value = "Menú")]
    name: String,

    /// Request channel capacity of each actor.
    #[arg(long, env = "RECETARIO_BUFFER_SIZE", default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let config = Config::parse();
    info!(?config, "Starting recetario");

    let mut system = KitchenSystem::new(config.buffer_size);
    system
        .import_backup(BackupDocument::read_from(&config.backup)?)
        .await?;

    let recipes: Vec<RecipeId> = if config.recipes.is_empty() {
        system
            .recipe_client
            .list()
            .await?
            .iter()
            .map(|recipe| recipe.id)
            .collect()
    } else {
        config.recipes.iter().copied().map(RecipeId).collect()
    };

    let span = tracing::info_span!("menu_planning", pax = config.pax);
    let (order, matrix, sheet) = async {
        let menu = system
            .menu_client
            .create_menu(MenuCreate {
                name: config.name.clone(),
                pax: config.pax,
                recipes,
            })
            .await?;
        let order = system.menu_client.purchase_order(menu).await?;
        let matrix = system.menu_client.allergen_matrix(menu).await?;
        let sheet = system.menu_client.service_sheet(menu).await?;
        Ok::<_, recetario::menu_actor::MenuError>((order, matrix, sheet))
    }
    .instrument(span)
    .await?;

    print_header(system.settings());
    print_purchase_order(&order);
    print_allergen_matrix(&matrix);
    print_service_sheet(&sheet);

    for warning in order.warnings().iter().chain(&sheet.warnings) {
        warn!(%warning, "Planning warning");
    }

    system.shutdown().await?;
    info!("Done");
    Ok(())
}

fn print_header(settings: &Settings) {
    let header = settings.header();
    if !header.is_empty() {
        println!("{}\n", header);
    }
}

fn print_purchase_order(order: &PurchaseOrder) {
    println!("ORDEN DE COMPRA ({} líneas)", order.line_count());
    for (family, lines) in order.families() {
        println!("\n  {}", family.to_uppercase());
        for line in lines.values() {
            println!("    {:<32} {:>10} {}", line.name, line.quantity, line.unit);
        }
    }
    println!();
}

fn print_allergen_matrix(matrix: &AllergenMatrix) {
    println!("ALÉRGENOS");
    if matrix.columns.is_empty() {
        println!("  Sin alérgenos declarados\n");
        return;
    }
    let columns: Vec<&str> = matrix.columns.iter().map(|a| a.label()).collect();
    println!("  {:<32} {}", "", columns.join(" | "));
    for row in &matrix.rows {
        let marks: Vec<String> = row
            .present
            .iter()
            .zip(&columns)
            .map(|(present, label)| {
                let mark = if *present { "X" } else { "" };
                format!("{:^width$}", mark, width = label.chars().count())
            })
            .collect();
        println!("  {:<32} {}", row.name, marks.join(" | "));
    }
    println!();
}

fn print_service_sheet(sheet: &ServiceSheet) {
    println!("{} ({} pax)", sheet.title.to_uppercase(), sheet.pax);
    for course in &sheet.courses {
        println!("\n  {}", course.name);
        let details = &course.service_details;
        for (label, value) in [
            ("Temperatura", &details.serving_temp),
            ("Pase", &details.pass_time),
            ("Servicio", &details.service_type),
            ("Marcaje", &details.cutlery),
        ] {
            if !value.is_empty() {
                println!("    {}: {}", label, value);
            }
        }
        for sub in &course.sub_recipes {
            println!("    - {}", sub.name);
            for ingredient in &sub.ingredients {
                println!(
                    "        {:<28} {:>10} {}",
                    ingredient.name, ingredient.amount, ingredient.unit
                );
            }
        }
        if !course.plating_instructions.is_empty() {
            println!("    Emplatado: {}", course.plating_instructions);
        }
    }
}
