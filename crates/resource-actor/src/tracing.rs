//! # Observability
//!
//! Every actor logs through `tracing` with structured fields: `entity_type` on each line,
//! `%id` for the entity touched and `?params` / `?update` / `?action` at debug level.
//! Client methods are `#[instrument]`ed, so actor logs nest under the calling span.
//!
//! ```bash
//! RUST_LOG=info cargo run -- --backup recetario.json   # one line per operation
//! RUST_LOG=debug cargo run -- --backup recetario.json  # payloads as well
//! RUST_LOG=recetario::planning=debug cargo run         # only the planning core
//! ```
//!
//! ```text
//! INFO entity_type="Product" size=42 next_id=43 Restored
//! WARN purchase_order{id=MenuId(1)}: recipe=Fumet error=Recipe "Fumet" has no usable yield quantity Skipping recipe contribution
//! INFO purchase_order{id=MenuId(1)}: entity_type="Menu" id=menu_1 Action ok
//! ```

/// Installs the global subscriber: `RUST_LOG` filtering, compact lines, no module targets.
///
/// Call once from the binary; libraries and tests never install a subscriber.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
