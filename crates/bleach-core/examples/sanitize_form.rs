// Sanitize a small signup form with one chain per field
// Usage: cargo run --example sanitize_form

use bleach_core::{checks, mutators, Chain, ChainConfig, MessageCatalog, ValueKind};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let messages = MessageCatalog::default();

    let username = ChainConfig::from_json(
        r#"{"steps": [
            {"type": "required"},
            {"type": "trim_space"},
            {"type": "lowercase"},
            {"type": "length", "min": 3, "max": 16},
            {"type": "matches", "pattern": "^[a-z0-9_]+$"}
        ]}"#,
    )?
    .build(&messages)?;

    let age = Chain::builder()
        .check(checks::RequiredChecker::with_messages(&messages))
        .check(checks::TypeChecker::with_messages(ValueKind::Integer, false, &messages))
        .mutate(mutators::to_int())
        .build();

    let form = json!({"username": "  Ada_Lovelace ", "age": "36"});
    let bad_form = json!({"username": "a b", "age": null});

    for (label, input) in [("good", &form), ("bad", &bad_form)] {
        println!("{} form:", label);
        for (field, chain) in [("username", &username), ("age", &age)] {
            match chain.run_ref(&input[field]) {
                Ok(value) => println!("  {} = {}", field, value),
                Err(errors) => {
                    for message in errors.messages() {
                        println!("  {}: {}", field, message);
                    }
                }
            }
        }
    }

    Ok(())
}
