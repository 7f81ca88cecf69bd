use serde_json::json;
use skemata::{build, chain, field};

fn main() {
    let cat = json!({
        "name": "Dr. Snuggles",
        "age": 10,
        "occupation": "Sleep expert",
        "toy": { "color": "red" },
        "best_friend": { "name": "Garfield", "age": 8 }
    });

    let statements = [
        field("name"),
        field("age"),
        field("occupation"),
        field("toy_color").with(chain!("toy", "color")),
        field("best_friend")
            .with("Animal")
            .block([field("name"), field("age")]),
    ];

    match build("Animal", cat, &statements) {
        Ok(document) => {
            let json_output = document.to_json_pretty().unwrap();
            println!("Successfully drew schema.org JSON-LD:\n{json_output}");
        }
        Err(e) => {
            eprintln!("Failed to draw document: {:?}", miette::Report::new(e));
        }
    }
}
