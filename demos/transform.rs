//! Usage: cargo run --example transform -- invoice.xml [--compact] [--no-src]

use xinvoice::xr::{TransformConfigBuilder, Transformer};

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: transform <invoice.xml> [--compact] [--no-src]");
        std::process::exit(2);
    };

    let mut builder = TransformConfigBuilder::new();
    for flag in args {
        builder = match flag.as_str() {
            "--compact" => builder.compact(),
            "--no-src" => builder.provenance(false),
            other => {
                eprintln!("unknown option {other}");
                std::process::exit(2);
            }
        };
    }

    let xml = std::fs::read_to_string(&path).expect("failed to read input");
    let result = Transformer::new(builder.build())
        .transform(&xml)
        .expect("transformation failed");

    println!("{}", result.xml);

    eprintln!(
        "{}: {} fields, {} diagnostics",
        result.syntax,
        result.field_count,
        result.diagnostics.len()
    );
    for d in &result.diagnostics {
        eprintln!("  {d}");
    }
}
