use xinvoice::core::*;

fn main() {
    let inputs = [
        "2024-06-15",
        "20240615",
        "  2024-06-15  ",
        "2024-06-15T10:30:00",
        "2024-02-31",
        "2024-13-01",
        "2024-7-15",
        "15.06.2024",
        "",
    ];

    println!("=== Date normalization ===");
    for raw in inputs {
        match normalize_date(raw) {
            Ok(date) => {
                let calendar = if date.to_naive_date().is_some() {
                    ""
                } else {
                    " (not a calendar date)"
                };
                println!("  {raw:?} -> {date}{calendar}");
            }
            Err(illegal) => println!("  {raw:?} -> {illegal}"),
        }
    }
}
