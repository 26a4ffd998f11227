use crate::domain::models::JsonOut;
use serde::Serialize;

/// Print a value wrapped in the `{ok, data}` envelope.
pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(&data)?;
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}
