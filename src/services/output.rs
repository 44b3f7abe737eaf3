use crate::domain::models::JsonOut;
use serde::Serialize;

/// Print any serializable payload in the `{ok, data}` envelope used by every
/// `--json` code path.
pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}
