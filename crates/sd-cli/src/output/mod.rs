use serde::Serialize;
use serde_json::Value;
use sd_view::{Card, Screen, ViewPhase};

use crate::cli::OutputFormat;
use crate::ui;

pub mod card;
pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Card => Ok(render_key_values(&serde_json::to_value(value)?)),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a settled screen. Error and Empty states become their inline
/// message in the human formats; JSON formats keep the tagged state.
pub fn render_screen(screen: &Screen, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Raw => render(screen, format),
        OutputFormat::Table | OutputFormat::Card => Ok(render_screen_text(screen, format)),
    }
}

pub fn screen(screen: &Screen, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_screen(screen, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_screen_text(screen: &Screen, format: OutputFormat) -> String {
    let body = match screen {
        Screen::Landing => {
            return "spacedash: agencies, astronauts, programs and launches.\n\
                    Sign in with `spacedash auth login --email E --password P` \
                    or create an account with `spacedash auth signup`."
                .to_string();
        }
        Screen::SignIn => {
            return "Sign in required. Run `spacedash auth login --email E --password P`."
                .to_string();
        }
        Screen::SignUp => {
            return "Create an account with \
                    `spacedash auth signup --email E --password P --confirm P`."
                .to_string();
        }
        Screen::Profile { email } => return format!("Signed in as {email}"),
        _ => match screen.phase() {
            Some(ViewPhase::Ready) => render_cards(screen, format),
            Some(ViewPhase::Loading) => "Loading…".to_string(),
            _ => screen.message().unwrap_or_default(),
        },
    };

    match screen {
        Screen::Launches { tab, .. } => format!("Launches: {tab}\n\n{body}"),
        _ => body,
    }
}

fn render_cards(screen: &Screen, format: OutputFormat) -> String {
    let cards = screen.cards();
    let is_list = screen.list_kind().is_some();
    match (format, is_list) {
        (OutputFormat::Table, true) => render_card_table(&cards),
        (_, true) => card::render_card_list(&cards),
        (_, false) => cards
            .first()
            .map(|card| card::render_card(card, None))
            .unwrap_or_default(),
    }
}

/// One row per card: number, id, name, then each field label seen.
fn render_card_table(cards: &[Card]) -> String {
    let mut labels: Vec<&str> = Vec::new();
    for card in cards {
        for field in &card.fields {
            if !labels.contains(&field.label) {
                labels.push(field.label);
            }
        }
    }

    let mut headers = vec!["#", "id", "name"];
    headers.extend(labels.iter().copied());

    let rows = cards
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let mut row = vec![(idx + 1).to_string(), card.id.clone(), card.title.clone()];
            row.extend(
                labels
                    .iter()
                    .map(|label| card.field(label).unwrap_or("-").to_string()),
            );
            row
        })
        .collect::<Vec<_>>();

    table::render_table(&headers, &rows, table_options())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(scalar)]],
            table_options(),
        )),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, table_options())
}

/// `key: value` lines for flat responses (auth status, health).
fn render_key_values(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| format!("{key}: {}", value_to_cell(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => value_to_cell(other),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
