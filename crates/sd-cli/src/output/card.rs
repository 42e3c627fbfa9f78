use std::fmt::Write as _;

use sd_view::Card;

/// Render one card as indented text. `index` numbers list items for `select`.
#[must_use]
pub fn render_card(card: &Card, index: Option<usize>) -> String {
    let mut out = String::new();
    match index {
        Some(n) => {
            let _ = writeln!(out, "[{n}] {}  ({} {})", card.title, card.kind, card.id);
        }
        None => {
            let _ = writeln!(out, "{}  ({} {})", card.title, card.kind, card.id);
        }
    }

    let _ = writeln!(out, "    Image: {}", card.image_or_placeholder());
    for field in &card.fields {
        let _ = writeln!(out, "    {}: {}", field.label, field.value);
    }
    if let Some(description) = &card.description {
        out.push('\n');
        for line in description.lines() {
            let _ = writeln!(out, "    {line}");
        }
    }
    if !card.links.is_empty() {
        out.push('\n');
        for link in &card.links {
            let _ = writeln!(out, "    {}: {}", link.label, link.value);
        }
    }
    out.trim_end().to_string()
}

/// Numbered summary cards separated by blank lines.
#[must_use]
pub fn render_card_list(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(idx, card)| render_card(card, Some(idx + 1)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use sd_core::enums::ResourceKind;
    use sd_view::PLACEHOLDER_IMAGE;
    use sd_view::cards::Field;

    use super::*;

    fn card(image: Option<&str>) -> Card {
        Card {
            kind: ResourceKind::Astronaut,
            id: "1".into(),
            title: "Jane Doe".into(),
            image: image.map(str::to_string),
            fields: vec![Field {
                label: "Status",
                value: "Active".into(),
            }],
            description: Some("Flew twice.".into()),
            links: Vec::new(),
        }
    }

    #[test]
    fn detail_card_shows_image_and_fields() {
        let text = render_card(&card(Some("http://x/y.png")), None);
        assert!(text.starts_with("Jane Doe  (astronaut 1)"));
        assert!(text.contains("Image: http://x/y.png"));
        assert!(text.contains("Status: Active"));
        assert!(text.ends_with("Flew twice."));
    }

    #[test]
    fn list_numbers_from_one_with_placeholder() {
        let text = render_card_list(&[card(None), card(None)]);
        assert!(text.starts_with("[1] Jane Doe"));
        assert!(text.contains("[2] Jane Doe"));
        assert!(text.contains(&format!("Image: {PLACEHOLDER_IMAGE}")));
    }
}
