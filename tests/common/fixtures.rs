use serde_json::{Value, json};

/// Template sources keyed by reference. `contact/style.hbs` and
/// `ghost/view.hbs` are deliberately absent.
pub const TEMPLATES: &[(&str, &str)] = &[
    (
        "hero/view.hbs",
        r#"<section id="{{id}}" class="hero hero--{{settings.align}}"><h1>{{contents.title}}</h1></section>"#,
    ),
    ("hero/style.hbs", "#{{id}} h1 { color: {{styles.color}}; }"),
    ("text/view.hbs", r#"<div class="text">{{contents.body}}</div>"#),
    ("contact/view.hbs", "<form>{{contents.email}}</form>"),
    ("broken/view.hbs", "{{#if contents.x}}unclosed"),
];

/// The block catalog as a JSON array, using manifest key names.
pub fn catalog_json() -> Value {
    json!([
        {
            "slug": "hero",
            "name": "Hero",
            "view_file": "hero/view.hbs",
            "style_file": "hero/style.hbs",
            "settings": { "align": "left" },
            "contents": { "title": "Welcome" },
            "styles": { "color": "black" }
        },
        {
            "name": "Text",
            "body_template": "text/view.hbs",
            "contents": { "body": "Lorem ipsum" }
        },
        {
            "slug": "contact",
            "name": "Contact",
            "body_template": "contact/view.hbs",
            "style_template": "contact/style.hbs",
            "contents": { "email": "hello@example.com" }
        },
        { "slug": "broken", "name": "Broken", "body_template": "broken/view.hbs" },
        { "slug": "ghost", "name": "Ghost", "body_template": "ghost/view.hbs" }
    ])
}

pub fn hero_section(id: u64) -> Value {
    json!({ "id": id, "slug": "hero", "contents": { "title": "Custom Title" } })
}

pub fn text_section(id: u64, body: &str) -> Value {
    json!({ "id": id, "slug": "text", "contents": { "body": body } })
}

/// One section of every kind, including an unknown block.
pub fn mixed_page() -> Value {
    json!({
        "sections": [
            hero_section(1),
            text_section(2, "First paragraph"),
            { "id": 3, "slug": "does-not-exist" },
            { "id": 4, "slug": "contact" },
            { "id": 5, "slug": "ghost" },
            { "id": 6, "slug": "broken" }
        ]
    })
}
