// All LLM prompt templates for the Generation module.
// Placeholders are replaced by `builder`; `{text}` is always substituted last.

/// Structured prompt asking for every section at once.
/// Replace: {platform}, {content}, {layout}, {text}
///
/// `{layout}` is one `[MARKER]` / description / `[/MARKER]` block per section,
/// built from the markers the parser recognizes.
pub const FULL_PROMPT_TEMPLATE: &str = r#"Create content suggestions for a {platform} {content} about: "{text}"

Respond with EXACTLY the six sections below, in this order, and nothing else.
Put every opening and closing marker on its own line and replace each description with the actual content.

{layout}"#;

/// Focused tags prompt. Replace: {tag_style}, {platform}, {content}, {tag_focus}, {text}
pub const TAGS_PROMPT_TEMPLATE: &str = r#"Generate 12 {tag_style} for a {platform} {content} about: "{text}". {tag_focus}Return them as a single comma-separated string and nothing else."#;

/// Focused titles prompt. Replace: {title_style}, {platform}, {content}, {text}
pub const TITLES_PROMPT_TEMPLATE: &str = r#"Generate 5 {title_style} for a {platform} {content} about: "{text}". Put each title on its own line and return nothing else."#;
