//! Prompt Builder — deterministic instruction strings for the generator.
//!
//! Pure string formatting: no I/O and no failure modes. Input is embedded verbatim;
//! callers reject blank input before building.

use crate::generation::parser::Section;
use crate::generation::prompts::{
    FULL_PROMPT_TEMPLATE, TAGS_PROMPT_TEMPLATE, TITLES_PROMPT_TEMPLATE,
};
use crate::generation::request::Platform;

/// Platform-specific phrasing slotted into the templates.
struct Wording {
    content: &'static str,
    title_style: &'static str,
    tag_style: &'static str,
    tag_focus: &'static str,
    hook_style: &'static str,
}

fn wording(platform: Platform) -> Wording {
    match platform {
        Platform::Youtube => Wording {
            content: "video",
            title_style: "catchy, clickable video titles",
            tag_style: "relevant SEO tags",
            tag_focus: "Focus on search keywords. ",
            hook_style: "for the first five seconds of the video",
        },
        Platform::Linkedin => Wording {
            content: "post",
            title_style: "engaging, professional headlines",
            tag_style: "relevant, professional hashtags",
            tag_focus: "",
            hook_style: "for the first line of the post",
        },
    }
}

/// What the model should put inside one section, including its format.
fn section_instruction(section: Section, platform: Platform, w: &Wording) -> String {
    match section {
        Section::Titles => format!(
            "5 {}, as a numbered list (1. to 5.), one per line",
            w.title_style
        ),
        Section::Tags => format!("12 {}, as a single comma-separated line", w.tag_style),
        Section::TrendingTopics => format!(
            "5 topics currently trending on {} that relate to the subject, as a numbered list, one per line",
            platform.label()
        ),
        Section::Hooks => format!(
            "3 attention-grabbing opening hooks {}, as a numbered list, one per line",
            w.hook_style
        ),
        Section::Hashtags => {
            "8 hashtags, each starting with #, as a single comma-separated line".to_string()
        }
        Section::Seo => format!(
            "Score: <integer from 0 to 100>/100. Suggestions: <comma-separated ways to improve the {}'s discoverability>",
            w.content
        ),
    }
}

/// Structured prompt requesting every section in the bracket-marker layout.
pub fn build_prompt(text: &str, platform: Platform) -> String {
    let w = wording(platform);
    let layout = Section::ALL
        .iter()
        .map(|&section| {
            format!(
                "[{marker}]\n{}\n[/{marker}]",
                section_instruction(section, platform, &w),
                marker = section.marker()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    FULL_PROMPT_TEMPLATE
        .replace("{platform}", platform.label())
        .replace("{content}", w.content)
        .replace("{layout}", &layout)
        .replace("{text}", text)
}

/// Focused prompt for a single comma-separated line of tags.
pub fn build_tags_prompt(text: &str, platform: Platform) -> String {
    let w = wording(platform);
    TAGS_PROMPT_TEMPLATE
        .replace("{tag_style}", w.tag_style)
        .replace("{platform}", platform.label())
        .replace("{content}", w.content)
        .replace("{tag_focus}", w.tag_focus)
        .replace("{text}", text)
}

/// Focused prompt for titles, one per line.
pub fn build_titles_prompt(text: &str, platform: Platform) -> String {
    let w = wording(platform);
    TITLES_PROMPT_TEMPLATE
        .replace("{title_style}", w.title_style)
        .replace("{platform}", platform.label())
        .replace("{content}", w.content)
        .replace("{text}", text)
}
