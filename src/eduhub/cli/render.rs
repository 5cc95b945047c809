//! # Rendering Module
//!
//! Turns `CmdResult` values into terminal text through the templates in
//! `templates/`.
//!
//! Layout calculations (width, truncation, padding, wrapping) stay in Rust
//! because they need Unicode-aware processing. Templates handle presentation:
//! arrangement, section separators, and style selection through names the
//! Rust side picks (`icon_style`, `heart_style`, ...).
//!
//! Every public `render_*` function takes an explicit `use_color` so tests can
//! compare plain output.

use super::styles::{names, EDUHUB_THEME};
use super::templates::TEMPLATES;
use super::theme::Renderer;
use chrono::NaiveDate;
use eduhub::api::{CmdMessage, CmdResult, MessageLevel};
use eduhub::model::{Resource, ResourceType};
use eduhub::nav::Navigation;
use eduhub::state::{CategoryFilter, QueryState, TypeFilter, ViewMode};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const CARD_WIDTH: usize = 64;
pub const DESCRIPTION_LINES: usize = 2;

// List view columns
const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 36;
const CATEGORY_WIDTH: usize = 14;
const SIZE_WIDTH: usize = 9;
const RATING_WIDTH: usize = 7;
const DOWNLOADS_WIDTH: usize = 10;

const NAV_NAME_WIDTH: usize = 18;

const HEART_ON: &str = "♥";
const HEART_OFF: &str = "♡";
const NEW_MARKER: &str = "●";
const TRENDING_MARKER: &str = "↗";

#[derive(Serialize)]
struct FlagData {
    text: &'static str,
    style: &'static str,
}

#[derive(Serialize)]
struct CardData {
    id_label: String,
    badge: String,
    flags: Vec<FlagData>,
    gap: String,
    heart: &'static str,
    heart_style: &'static str,
    icon: &'static str,
    icon_style: &'static str,
    name: String,
    description: Vec<String>,
    size: String,
    date: String,
    category: String,
    rating: String,
    downloads: String,
}

#[derive(Serialize)]
struct RowData {
    id_label: String,
    icon: &'static str,
    icon_style: &'static str,
    name: String,
    flags: Vec<FlagData>,
    name_gap: String,
    category: String,
    size: String,
    rating: String,
    downloads: String,
    heart: &'static str,
    heart_style: &'static str,
    indent: String,
    description: String,
}

#[derive(Serialize)]
struct ListingData {
    shown: usize,
    total: usize,
    context: String,
    empty: bool,
    has_filters: bool,
    rule: String,
    header: String,
    cards: Vec<CardData>,
    rows: Vec<RowData>,
}

#[derive(Serialize)]
struct PreviewData {
    id: u64,
    id_label: String,
    icon: &'static str,
    icon_style: &'static str,
    name: String,
    flags: Vec<FlagData>,
    subtitle: String,
    rule: String,
    is_image: bool,
    thumbnail: String,
    type_preview: String,
    type_label: String,
    rating: String,
    downloads: String,
    size: String,
    date: String,
    description: Vec<String>,
    heart: &'static str,
    heart_style: &'static str,
    favorite_label: &'static str,
}

#[derive(Serialize)]
struct SubjectLine {
    icon: &'static str,
    name: &'static str,
    gap: String,
    count: u32,
}

#[derive(Serialize)]
struct ToolLine {
    icon: &'static str,
    name: &'static str,
    gap: String,
    description: &'static str,
}

#[derive(Serialize)]
struct NavData {
    brand: &'static str,
    tagline: &'static str,
    gap: String,
    notifications: u32,
    menu: String,
    rule: String,
    subjects: Vec<SubjectLine>,
    tools: Vec<ToolLine>,
    user_menu: Vec<&'static str>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn renderer(use_color: bool) -> Result<Renderer, minijinja::Error> {
    let mut renderer = Renderer::with_color(EDUHUB_THEME.clone(), use_color);
    for (name, source) in TEMPLATES {
        renderer.add_template(name, source)?;
    }
    Ok(renderer)
}

fn render_template<T: Serialize>(name: &str, data: &T, use_color: bool) -> String {
    renderer(use_color)
        .and_then(|r| r.render(name, data))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders a listing in the view mode it was produced with.
pub fn render_listing(result: &CmdResult, use_color: bool) -> String {
    let state = result.state.clone().unwrap_or_default();
    let resources = &result.listed_resources;

    let mut data = ListingData {
        shown: resources.len(),
        total: result.catalog_size,
        context: summary_context(&state),
        empty: resources.is_empty(),
        has_filters: state.has_filters(),
        rule: "─".repeat(CARD_WIDTH),
        header: String::new(),
        cards: Vec::new(),
        rows: Vec::new(),
    };

    match state.view {
        ViewMode::Grid => {
            data.cards = resources.iter().map(card_data).collect();
            render_template("grid.tmp", &data, use_color)
        }
        ViewMode::List => {
            data.header = list_header();
            data.rows = resources.iter().map(row_data).collect();
            render_template("list.tmp", &data, use_color)
        }
    }
}

pub fn render_preview(resource: &Resource, use_color: bool) -> String {
    let (icon, icon_style) = file_icon(resource.resource_type);
    let (heart, heart_style) = heart(resource.is_favorite);
    let type_label = resource.resource_type.as_str().to_uppercase();

    let data = PreviewData {
        id: resource.id,
        id_label: format!("#{}", resource.id),
        icon,
        icon_style,
        name: resource.name.clone(),
        flags: flags(resource, "NEW", "TRENDING"),
        subtitle: format!("{} • {}", resource.category, resource.size),
        rule: "─".repeat(CARD_WIDTH),
        is_image: resource.resource_type == ResourceType::Image,
        thumbnail: resource.thumbnail.clone(),
        type_preview: format!("{} Preview", type_label),
        type_label,
        rating: format_rating(resource.rating),
        downloads: format_count(resource.downloads),
        size: resource.size.clone(),
        date: format_date(resource.upload_date),
        description: wrap_to_width(&resource.description, CARD_WIDTH - 2, usize::MAX),
        heart,
        heart_style,
        favorite_label: if resource.is_favorite {
            "Remove from Favorites"
        } else {
            "Add to Favorites"
        },
    };

    render_template("preview.tmp", &data, use_color)
}

pub fn render_navigation(nav: &Navigation, use_color: bool) -> String {
    let tagline = "Learning Platform";
    let left = nav.brand.width() + 1 + tagline.width();
    let right = "Notifications".width() + 1 + nav.notifications.to_string().width();

    let data = NavData {
        brand: nav.brand,
        tagline,
        gap: " ".repeat(CARD_WIDTH.saturating_sub(left + right).max(2)),
        notifications: nav.notifications,
        menu: nav.top_level().join(" · "),
        rule: "─".repeat(CARD_WIDTH),
        subjects: nav
            .subjects
            .iter()
            .map(|s| SubjectLine {
                icon: s.icon,
                name: s.name,
                gap: gap_after(s.name, NAV_NAME_WIDTH),
                count: s.count,
            })
            .collect(),
        tools: nav
            .tools
            .iter()
            .map(|t| ToolLine {
                icon: t.icon,
                name: t.name,
                gap: gap_after(t.name, NAV_NAME_WIDTH),
                description: t.description,
            })
            .collect(),
        user_menu: nav.user_menu.clone(),
    };

    render_template("nav.tmp", &data, use_color)
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render_template("text_list.tmp", &data, use_color)
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|message| MessageData {
                content: message.content.clone(),
                style: match message.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };
    render_template("messages.tmp", &data, use_color)
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    print!("{}", render_messages(messages, use_color));
}

fn card_data(resource: &Resource) -> CardData {
    let (icon, icon_style) = file_icon(resource.resource_type);
    let (heart, heart_style) = heart(resource.is_favorite);
    let id_label = format!("#{}", resource.id);
    let badge = format!(" {} ", resource.resource_type.as_str().to_uppercase());
    let flags = flags(resource, "NEW", "TRENDING");

    let used = id_label.width()
        + 1
        + badge.width()
        + flags.iter().map(|f| 1 + f.text.width()).sum::<usize>()
        + heart.width();

    CardData {
        id_label,
        badge,
        flags,
        gap: " ".repeat(CARD_WIDTH.saturating_sub(used).max(1)),
        heart,
        heart_style,
        icon,
        icon_style,
        name: truncate_to_width(&resource.name, CARD_WIDTH - 2),
        description: wrap_to_width(&resource.description, CARD_WIDTH - 2, DESCRIPTION_LINES),
        size: resource.size.clone(),
        date: format_date(resource.upload_date),
        category: resource.category.clone(),
        rating: format_rating(resource.rating),
        downloads: format_count(resource.downloads),
    }
}

fn row_data(resource: &Resource) -> RowData {
    let (icon, icon_style) = file_icon(resource.resource_type);
    let (heart, heart_style) = heart(resource.is_favorite);
    let flags = flags(resource, NEW_MARKER, TRENDING_MARKER);
    let flags_width: usize = flags.iter().map(|f| 1 + f.text.width()).sum();

    let name = truncate_to_width(&resource.name, NAME_WIDTH.saturating_sub(flags_width + 1));
    let name_gap = " ".repeat(NAME_WIDTH.saturating_sub(name.width() + flags_width));

    RowData {
        id_label: pad_to_width(&format!("#{}", resource.id), ID_WIDTH),
        icon,
        icon_style,
        name,
        flags,
        name_gap,
        category: pad_to_width(
            &truncate_to_width(&resource.category, CATEGORY_WIDTH - 1),
            CATEGORY_WIDTH,
        ),
        size: pad_to_width(&resource.size, SIZE_WIDTH),
        rating: pad_to_width(&format!("★ {}", format_rating(resource.rating)), RATING_WIDTH),
        downloads: format!(
            "{:>width$}",
            format_count(resource.downloads),
            width = DOWNLOADS_WIDTH
        ),
        heart,
        heart_style,
        indent: " ".repeat(ID_WIDTH + 3),
        description: truncate_to_width(&resource.description, NAME_WIDTH + CATEGORY_WIDTH),
    }
}

fn list_header() -> String {
    format!(
        "{}{}{}{}{}{:>dl$} {}",
        pad_to_width("ID", ID_WIDTH + 3),
        pad_to_width("Resource", NAME_WIDTH),
        pad_to_width("Category", CATEGORY_WIDTH),
        pad_to_width("Size", SIZE_WIDTH),
        pad_to_width("Rating", RATING_WIDTH),
        "Downloads",
        HEART_OFF,
        dl = DOWNLOADS_WIDTH
    )
}

fn flags(resource: &Resource, new_text: &'static str, trending_text: &'static str) -> Vec<FlagData> {
    let mut flags = Vec::new();
    if resource.is_new {
        flags.push(FlagData {
            text: new_text,
            style: "new",
        });
    }
    if resource.is_trending {
        flags.push(FlagData {
            text: trending_text,
            style: "trending",
        });
    }
    flags
}

fn heart(is_favorite: bool) -> (&'static str, &'static str) {
    if is_favorite {
        (HEART_ON, names::FAVORITE)
    } else {
        (HEART_OFF, names::NOT_FAVORITE)
    }
}

/// Glyph and style for a resource type. Documents and presentations share one.
pub fn file_icon(resource_type: ResourceType) -> (&'static str, &'static str) {
    match resource_type {
        ResourceType::Pdf => ("▤", names::ICON_PDF),
        ResourceType::Image => ("▨", names::ICON_IMAGE),
        ResourceType::Video => ("▶", names::ICON_VIDEO),
        ResourceType::Audio => ("♪", names::ICON_AUDIO),
        ResourceType::Document | ResourceType::Presentation => ("▦", names::ICON_DOCUMENT),
        ResourceType::Archive => ("▣", names::ICON_ARCHIVE),
    }
}

/// " · matching "x" · in Physics · sorted by recent"
fn summary_context(state: &QueryState) -> String {
    let mut parts = Vec::new();
    if !state.search.is_empty() {
        parts.push(format!("matching \"{}\"", state.search));
    }
    if let CategoryFilter::Only(category) = &state.category {
        parts.push(format!("in {}", category));
    }
    if let TypeFilter::Only(resource_type) = state.resource_type {
        parts.push(format!("type {}", resource_type));
    }
    parts.push(format!("sorted by {}", state.sort));
    format!(" · {}", parts.join(" · "))
}

/// Thousands separators: 1247 -> "1,247".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}

fn gap_after(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()).max(1))
}

pub fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

/// Cuts `s` to at most `max_width` columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

/// Greedy word wrap. Text beyond `max_lines` is dropped and the last kept
/// line ends in `…`.
pub fn wrap_to_width(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let clipped = lines.len() > max_lines;
    lines.truncate(max_lines);
    for line in lines.iter_mut() {
        *line = truncate_to_width(line, width);
    }
    if clipped {
        if let Some(last) = lines.last_mut() {
            *last = truncate_to_width(&format!("{}…", last.trim_end_matches('…')), width);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduhub::model::ResourceId;
    use eduhub::state::{Action, SortKey};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_resource(id: ResourceId, name: &str, resource_type: ResourceType) -> Resource {
        let mut resource = Resource::new(id, name, resource_type, "Physics", date(2023, 6, 15));
        resource.size = "2.4 MB".into();
        resource.description = "Fundamental concepts of motion and energy".into();
        resource.downloads = 1247;
        resource.rating = 4.8;
        resource
    }

    fn listing(resources: Vec<Resource>, state: QueryState) -> CmdResult {
        CmdResult::default()
            .with_listed_resources(resources, 6)
            .with_state(state)
    }

    #[test]
    fn test_grid_shows_summary_and_card_fields() {
        let mut resource = make_resource(1, "Physics Fundamentals", ResourceType::Pdf);
        resource.is_trending = true;
        let out = render_listing(&listing(vec![resource], QueryState::new()), false);

        assert!(out.starts_with("Showing 1 of 6 resources · sorted by recent\n"));
        assert!(out.contains("#1  PDF  TRENDING"));
        assert!(out.contains("▤ Physics Fundamentals"));
        assert!(out.contains("2.4 MB · Jun 15, 2023"));
        assert!(out.contains("Physics · ★ 4.8 · 1,247 downloads"));
        assert!(out.contains(HEART_OFF));
        assert!(!out.contains("NEW"));
    }

    #[test]
    fn test_grid_header_line_has_card_width() {
        let out = render_listing(
            &listing(
                vec![make_resource(3, "Chemistry Lab", ResourceType::Video)],
                QueryState::new(),
            ),
            false,
        );
        let header = out.lines().find(|l| l.starts_with("#3")).unwrap();
        assert_eq!(header.width(), CARD_WIDTH);
    }

    #[test]
    fn test_favorite_heart_is_filled() {
        let mut resource = make_resource(2, "Calculus", ResourceType::Pdf);
        resource.is_favorite = true;
        let out = render_listing(&listing(vec![resource], QueryState::new()), false);
        assert!(out.contains(HEART_ON));
    }

    #[test]
    fn test_list_view_uses_table() {
        let mut resource = make_resource(4, "Shakespeare Audio", ResourceType::Audio);
        resource.is_new = true;
        let state = QueryState::new().apply(Action::SetView(ViewMode::List));
        let out = render_listing(&listing(vec![resource], state), false);

        assert!(out.contains("Resource"));
        assert!(out.contains("Downloads"));
        assert!(out.contains("#4   ♪ Shakespeare Audio ●"));
        assert!(out.contains("1,247"));
        assert!(out.contains("★ 4.8"));
        assert!(out.contains("       Fundamental concepts"));
    }

    #[test]
    fn test_empty_listing_shows_empty_state() {
        let state = QueryState::new().apply(Action::SetSearch("zzz".into()));
        let out = render_listing(&listing(vec![], state), false);
        assert!(out.contains("Showing 0 of 6 resources · matching \"zzz\" · sorted by recent"));
        assert!(out.contains("No resources found"));
        assert!(out.contains("Clear all filters"));
    }

    #[test]
    fn test_empty_catalog_has_no_clear_hint() {
        let out = render_listing(&listing(vec![], QueryState::new()), false);
        assert!(out.contains("No resources found"));
        assert!(!out.contains("Clear all filters"));
    }

    #[test]
    fn test_summary_lists_active_filters() {
        let state = QueryState::new()
            .apply(Action::SetCategory(CategoryFilter::Only("Biology".into())))
            .apply(Action::SetType(TypeFilter::Only(ResourceType::Presentation)))
            .apply(Action::SetSort(SortKey::Name));
        assert_eq!(
            summary_context(&state),
            " · in Biology · type presentation · sorted by name"
        );
    }

    #[test]
    fn test_preview_for_document() {
        let resource = make_resource(1, "Physics Fundamentals", ResourceType::Pdf);
        let out = render_preview(&resource, false);
        assert!(out.contains("Physics • 2.4 MB"));
        assert!(out.contains("PDF Preview"));
        assert!(out.contains("Full preview available after download"));
        assert!(out.contains("4.8 Rating"));
        assert!(out.contains("1,247 Downloads"));
        assert!(out.contains("Add to Favorites"));
        assert!(out.contains("eduhub download 1"));
    }

    #[test]
    fn test_preview_for_image_and_favorite() {
        let mut resource = make_resource(5, "Map Collection", ResourceType::Image);
        resource.thumbnail = "/maps.svg".into();
        resource.is_favorite = true;
        let out = render_preview(&resource, false);
        assert!(out.contains("Image /maps.svg"));
        assert!(!out.contains("Full preview available after download"));
        assert!(out.contains("Remove from Favorites"));
    }

    #[test]
    fn test_navigation_render() {
        let out = render_navigation(&Navigation::site(), false);
        assert!(out.starts_with("EduHub Learning Platform"));
        assert!(out.contains("Subjects · Tools · Community · Achievements"));
        assert!(out.contains("45 resources"));
        assert!(out.contains("Quiz Builder"));
        assert!(out.contains("Create interactive quizzes"));
        assert!(out.contains("Settings"));
    }

    #[test]
    fn test_text_list_and_empty_message() {
        let lines = vec!["Physics".to_string(), "Biology".to_string()];
        assert_eq!(render_text_list(&lines, "None.", false), "Physics\nBiology\n");
        assert_eq!(render_text_list(&[], "None.", false), "None.\n");
    }

    #[test]
    fn test_messages_render_plain() {
        let messages = vec![
            CmdMessage::success("Added to favorites: Calculus"),
            CmdMessage::warning("Sharing is not available for Calculus"),
        ];
        assert_eq!(
            render_messages(&messages, false),
            "Added to favorites: Calculus\nSharing is not available for Calculus\n"
        );
        assert_eq!(render_messages(&[], false), "");
    }

    #[test]
    fn test_icons_shared_by_document_and_presentation() {
        assert_eq!(
            file_icon(ResourceType::Document),
            file_icon(ResourceType::Presentation)
        );
        assert_ne!(file_icon(ResourceType::Pdf), file_icon(ResourceType::Video));
    }

    #[test]
    fn test_theme_defines_every_style_templates_use() {
        for name in [
            names::ICON_PDF,
            names::ICON_IMAGE,
            names::ICON_VIDEO,
            names::ICON_AUDIO,
            names::ICON_DOCUMENT,
            names::ICON_ARCHIVE,
            names::FAVORITE,
            names::NOT_FAVORITE,
            "new",
            "trending",
        ] {
            assert!(EDUHUB_THEME.has(name), "missing style {}", name);
        }
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(892), "892");
        assert_eq!(format_count(1247), "1,247");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2023, 7, 10)), "Jul 10, 2023");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("a longer title", 8), "a longe…");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_wrap_to_width_clamps_lines() {
        assert_eq!(
            wrap_to_width("one two three four", 9, 2),
            vec!["one two", "three…"]
        );
        assert_eq!(wrap_to_width("one two", 9, 2), vec!["one two"]);
        assert!(wrap_to_width("", 9, 2).is_empty());
    }
}
