use super::theme::Theme;
use console::{Color, Style};
use once_cell::sync::Lazy;

/// Style names the Rust side picks per value (icons, messages, markers).
pub mod names {
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";

    pub const ICON_PDF: &str = "icon_pdf";
    pub const ICON_IMAGE: &str = "icon_image";
    pub const ICON_VIDEO: &str = "icon_video";
    pub const ICON_AUDIO: &str = "icon_audio";
    pub const ICON_DOCUMENT: &str = "icon_document";
    pub const ICON_ARCHIVE: &str = "icon_archive";

    pub const FAVORITE: &str = "favorite";
    pub const NOT_FAVORITE: &str = "not_favorite";
}

pub static EDUHUB_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
        .add(names::ICON_PDF, Style::new().red().bold())
        .add(names::ICON_IMAGE, Style::new().blue().bold())
        .add(names::ICON_VIDEO, Style::new().magenta().bold())
        .add(names::ICON_AUDIO, Style::new().green().bold())
        .add(names::ICON_DOCUMENT, Style::new().color256(208).bold())
        .add(names::ICON_ARCHIVE, Style::new().yellow().bold())
        .add(names::FAVORITE, Style::new().red())
        .add(names::NOT_FAVORITE, Style::new().dim())
        .add("brand", Style::new().bold().blue())
        .add("heading", Style::new().bold())
        .add("title", Style::new().bold())
        .add("name", Style::new().bold())
        .add("description", Style::new().color256(245))
        .add("muted", Style::new().dim())
        .add("border", Style::new().dim())
        .add("count", Style::new().bold().cyan())
        .add("category", Style::new().color256(99))
        .add("badge", Style::new().fg(Color::White).bg(Color::Black).bold())
        .add("new", Style::new().green().bold())
        .add("trending", Style::new().color256(208).bold())
        .add("star", Style::new().yellow())
        .add("table_header", Style::new().bold().underlined())
        .add("empty_title", Style::new().bold())
        .add("hint", Style::new().cyan())
        .add("action", Style::new().cyan())
        .add("action_primary", Style::new().bold().blue())
        .add("stat_rating", Style::new().bold().blue())
        .add("stat_downloads", Style::new().bold().green())
        .add("stat_size", Style::new().bold().magenta())
        .add("stat_type", Style::new().bold().color256(208))
        .add("badge_alert", Style::new().white().on_red().bold())
});
