mod data;

use time::{Date, OffsetDateTime, format_description::FormatItem, macros::format_description};

use crate::domain::{entities::BlogPost, types::BlogStatus};

pub use data::SEED_POSTS;

pub const ISO_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
pub const HUMAN_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

/// Static definition of a default post, materialised by [`seed_posts`].
pub struct SeedPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub status: BlogStatus,
    pub image: &'static str,
}

impl SeedPost {
    fn to_post(&self) -> BlogPost {
        BlogPost {
            id: self.id.to_string(),
            title: self.title.to_string(),
            excerpt: self.excerpt.to_string(),
            content: self.content.to_string(),
            category: self.category.to_string(),
            date: self.date.to_string(),
            status: self.status,
            image: self.image.to_string(),
        }
    }
}

/// The posts a fresh store starts with.
pub fn seed_posts() -> Vec<BlogPost> {
    SEED_POSTS.iter().map(SeedPost::to_post).collect()
}

/// Format a timestamp's calendar date as `YYYY-MM-DD`.
pub fn iso_date(at: OffsetDateTime) -> String {
    let date = at.date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub fn parse_iso_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), ISO_DATE_FORMAT).ok()
}

/// Render a stored date for people; values that are not ISO dates are shown verbatim.
pub fn display_date(value: &str) -> String {
    parse_iso_date(value)
        .and_then(|date| date.format(HUMAN_DATE_FORMAT).ok())
        .unwrap_or_else(|| value.to_string())
}
