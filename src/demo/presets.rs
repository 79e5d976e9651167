//! The two fixed demonstrations: a novel's cover image and a chapter paragraph.

pub const COVER_URL: &str = "https://novelfull.com/everyone-wants-to-pamper-the-bigshot-researcher-after-her-rebirth.html";
pub const COVER_SELECTOR: &str = ".book > img";
pub const COVER_ATTR: &str = "src";

pub const CHAPTER_URL: &str = "https://novelfull.com/everyone-wants-to-pamper-the-bigshot-researcher-after-her-rebirth/chapter-1.html";
pub const CHAPTER_SELECTOR: &str = "#chapter-content > p";
// third paragraph; a placeholder locator, not a stable content anchor
pub const CHAPTER_INDEX: usize = 2;
