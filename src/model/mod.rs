//! Data model: the article feed going in and the page documents coming out.
//!
//! Articles are immutable once loaded. Page documents are pure values built
//! by the paginator and never mutated after a page set is handed out.

mod article;
mod page;
mod page_set;

pub use article::{Article, Feed, Paragraph};
pub use page::{
    GlobalStyles, Link, Metadata, PageFormat, Position, Section, SectionContent, SectionKind,
    SectionStyles, TextAlign, FIRST_ARTICLE_PAGE, INDEX_PAGES, MAIN_PAGE, PAGE_HEIGHT, PAGE_WIDTH,
};
pub use page_set::PageSet;
